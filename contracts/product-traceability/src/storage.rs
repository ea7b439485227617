use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

// Ledgers close roughly every 5 seconds.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

// Owner and product counter live with the contract instance.
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Participants, products, journeys and certifications are never deleted,
// so every touch pushes their expiry out again.
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Keep the contract instance (and its owner/counter entries) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Read a persistent record, extending its lifetime if present
pub fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let value = env.storage().persistent().get::<DataKey, V>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    value
}

/// Write a persistent record and extend its lifetime
pub fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn has(env: &Env, key: &DataKey) -> bool {
    env.storage().persistent().has(key)
}

pub fn remove(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_product_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProductCount)
        .unwrap_or(0)
}

pub fn set_product_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProductCount, &count);
    bump_instance(env);
}
