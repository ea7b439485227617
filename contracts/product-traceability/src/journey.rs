use crate::access::AccessManager;
use crate::event::{
    CheckpointAdded, ProductDelivered, TemperatureRecorded, CHECKPOINT_ADDED, PRODUCT_DELIVERED,
    TEMPERATURE_RECORDED, TRACE,
};
use crate::product::ProductManager;
use crate::storage;
use crate::types::{Checkpoint, DataKey, Error, Role, Stage};
use soroban_sdk::{log, Address, Env, String, Vec};

pub struct JourneyManager;

impl JourneyManager {
    /// Append a checkpoint to a product's journey without any checks.
    /// Callers keep the product's stage in step with the last entry.
    pub fn append(env: &Env, product_id: u64, checkpoint: Checkpoint) {
        let key = DataKey::Journey(product_id);
        let mut journey: Vec<Checkpoint> =
            storage::read(env, &key).unwrap_or_else(|| Vec::new(env));
        journey.push_back(checkpoint);
        storage::write(env, &key, &journey);
    }

    /// Record a forward stage transition
    pub fn add_checkpoint(
        env: &Env,
        caller: &Address,
        product_id: u64,
        stage: Stage,
        location: String,
        temperature: i32,
        notes: String,
        evidence_hash: String,
    ) -> Result<(), Error> {
        let verifier = AccessManager::require_active(env, caller)?;
        let mut product = ProductManager::get(env, product_id)?;

        if !product.stage.can_advance_to(stage) {
            return Err(Error::InvalidTransition);
        }

        let timestamp = env.ledger().timestamp();
        Self::append(
            env,
            product_id,
            Checkpoint {
                stage,
                location,
                timestamp,
                verifier: caller.clone(),
                verifier_name: verifier.name,
                verifier_role: verifier.role,
                temperature,
                notes,
                evidence_hash,
            },
        );

        log!(
            env,
            "product {} moved from {} to {}",
            product_id,
            product.stage.ordinal(),
            stage.ordinal()
        );

        product.stage = stage;
        product.temperature = temperature;
        ProductManager::save(env, &product);

        env.events().publish(
            (TRACE, CHECKPOINT_ADDED),
            CheckpointAdded {
                product_id,
                stage,
                verifier: caller.clone(),
            },
        );
        env.events().publish(
            (TRACE, TEMPERATURE_RECORDED),
            TemperatureRecorded {
                product_id,
                temperature,
                timestamp,
            },
        );

        Ok(())
    }

    /// Close a product's journey at the customer's door.
    ///
    /// Unlike `add_checkpoint` this does not require forward movement, so it
    /// succeeds from any stage, including Delivered itself.
    pub fn mark_delivered(
        env: &Env,
        caller: &Address,
        product_id: u64,
        customer_ref: String,
    ) -> Result<(), Error> {
        let partner = AccessManager::require_role(env, caller, Role::DeliveryPartner)?;
        let mut product = ProductManager::get(env, product_id)?;

        Self::append(
            env,
            product_id,
            Checkpoint {
                stage: Stage::Delivered,
                location: String::from_str(env, "Customer Location"),
                timestamp: env.ledger().timestamp(),
                verifier: caller.clone(),
                verifier_name: partner.name,
                verifier_role: partner.role,
                temperature: product.temperature,
                notes: String::from_str(env, "Delivered to customer"),
                evidence_hash: String::from_str(env, ""),
            },
        );

        product.stage = Stage::Delivered;
        ProductManager::save(env, &product);

        log!(env, "product {} delivered by {}", product_id, caller.clone());

        env.events().publish(
            (TRACE, CHECKPOINT_ADDED),
            CheckpointAdded {
                product_id,
                stage: Stage::Delivered,
                verifier: caller.clone(),
            },
        );
        env.events().publish(
            (TRACE, PRODUCT_DELIVERED),
            ProductDelivered {
                product_id,
                customer_ref,
                partner: caller.clone(),
            },
        );

        Ok(())
    }

    /// Full journey of a product, in append order
    pub fn get_journey(env: &Env, product_id: u64) -> Result<Vec<Checkpoint>, Error> {
        ProductManager::get(env, product_id)?;
        Ok(storage::read(env, &DataKey::Journey(product_id)).unwrap_or_else(|| Vec::new(env)))
    }

    pub fn get_checkpoint_count(env: &Env, product_id: u64) -> Result<u32, Error> {
        Ok(Self::get_journey(env, product_id)?.len())
    }

    pub fn get_checkpoint(env: &Env, product_id: u64, index: u32) -> Result<Checkpoint, Error> {
        Self::get_journey(env, product_id)?
            .get(index)
            .ok_or(Error::IndexOutOfRange)
    }

    /// A product verifies when it has a recorded journey
    pub fn verify(env: &Env, product_id: u64) -> Result<bool, Error> {
        Ok(!Self::get_journey(env, product_id)?.is_empty())
    }
}
