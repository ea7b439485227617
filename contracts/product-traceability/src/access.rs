use crate::event::{AccessChanged, ACCESS_GRANTED, ACCESS_REVOKED, TRACE};
use crate::product::ProductManager;
use crate::storage;
use crate::types::{DataKey, Error, Participant, Role};
use soroban_sdk::{Address, Env};

pub struct AccessManager;

impl AccessManager {
    /// Verify that `caller` is the ledger owner
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = storage::get_owner(env)?;
        if caller != &owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Load the caller's participant record, requiring it to be active.
    /// Unknown callers are `Unauthorized`, deactivated ones `NotActive`.
    pub fn require_active(env: &Env, caller: &Address) -> Result<Participant, Error> {
        let participant: Participant =
            storage::read(env, &DataKey::Participant(caller.clone())).ok_or(Error::Unauthorized)?;

        if !participant.active {
            return Err(Error::NotActive);
        }

        Ok(participant)
    }

    /// Same as `require_active`, additionally requiring `role`
    pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<Participant, Error> {
        let participant = Self::require_active(env, caller)?;
        if participant.role != role {
            return Err(Error::Unauthorized);
        }
        Ok(participant)
    }

    /// Check whether `who` may access a product
    pub fn has_product_access(env: &Env, product_id: u64, who: &Address) -> bool {
        storage::read::<bool>(env, &DataKey::ProductAccess(product_id, who.clone()))
            .unwrap_or(false)
    }

    /// Record access without any caller checks. Used at product registration.
    pub fn record_access(env: &Env, product_id: u64, who: &Address) {
        storage::write(env, &DataKey::ProductAccess(product_id, who.clone()), &true);
    }

    /// Grant product access. Caller must be the owner or the product's farmer.
    pub fn grant_product_access(
        env: &Env,
        caller: &Address,
        product_id: u64,
        grantee: &Address,
    ) -> Result<(), Error> {
        Self::verify_product_controller(env, caller, product_id)?;

        if !storage::has(env, &DataKey::Participant(grantee.clone())) {
            return Err(Error::ParticipantNotFound);
        }
        if Self::has_product_access(env, product_id, grantee) {
            return Err(Error::AccessAlreadyGranted);
        }

        Self::record_access(env, product_id, grantee);

        env.events().publish(
            (TRACE, ACCESS_GRANTED),
            AccessChanged {
                product_id,
                grantee: grantee.clone(),
                granted: true,
            },
        );

        Ok(())
    }

    /// Revoke product access. Revoking an absent grant is a no-op.
    pub fn revoke_product_access(
        env: &Env,
        caller: &Address,
        product_id: u64,
        grantee: &Address,
    ) -> Result<(), Error> {
        Self::verify_product_controller(env, caller, product_id)?;

        if Self::has_product_access(env, product_id, grantee) {
            storage::remove(env, &DataKey::ProductAccess(product_id, grantee.clone()));

            env.events().publish(
                (TRACE, ACCESS_REVOKED),
                AccessChanged {
                    product_id,
                    grantee: grantee.clone(),
                    granted: false,
                },
            );
        }

        Ok(())
    }

    // Owner, or the active farmer who registered the product.
    // The caller is checked before the product is looked up.
    fn verify_product_controller(
        env: &Env,
        caller: &Address,
        product_id: u64,
    ) -> Result<(), Error> {
        let is_owner = Self::verify_owner(env, caller).is_ok();
        if !is_owner {
            Self::require_active(env, caller)?;
        }

        let product = ProductManager::get(env, product_id)?;
        if !is_owner && caller != &product.farmer {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
