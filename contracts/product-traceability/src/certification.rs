use crate::access::AccessManager;
use crate::event::{CertificationAdded, CERTIFICATION_ADDED, TRACE};
use crate::product::ProductManager;
use crate::storage;
use crate::types::{Certification, DataKey, Error};
use soroban_sdk::{Address, Env, String, Vec};

pub struct CertificationManager;

impl CertificationManager {
    /// Attach a certification to a product. Any active participant may certify.
    pub fn add(
        env: &Env,
        caller: &Address,
        product_id: u64,
        name: String,
        authority: String,
        expires_at: u64,
        evidence_hash: String,
    ) -> Result<(), Error> {
        AccessManager::require_active(env, caller)?;
        let mut product = ProductManager::get(env, product_id)?;

        let certification = Certification {
            name: name.clone(),
            authority: authority.clone(),
            issued_at: env.ledger().timestamp(),
            expires_at,
            evidence_hash,
            valid: true,
        };

        let key = DataKey::Certifications(product_id);
        let mut certifications: Vec<Certification> =
            storage::read(env, &key).unwrap_or_else(|| Vec::new(env));
        certifications.push_back(certification);
        storage::write(env, &key, &certifications);

        if !product.certified {
            product.certified = true;
            ProductManager::save(env, &product);
        }

        env.events().publish(
            (TRACE, CERTIFICATION_ADDED),
            CertificationAdded {
                product_id,
                name,
                authority,
            },
        );

        Ok(())
    }

    /// All certifications of a product, in issue order
    pub fn get_all(env: &Env, product_id: u64) -> Result<Vec<Certification>, Error> {
        ProductManager::get(env, product_id)?;
        Ok(storage::read(env, &DataKey::Certifications(product_id))
            .unwrap_or_else(|| Vec::new(env)))
    }

    /// Whether a certification is valid and unexpired at the current ledger time.
    /// The stored `valid` flag is not rewritten when the expiry passes.
    pub fn is_current(env: &Env, product_id: u64, index: u32) -> Result<bool, Error> {
        let certification = Self::get_all(env, product_id)?
            .get(index)
            .ok_or(Error::IndexOutOfRange)?;

        Ok(certification.valid && certification.expires_at > env.ledger().timestamp())
    }
}
