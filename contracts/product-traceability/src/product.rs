use crate::access::AccessManager;
use crate::event::{
    CheckpointAdded, ProductRegistered, QualityScoreUpdated, CHECKPOINT_ADDED, PRODUCT_REGISTERED,
    QUALITY_UPDATED, TRACE,
};
use crate::journey::JourneyManager;
use crate::storage;
use crate::types::{Checkpoint, DataKey, Error, Product, Role, Stage};
use crate::utils;
use soroban_sdk::{log, Address, BytesN, Env, String, Vec};

pub struct ProductManager;

impl ProductManager {
    /// Register a new product on behalf of an active farmer
    pub fn register(
        env: &Env,
        caller: &Address,
        name: String,
        product_type: String,
        origin: String,
        is_organic: bool,
    ) -> Result<u64, Error> {
        let farmer = AccessManager::require_role(env, caller, Role::Farmer)?;

        // Get next product ID
        let product_id = storage::get_product_count(env) + 1;
        let now = env.ledger().timestamp();
        let trace_code = utils::generate_trace_code(env, product_id, caller);

        let product = Product {
            id: product_id,
            name: name.clone(),
            product_type,
            origin: origin.clone(),
            farmer: caller.clone(),
            stage: Stage::Harvest,
            organic: is_organic,
            certified: false,
            quality_score: 0,
            temperature: 0,
            harvested_at: now,
            trace_code: trace_code.clone(),
        };

        Self::save(env, &product);
        storage::set_product_count(env, product_id);
        storage::write(env, &DataKey::TraceCode(trace_code), &product_id);

        // Index under the farmer
        let key = DataKey::FarmerProducts(caller.clone());
        let mut farmer_products: Vec<u64> =
            storage::read(env, &key).unwrap_or_else(|| Vec::new(env));
        farmer_products.push_back(product_id);
        storage::write(env, &key, &farmer_products);

        AccessManager::record_access(env, product_id, caller);

        // Every journey starts at the farm
        JourneyManager::append(
            env,
            product_id,
            Checkpoint {
                stage: Stage::Harvest,
                location: origin,
                timestamp: now,
                verifier: caller.clone(),
                verifier_name: farmer.name,
                verifier_role: farmer.role,
                temperature: 0,
                notes: String::from_str(env, "Product harvested"),
                evidence_hash: String::from_str(env, ""),
            },
        );

        log!(env, "product {} registered by {}", product_id, caller.clone());

        env.events().publish(
            (TRACE, PRODUCT_REGISTERED),
            ProductRegistered {
                product_id,
                name,
                farmer: caller.clone(),
            },
        );
        env.events().publish(
            (TRACE, CHECKPOINT_ADDED),
            CheckpointAdded {
                product_id,
                stage: Stage::Harvest,
                verifier: caller.clone(),
            },
        );

        Ok(product_id)
    }

    /// Overwrite a product's quality score (quality inspectors only)
    pub fn update_quality_score(
        env: &Env,
        caller: &Address,
        product_id: u64,
        score: u32,
    ) -> Result<(), Error> {
        AccessManager::require_role(env, caller, Role::QualityInspector)?;

        let mut product = Self::get(env, product_id)?;

        if !utils::is_valid_quality_score(score) {
            return Err(Error::OutOfRange);
        }

        product.quality_score = score;
        Self::save(env, &product);

        env.events().publish(
            (TRACE, QUALITY_UPDATED),
            QualityScoreUpdated {
                product_id,
                score,
                inspector: caller.clone(),
            },
        );

        Ok(())
    }

    /// Get product details
    pub fn get(env: &Env, product_id: u64) -> Result<Product, Error> {
        storage::read(env, &DataKey::Product(product_id)).ok_or(Error::ProductNotFound)
    }

    pub fn save(env: &Env, product: &Product) {
        storage::write(env, &DataKey::Product(product.id), product);
    }

    /// Resolve a label's trace code to its product
    pub fn get_by_trace_code(env: &Env, trace_code: BytesN<32>) -> Result<Product, Error> {
        let product_id: u64 = storage::read(env, &DataKey::TraceCode(trace_code))
            .ok_or(Error::TraceCodeNotFound)?;
        Self::get(env, product_id)
    }

    /// Product IDs registered by a farmer, oldest first
    pub fn get_farmer_products(env: &Env, farmer: &Address) -> Vec<u64> {
        storage::read(env, &DataKey::FarmerProducts(farmer.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn get_total_products(env: &Env) -> u64 {
        storage::get_product_count(env)
    }
}
