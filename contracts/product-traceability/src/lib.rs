#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod access;
mod certification;
mod event;
mod interface;
mod journey;
mod participant;
mod product;
mod storage;
mod types;
mod utils;

use crate::access::AccessManager;
use crate::certification::CertificationManager;
use crate::journey::JourneyManager;
use crate::participant::ParticipantManager;
use crate::product::ProductManager;

pub use crate::interface::ProductTraceability;
pub use crate::types::{Certification, Checkpoint, Error, Participant, Product, Role, Stage};

#[contract]
pub struct ProductTraceabilityContract;

#[contractimpl]
impl ProductTraceability for ProductTraceabilityContract {
    fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&types::DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();
        storage::set_owner(&env, &owner);
        storage::set_product_count(&env, 0);
        ParticipantManager::init_owner(&env, &owner);

        Ok(())
    }

    fn register_participant(
        env: Env,
        caller: Address,
        participant: Address,
        name: String,
        contact: String,
        role: Role,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        ParticipantManager::register(&env, &caller, participant, name, contact, role)
    }

    fn deactivate_participant(
        env: Env,
        caller: Address,
        participant: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        ParticipantManager::deactivate(&env, &caller, participant)
    }

    fn register_product(
        env: Env,
        caller: Address,
        name: String,
        product_type: String,
        origin: String,
        is_organic: bool,
    ) -> Result<u64, Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        ProductManager::register(&env, &caller, name, product_type, origin, is_organic)
    }

    fn add_checkpoint(
        env: Env,
        caller: Address,
        product_id: u64,
        stage: Stage,
        location: String,
        temperature: i32,
        notes: String,
        evidence_hash: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        JourneyManager::add_checkpoint(
            &env,
            &caller,
            product_id,
            stage,
            location,
            temperature,
            notes,
            evidence_hash,
        )
    }

    fn add_certification(
        env: Env,
        caller: Address,
        product_id: u64,
        name: String,
        authority: String,
        expires_at: u64,
        evidence_hash: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        CertificationManager::add(
            &env,
            &caller,
            product_id,
            name,
            authority,
            expires_at,
            evidence_hash,
        )
    }

    fn update_quality_score(
        env: Env,
        caller: Address,
        product_id: u64,
        score: u32,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        ProductManager::update_quality_score(&env, &caller, product_id, score)
    }

    fn mark_delivered(
        env: Env,
        caller: Address,
        product_id: u64,
        customer_ref: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        JourneyManager::mark_delivered(&env, &caller, product_id, customer_ref)
    }

    fn grant_product_access(
        env: Env,
        caller: Address,
        product_id: u64,
        grantee: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        AccessManager::grant_product_access(&env, &caller, product_id, &grantee)
    }

    fn revoke_product_access(
        env: Env,
        caller: Address,
        product_id: u64,
        grantee: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        storage::bump_instance(&env);
        AccessManager::revoke_product_access(&env, &caller, product_id, &grantee)
    }

    fn verify_product(env: Env, product_id: u64) -> Result<bool, Error> {
        JourneyManager::verify(&env, product_id)
    }

    fn get_product(env: Env, product_id: u64) -> Result<Product, Error> {
        ProductManager::get(&env, product_id)
    }

    fn get_product_by_trace_code(env: Env, trace_code: BytesN<32>) -> Result<Product, Error> {
        ProductManager::get_by_trace_code(&env, trace_code)
    }

    fn get_product_journey(env: Env, product_id: u64) -> Result<Vec<Checkpoint>, Error> {
        JourneyManager::get_journey(&env, product_id)
    }

    fn get_product_certifications(
        env: Env,
        product_id: u64,
    ) -> Result<Vec<Certification>, Error> {
        CertificationManager::get_all(&env, product_id)
    }

    fn is_certification_current(env: Env, product_id: u64, index: u32) -> Result<bool, Error> {
        CertificationManager::is_current(&env, product_id, index)
    }

    fn get_checkpoint_count(env: Env, product_id: u64) -> Result<u32, Error> {
        JourneyManager::get_checkpoint_count(&env, product_id)
    }

    fn get_checkpoint(env: Env, product_id: u64, index: u32) -> Result<Checkpoint, Error> {
        JourneyManager::get_checkpoint(&env, product_id, index)
    }

    fn get_participant(env: Env, participant: Address) -> Result<Participant, Error> {
        ParticipantManager::get(&env, &participant)
    }

    fn get_participants_by_role(env: Env, role: Role) -> Vec<Address> {
        ParticipantManager::get_by_role(&env, role)
    }

    fn get_farmer_products(env: Env, farmer: Address) -> Vec<u64> {
        ProductManager::get_farmer_products(&env, &farmer)
    }

    fn has_product_access(env: Env, product_id: u64, participant: Address) -> bool {
        AccessManager::has_product_access(&env, product_id, &participant)
    }

    fn get_total_products(env: Env) -> u64 {
        ProductManager::get_total_products(&env)
    }

    fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }
}
