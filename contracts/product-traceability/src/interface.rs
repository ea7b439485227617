//! Interface of the Product Traceability Contract
//!
//! The contract keeps, per product, an append-only journey of checkpoints
//! recording stage transitions, location, temperature and the verifying
//! participant. Stages only move forward; writes are gated by role.

use crate::types::{Certification, Checkpoint, Error, Participant, Product, Role, Stage};
use soroban_sdk::{Address, BytesN, Env, String, Vec};

pub trait ProductTraceability {
    /// Create the ledger and register `owner` as its Admin participant
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the ledger already has an owner
    fn initialize(env: Env, owner: Address) -> Result<(), Error>;

    /// Register a supply chain participant (owner only)
    ///
    /// # Arguments
    /// * `caller` - Must be the ledger owner
    /// * `participant` - Address of the new participant
    /// * `name` - Display name, snapshotted into checkpoints
    /// * `contact` - Free-form contact information
    /// * `role` - Role granted to the participant
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `AlreadyRegistered` - If the address is already an active participant
    fn register_participant(
        env: Env,
        caller: Address,
        participant: Address,
        name: String,
        contact: String,
        role: Role,
    ) -> Result<(), Error>;

    /// Permanently deactivate a participant (owner only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner, or targets the owner
    /// * `ParticipantNotFound` - If the address was never registered
    /// * `NotActive` - If the participant is already deactivated
    fn deactivate_participant(env: Env, caller: Address, participant: Address)
        -> Result<(), Error>;

    /// Register a freshly harvested product
    ///
    /// Creates the Harvest checkpoint at `origin` and grants the farmer
    /// access to the product.
    ///
    /// # Returns
    /// The sequential product ID, starting at 1
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not a registered Farmer
    /// * `NotActive` - If the caller has been deactivated
    fn register_product(
        env: Env,
        caller: Address,
        name: String,
        product_type: String,
        origin: String,
        is_organic: bool,
    ) -> Result<u64, Error>;

    /// Record a stage transition
    ///
    /// The new stage must be strictly later than the current one. Stages in
    /// between may be skipped.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not a registered participant
    /// * `NotActive` - If the caller has been deactivated
    /// * `ProductNotFound` - If the product doesn't exist
    /// * `InvalidTransition` - If the stage does not move forward
    fn add_checkpoint(
        env: Env,
        caller: Address,
        product_id: u64,
        stage: Stage,
        location: String,
        temperature: i32,
        notes: String,
        evidence_hash: String,
    ) -> Result<(), Error>;

    /// Attach a certification to a product
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not a registered participant
    /// * `NotActive` - If the caller has been deactivated
    /// * `ProductNotFound` - If the product doesn't exist
    fn add_certification(
        env: Env,
        caller: Address,
        product_id: u64,
        name: String,
        authority: String,
        expires_at: u64,
        evidence_hash: String,
    ) -> Result<(), Error>;

    /// Set a product's quality score (QualityInspector only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not a QualityInspector
    /// * `NotActive` - If the caller has been deactivated
    /// * `ProductNotFound` - If the product doesn't exist
    /// * `OutOfRange` - If `score` is above 100
    fn update_quality_score(
        env: Env,
        caller: Address,
        product_id: u64,
        score: u32,
    ) -> Result<(), Error>;

    /// Confirm hand-over to the customer (DeliveryPartner only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not a DeliveryPartner
    /// * `NotActive` - If the caller has been deactivated
    /// * `ProductNotFound` - If the product doesn't exist
    fn mark_delivered(
        env: Env,
        caller: Address,
        product_id: u64,
        customer_ref: String,
    ) -> Result<(), Error>;

    /// Grant a participant access to a product (owner or the product's farmer)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller controls neither the ledger nor the product
    /// * `ProductNotFound` - If the product doesn't exist
    /// * `ParticipantNotFound` - If the grantee is not registered
    /// * `AccessAlreadyGranted` - If the grantee already has access
    fn grant_product_access(
        env: Env,
        caller: Address,
        product_id: u64,
        grantee: Address,
    ) -> Result<(), Error>;

    /// Revoke a participant's access to a product (owner or the product's farmer)
    fn revoke_product_access(
        env: Env,
        caller: Address,
        product_id: u64,
        grantee: Address,
    ) -> Result<(), Error>;

    /// True if the product exists and has a recorded journey
    fn verify_product(env: Env, product_id: u64) -> Result<bool, Error>;

    fn get_product(env: Env, product_id: u64) -> Result<Product, Error>;

    /// Look a product up by the trace code printed on its label
    fn get_product_by_trace_code(env: Env, trace_code: BytesN<32>) -> Result<Product, Error>;

    fn get_product_journey(env: Env, product_id: u64) -> Result<Vec<Checkpoint>, Error>;

    fn get_product_certifications(env: Env, product_id: u64)
        -> Result<Vec<Certification>, Error>;

    /// True if the certification at `index` is valid and not yet expired
    fn is_certification_current(env: Env, product_id: u64, index: u32) -> Result<bool, Error>;

    fn get_checkpoint_count(env: Env, product_id: u64) -> Result<u32, Error>;

    /// # Errors
    /// * `IndexOutOfRange` - If `index` is not below the checkpoint count
    fn get_checkpoint(env: Env, product_id: u64, index: u32) -> Result<Checkpoint, Error>;

    fn get_participant(env: Env, participant: Address) -> Result<Participant, Error>;

    fn get_participants_by_role(env: Env, role: Role) -> Vec<Address>;

    fn get_farmer_products(env: Env, farmer: Address) -> Vec<u64>;

    fn has_product_access(env: Env, product_id: u64, participant: Address) -> bool;

    fn get_total_products(env: Env) -> u64;

    fn get_owner(env: Env) -> Result<Address, Error>;
}
