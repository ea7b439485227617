use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,                       // Identity that created the ledger
    ProductCount,                // Counter for product IDs
    Participant(Address),        // Address -> Participant
    RoleMembers(Role),           // Role -> Vec<Address>
    Product(u64),                // Product ID -> Product
    Journey(u64),                // Product ID -> Vec<Checkpoint>
    Certifications(u64),         // Product ID -> Vec<Certification>
    ProductAccess(u64, Address), // (Product ID, Address) -> bool
    FarmerProducts(Address),     // Farmer -> Vec<Product ID>
    TraceCode(BytesN<32>),       // Trace code -> Product ID
}

/// Role held by a participant of the supply chain
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Farmer,
    QualityInspector,
    Processor,
    Packager,
    Transporter,
    WarehouseManager,
    Retailer,
    DeliveryPartner,
}

/// Stage of a product's journey. Ordinals define the only legal direction of travel.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Stage {
    Harvest = 0,
    QualityCheck = 1,
    Processing = 2,
    Packaging = 3,
    Storage = 4,
    Transport = 5,
    Warehouse = 6,
    Delivery = 7,
    Delivered = 8,
}

impl Stage {
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// True if moving from `self` to `next` goes strictly forward.
    /// Skipping intermediate stages is allowed.
    pub fn can_advance_to(self, next: Stage) -> bool {
        next.ordinal() > self.ordinal()
    }
}

/// An actor authorized to act on products
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub address: Address,
    pub name: String,
    pub contact: String,
    pub role: Role,
    pub active: bool,
    pub registered_at: u64,
}

/// A unit of goods tracked through the chain
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub product_type: String,
    pub origin: String,
    pub farmer: Address,
    pub stage: Stage,
    pub organic: bool,
    pub certified: bool,
    pub quality_score: u32,
    pub temperature: i32, // Last recorded temperature
    pub harvested_at: u64,
    pub trace_code: BytesN<32>,
}

/// One immutable journey entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub stage: Stage,
    pub location: String,
    pub timestamp: u64,
    pub verifier: Address,
    pub verifier_name: String, // Snapshot at write time
    pub verifier_role: Role,   // Snapshot at write time
    pub temperature: i32,
    pub notes: String,
    pub evidence_hash: String,
}

/// An attestation attached to a product
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certification {
    pub name: String,
    pub authority: String,
    pub issued_at: u64,
    pub expires_at: u64,
    pub evidence_hash: String,
    pub valid: bool,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,        // Ledger has no owner yet
    AlreadyInitialized = 2,    // Ledger already has an owner
    Unauthorized = 3,          // Caller lacks the required role or is not the owner
    NotActive = 4,             // Caller or target participant is deactivated
    AlreadyRegistered = 5,     // Target address is already an active participant
    ParticipantNotFound = 6,   // Unknown participant address
    ProductNotFound = 7,       // Unknown product ID
    IndexOutOfRange = 8,       // Checkpoint or certification index past the end
    InvalidTransition = 9,     // Stage does not move strictly forward
    OutOfRange = 10,           // Quality score above 100
    TraceCodeNotFound = 11,    // No product carries this trace code
    AccessAlreadyGranted = 12, // Grantee already has product access
}
