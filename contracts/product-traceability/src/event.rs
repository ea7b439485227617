use crate::types::{Role, Stage};
use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// Topic shared by every event this contract publishes.
pub const TRACE: Symbol = symbol_short!("trace");

pub const PARTICIPANT_REGISTERED: Symbol = symbol_short!("part_reg");
pub const PARTICIPANT_DEACTIVATED: Symbol = symbol_short!("part_off");
pub const PRODUCT_REGISTERED: Symbol = symbol_short!("prod_reg");
pub const CHECKPOINT_ADDED: Symbol = symbol_short!("chkpoint");
pub const TEMPERATURE_RECORDED: Symbol = symbol_short!("temp");
pub const CERTIFICATION_ADDED: Symbol = symbol_short!("cert");
pub const QUALITY_UPDATED: Symbol = symbol_short!("quality");
pub const PRODUCT_DELIVERED: Symbol = symbol_short!("delivered");
pub const ACCESS_GRANTED: Symbol = symbol_short!("acc_grant");
pub const ACCESS_REVOKED: Symbol = symbol_short!("acc_revok");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRegistered {
    pub participant: Address,
    pub name: String,
    pub role: Role,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantDeactivated {
    pub participant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegistered {
    pub product_id: u64,
    pub name: String,
    pub farmer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckpointAdded {
    pub product_id: u64,
    pub stage: Stage,
    pub verifier: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemperatureRecorded {
    pub product_id: u64,
    pub temperature: i32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificationAdded {
    pub product_id: u64,
    pub name: String,
    pub authority: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QualityScoreUpdated {
    pub product_id: u64,
    pub score: u32,
    pub inspector: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductDelivered {
    pub product_id: u64,
    pub customer_ref: String,
    pub partner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessChanged {
    pub product_id: u64,
    pub grantee: Address,
    pub granted: bool,
}
