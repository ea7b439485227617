use crate::access::AccessManager;
use crate::event::{
    ParticipantDeactivated, ParticipantRegistered, PARTICIPANT_DEACTIVATED,
    PARTICIPANT_REGISTERED, TRACE,
};
use crate::storage;
use crate::types::{DataKey, Error, Participant, Role};
use soroban_sdk::{log, Address, Env, String, Vec};

pub struct ParticipantManager;

impl ParticipantManager {
    /// Register the ledger owner as an active Admin participant
    pub fn init_owner(env: &Env, owner: &Address) {
        let participant = Participant {
            address: owner.clone(),
            name: String::from_str(env, "Admin"),
            contact: String::from_str(env, ""),
            role: Role::Admin,
            active: true,
            registered_at: env.ledger().timestamp(),
        };
        Self::store(env, &participant);
    }

    /// Register a new participant (owner only)
    pub fn register(
        env: &Env,
        caller: &Address,
        address: Address,
        name: String,
        contact: String,
        role: Role,
    ) -> Result<(), Error> {
        AccessManager::verify_owner(env, caller)?;

        // Deactivated addresses may be registered again
        if let Some(existing) = Self::find(env, &address) {
            if existing.active {
                return Err(Error::AlreadyRegistered);
            }
        }

        let participant = Participant {
            address: address.clone(),
            name: name.clone(),
            contact,
            role,
            active: true,
            registered_at: env.ledger().timestamp(),
        };
        Self::store(env, &participant);

        log!(env, "participant {} registered as {}", address, role);

        env.events().publish(
            (TRACE, PARTICIPANT_REGISTERED),
            ParticipantRegistered {
                participant: address,
                name,
                role,
            },
        );

        Ok(())
    }

    /// Deactivate a participant (owner only). There is no way back.
    /// The owner's own Admin record stays active.
    pub fn deactivate(env: &Env, caller: &Address, address: Address) -> Result<(), Error> {
        AccessManager::verify_owner(env, caller)?;
        if &address == caller {
            return Err(Error::Unauthorized);
        }

        let mut participant = Self::get(env, &address)?;
        if !participant.active {
            return Err(Error::NotActive);
        }

        participant.active = false;
        storage::write(env, &DataKey::Participant(address.clone()), &participant);

        env.events().publish(
            (TRACE, PARTICIPANT_DEACTIVATED),
            ParticipantDeactivated {
                participant: address,
            },
        );

        Ok(())
    }

    /// Get participant details
    pub fn get(env: &Env, address: &Address) -> Result<Participant, Error> {
        Self::find(env, address).ok_or(Error::ParticipantNotFound)
    }

    /// Addresses currently holding `role`, in registration order
    pub fn get_by_role(env: &Env, role: Role) -> Vec<Address> {
        let members: Vec<Address> =
            storage::read(env, &DataKey::RoleMembers(role)).unwrap_or_else(|| Vec::new(env));

        let mut current = Vec::new(env);
        for address in members.iter() {
            if let Some(participant) = Self::find(env, &address) {
                if participant.role == role {
                    current.push_back(address);
                }
            }
        }
        current
    }

    fn find(env: &Env, address: &Address) -> Option<Participant> {
        storage::read(env, &DataKey::Participant(address.clone()))
    }

    fn store(env: &Env, participant: &Participant) {
        storage::write(
            env,
            &DataKey::Participant(participant.address.clone()),
            participant,
        );

        let key = DataKey::RoleMembers(participant.role);
        let mut members: Vec<Address> = storage::read(env, &key).unwrap_or_else(|| Vec::new(env));
        if !members.contains(&participant.address) {
            members.push_back(participant.address.clone());
            storage::write(env, &key, &members);
        }
    }
}
