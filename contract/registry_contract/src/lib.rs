#![no_std]

//! Maps opaque campaign type identifiers to the factory contracts that
//! create campaigns of that type. Campaign contracts only ever read it.

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

mod storage;
pub use storage::{CampaignTypeRegisteredEvent, RegistryError, TypeId};
use storage::DataKey;


#[contract]
pub struct RegistryContract;

#[contractimpl]
impl RegistryContract {
    pub fn init(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TypeIds, &Vec::<TypeId>::new(&env));
        Ok(())
    }

    /// Register or replace the factory for `type_id`. Admin only.
    pub fn register_campaign_type(
        env: Env,
        caller: Address,
        type_id: TypeId,
        factory: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;
        if caller != admin {
            return Err(RegistryError::NotAdmin);
        }

        let key = DataKey::Factory(type_id.clone());
        if !env.storage().persistent().has(&key) {
            let mut ids: Vec<TypeId> = env
                .storage()
                .instance()
                .get(&DataKey::TypeIds)
                .unwrap_or(Vec::new(&env));
            ids.push_back(type_id.clone());
            env.storage().instance().set(&DataKey::TypeIds, &ids);
        }
        env.storage().persistent().set(&key, &factory);

        env.events().publish(
            (Symbol::new(&env, "campaign_type_registered"),),
            CampaignTypeRegisteredEvent { type_id, factory },
        );
        Ok(())
    }

    pub fn get_factory(env: Env, type_id: TypeId) -> Result<Address, RegistryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Factory(type_id))
            .ok_or(RegistryError::TypeNotFound)
    }

    pub fn list_campaign_types(env: Env) -> Vec<TypeId> {
        env.storage()
            .instance()
            .get(&DataKey::TypeIds)
            .unwrap_or(Vec::new(&env))
    }
}
