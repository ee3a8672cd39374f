use soroban_sdk::{contracterror, contracttype, Address, BytesN};

pub type TypeId = BytesN<32>;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    TypeIds,           // Registration order
    Factory(TypeId),   // TypeId -> factory contract
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignTypeRegisteredEvent {
    pub type_id: TypeId,
    pub factory: Address,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    TypeNotFound = 4,
}
