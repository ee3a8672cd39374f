use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage_types::{
    CrowdfundError, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Get current timestamp
pub fn now(e: &Env) -> u64 {
    e.ledger().timestamp()
}

pub fn check_initialized(e: &Env) -> Result<(), CrowdfundError> {
    if !e.storage().instance().has(&DataKey::Admin) {
        return Err(CrowdfundError::NotInitialized);
    }
    Ok(())
}

pub fn token_client<'a>(e: &'a Env) -> Result<token::TokenClient<'a>, CrowdfundError> {
    let token_address: Address = e
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)?;
    Ok(token::TokenClient::new(e, &token_address))
}

pub fn checked_add(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::ArithmeticOverflow))
}

pub fn checked_add_u32(e: &Env, a: u32, b: u32) -> u32 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::ArithmeticOverflow))
}

pub fn checked_mul(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_mul(b)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::ArithmeticOverflow))
}
