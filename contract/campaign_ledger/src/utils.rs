use soroban_sdk::{log, token, Address, Env};

use crate::error::LedgerError;
use crate::storage_types::{DataKey, LedgerConfig, TTL_INSTANCE, TTL_PERSISTENT, TTL_THRESHOLD};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn read_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

/// Check if timestamp is in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

/// Move `amount` of the configured token, reporting failure instead of trapping.
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    let token_client = token::TokenClient::new(env, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed", amount);
            Err(LedgerError::TransferFailed)
        }
    }
}
