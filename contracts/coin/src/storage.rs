use secret_apr::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
    PERSISTENT_TARGET_TTL,
};
use soroban_sdk::{contracttype, log, Address, Env};

use crate::error::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Minter,
    Initialized,
    Balance(Address),
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&DataKey::Initialized, &true);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn save_admin(e: &Env, address: &Address) {
    e.storage().instance().set(&DataKey::Admin, address);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);

    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or_else(|| {
            log!(e, "Coin: Admin not set");
            ContractError::AdminNotSet
        })
}

pub fn get_minter(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);

    e.storage().instance().get(&DataKey::Minter)
}

pub fn save_minter(e: &Env, minter: &Address) {
    e.storage().instance().set(&DataKey::Minter, minter);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

/// Balances are 64-bit, the width the encrypted balance type holds.
pub fn read_balance(e: &Env, owner: &Address) -> u64 {
    let key = DataKey::Balance(owner.clone());
    let balance = e.storage().persistent().get(&key).unwrap_or(0u64);
    e.storage().persistent().has(&key).then(|| {
        e.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    });

    balance
}

pub fn write_balance(e: &Env, owner: &Address, balance: u64) {
    let key = DataKey::Balance(owner.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL);
}
