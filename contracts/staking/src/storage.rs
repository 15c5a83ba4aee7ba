use secret_apr::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
    PERSISTENT_TARGET_TTL,
};
use soroban_sdk::{contracttype, log, panic_with_error, symbol_short, Address, Env, Symbol};

use crate::error::ContractError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    // Token deposited as principal
    pub base_token: Address,
    // Confidential coin the interest is minted in
    pub coin: Address,
    // Raw base token amount that counts as one whole staked unit, 10^decimals
    pub principal_unit: i128,
}
const CONFIG: Symbol = symbol_short!("CONFIG");

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);

    env.storage().instance().get(&CONFIG).unwrap_or_else(|| {
        log!(env, "Stake: Config not set");
        panic_with_error!(env, ContractError::ConfigNotSet)
    })
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&CONFIG, &config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

/// Staking record of a single participant.
///
/// Created on the first deposit and never removed. A full withdrawal leaves
/// `principal == 0` with the timestamps and reward totals kept as history, so a
/// missing entry is the only way to tell "never staked" apart from "closed".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Position {
    /// The amount of staked base tokens
    pub principal: i128,
    /// Timestamp of the first deposit, never updated afterwards
    pub deposited_at: u64,
    /// Accrual watermark, moved to the current time on every settlement
    pub last_claim_at: u64,
    /// Total reward ever settled for this position
    pub total_claimed: u128,
    /// Settled reward that has not been minted yet
    pub unminted: u128,
}

impl Position {
    pub fn open(now: u64) -> Self {
        Position {
            deposited_at: now,
            last_claim_at: now,
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.principal > 0
    }
}

pub fn get_position(env: &Env, key: &Address) -> Option<Position> {
    let position = env.storage().persistent().get::<_, Position>(key);
    position.is_some().then(|| {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    });

    position
}

pub fn save_position(env: &Env, key: &Address, position: &Position) {
    env.storage().persistent().set(key, position);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL);
}

pub mod utils {
    use super::*;

    use soroban_sdk::{log, ConversionError, TryFromVal, Val};

    #[derive(Clone, Copy)]
    #[repr(u32)]
    pub enum DataKey {
        Admin = 0,
        TotalStaked = 1,
        Initialized = 2,
    }

    impl TryFromVal<Env, DataKey> for Val {
        type Error = ConversionError;

        fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
            Ok((*v as u32).into())
        }
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
                log!(e, "Stake: Admin not set");
                ContractError::AdminNotSet
            })
    }

    pub fn init_total_staked(e: &Env) {
        save_total_staked(e, 0);
    }

    pub fn increase_total_staked(e: &Env, amount: i128) -> Result<(), ContractError> {
        let total = get_total_staked_counter(e)
            .checked_add(amount)
            .ok_or_else(|| {
                log!(e, "Stake: Increase total staked: overflow");
                ContractError::ContractMathError
            })?;
        save_total_staked(e, total);

        Ok(())
    }

    pub fn decrease_total_staked(e: &Env, amount: i128) -> Result<(), ContractError> {
        let total = get_total_staked_counter(e)
            .checked_sub(amount)
            .filter(|total| *total >= 0)
            .ok_or_else(|| {
                log!(e, "Stake: Decrease total staked: would drop below zero");
                ContractError::ContractMathError
            })?;
        save_total_staked(e, total);

        Ok(())
    }

    pub fn get_total_staked_counter(e: &Env) -> i128 {
        let total_staked = e
            .storage()
            .persistent()
            .get(&DataKey::TotalStaked)
            .unwrap_or(0i128);
        e.storage()
            .persistent()
            .has(&DataKey::TotalStaked)
            .then(|| {
                e.storage().persistent().extend_ttl(
                    &DataKey::TotalStaked,
                    PERSISTENT_RENEWAL_THRESHOLD,
                    PERSISTENT_TARGET_TTL,
                )
            });

        total_staked
    }

    fn save_total_staked(e: &Env, total: i128) {
        e.storage().persistent().set(&DataKey::TotalStaked, &total);
        e.storage().persistent().extend_ttl(
            &DataKey::TotalStaked,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    }
}
