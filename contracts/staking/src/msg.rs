use soroban_sdk::contracttype;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeResponse {
    /// Base tokens currently staked
    pub principal: i128,
    /// Timestamp of the first deposit
    pub deposited_at: u64,
    /// Timestamp of the last settlement
    pub last_claim_at: u64,
    /// Cumulative reward settled for this position, in raw COIN units
    pub total_claimed: u128,
    /// Reward a claim would mint right now, in raw COIN units
    pub pending: u128,
}
