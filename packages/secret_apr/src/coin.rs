use soroban_sdk::{contractclient, Address, Env};

/// Decimals of the reward asset; one displayed COIN is `10^REWARD_DECIMALS` raw units.
pub const REWARD_DECIMALS: u32 = 6;

/// Interface of the confidential reward asset the staking ledger mints into.
///
/// The ledger only ever requests mints. Balances stay readable to their holder
/// alone, so nothing here exposes them.
#[contractclient(name = "ConfidentialMintClient")]
pub trait ConfidentialMint {
    /// Mints `amount` raw reward units to `to`. Only the configured minter may call it.
    fn mint(env: Env, to: Address, amount: u128);
}
