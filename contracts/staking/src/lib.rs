#![no_std]
mod contract;
mod error;
mod interest;
mod msg;
mod storage;

pub use contract::{Staking, StakingClient};
pub use error::ContractError;

#[cfg(test)]
mod tests;
