#![no_std]
mod contract;
mod error;
mod storage;

pub use contract::{Coin, CoinClient};
pub use error::ContractError;
