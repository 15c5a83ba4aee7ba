use secret_apr::coin::REWARD_DECIMALS;
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    error::ContractError,
    storage::{
        get_admin, get_minter, is_initialized, read_balance, save_admin, save_minter,
        set_initialized, write_balance,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Secret APR confidential reward coin"
);

const NAME: &str = "Confidential Coin";
const SYMBOL: &str = "COIN";

#[contract]
pub struct Coin;

pub trait CoinTrait {
    fn initialize(env: Env, admin: Address) -> Result<(), ContractError>;

    // One-time wiring of the only address allowed to mint
    fn set_minter(env: Env, minter: Address) -> Result<(), ContractError>;

    fn mint(env: Env, to: Address, amount: u128) -> Result<(), ContractError>;

    // Migration entrypoint
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError>;

    // QUERIES

    // Readable only with the owner's authorization
    fn confidential_balance_of(env: Env, owner: Address) -> u64;

    fn query_admin(env: Env) -> Result<Address, ContractError>;

    fn query_minter(env: Env) -> Option<Address>;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn decimals(env: Env) -> u32;
}

#[contractimpl]
impl CoinTrait for Coin {
    fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Coin: Initialize: initializing contract twice is not allowed");
            return Err(ContractError::AlreadyInitialized);
        }
        set_initialized(&env);

        save_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: REWARD_DECIMALS,
            name: String::from_str(&env, NAME),
            symbol: String::from_str(&env, SYMBOL),
        });

        env.events().publish(("initialize", "Confidential coin"), &admin);

        Ok(())
    }

    fn set_minter(env: Env, minter: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        if get_minter(&env).is_some() {
            log!(&env, "Coin: Set minter: minter can only be set once");
            return Err(ContractError::MinterAlreadySet);
        }
        save_minter(&env, &minter);

        env.events().publish(("set_minter", "minter"), &minter);

        Ok(())
    }

    fn mint(env: Env, to: Address, amount: u128) -> Result<(), ContractError> {
        let minter = get_minter(&env).ok_or_else(|| {
            log!(&env, "Coin: Mint: minter not set");
            ContractError::MinterNotSet
        })?;
        minter.require_auth();

        if amount == 0 {
            log!(&env, "Coin: Mint: amount must be greater than zero");
            return Err(ContractError::InvalidAmount);
        }

        let balance = u64::try_from(amount)
            .ok()
            .and_then(|amount| read_balance(&env, &to).checked_add(amount))
            .ok_or_else(|| {
                log!(&env, "Coin: Mint: balance would exceed the 64-bit limit");
                ContractError::BalanceOverflow
            })?;
        write_balance(&env, &to, balance);

        // the amount stays out of the event
        env.events().publish(("mint", "user"), &to);

        Ok(())
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    fn confidential_balance_of(env: Env, owner: Address) -> u64 {
        owner.require_auth();
        read_balance(&env, &owner)
    }

    fn query_admin(env: Env) -> Result<Address, ContractError> {
        get_admin(&env)
    }

    fn query_minter(env: Env) -> Option<Address> {
        get_minter(&env)
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }
}
