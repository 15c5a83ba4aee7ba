use secret_apr::coin::ConfidentialMintClient;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, BytesN, Env};

use crate::{
    error::ContractError,
    interest::pending_reward,
    msg::{ConfigResponse, StakeResponse},
    storage::{
        get_config, get_position, save_config, save_position,
        utils::{self, get_admin, get_total_staked_counter},
        Config, Position,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Secret APR fixed-rate staking with confidential interest"
);

#[contract]
pub struct Staking;

pub trait StakingTrait {
    // Sets the token that is staked and the coin the interest is minted in
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        coin: Address,
    ) -> Result<(), ContractError>;

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn unstake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    // Mints all settled interest to the sender and returns the minted amount
    fn claim_interest(env: Env, sender: Address) -> Result<u128, ContractError>;

    // Migration entrypoint
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError>;

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Result<Address, ContractError>;

    fn query_stake(env: Env, address: Address) -> StakeResponse;

    fn query_total_staked(env: Env) -> i128;

    fn query_pending_interest(env: Env, address: Address) -> u128;
}

#[contractimpl]
impl StakingTrait for Staking {
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        coin: Address,
    ) -> Result<(), ContractError> {
        if utils::is_initialized(&env) {
            log!(
                &env,
                "Stake: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }
        utils::set_initialized(&env);

        let decimals = token::Client::new(&env, &base_token).decimals();
        let principal_unit = 10i128.checked_pow(decimals).ok_or_else(|| {
            log!(
                &env,
                "Stake: Initialize: base token decimals {} are out of range",
                decimals
            );
            ContractError::ContractMathError
        })?;

        env.events()
            .publish(("initialize", "Secret APR staking contract"), &base_token);

        save_config(
            &env,
            Config {
                base_token,
                coin,
                principal_unit,
            },
        );
        utils::save_admin(&env, &admin);
        utils::init_total_staked(&env);

        Ok(())
    }

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount <= 0 {
            log!(&env, "Stake: Stake: amount must be positive, got {}", amount);
            return Err(ContractError::ZeroAmount);
        }

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender).unwrap_or_else(|| Position::open(now));
        settle(&env, &config, &mut position, now)?;

        transfer(
            &env,
            &config.base_token,
            &sender,
            &env.current_contract_address(),
            amount,
        )?;

        position.principal = position.principal.checked_add(amount).ok_or_else(|| {
            log!(&env, "Stake: Stake: principal overflow");
            ContractError::ContractMathError
        })?;
        save_position(&env, &sender, &position);
        utils::increase_total_staked(&env, amount)?;

        env.events().publish(("stake", "user"), &sender);
        env.events().publish(("stake", "amount"), amount);
        env.events().publish(("stake", "principal"), position.principal);
        env.events().publish(("stake", "timestamp"), now);

        Ok(())
    }

    fn unstake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount <= 0 {
            log!(&env, "Stake: Unstake: amount must be positive, got {}", amount);
            return Err(ContractError::ZeroAmount);
        }

        let mut position = get_position(&env, &sender)
            .filter(Position::is_active)
            .ok_or_else(|| {
                log!(&env, "Stake: Unstake: no active stake for the sender");
                ContractError::NoStake
            })?;
        if amount > position.principal {
            log!(
                &env,
                "Stake: Unstake: trying to unstake {} with only {} staked",
                amount,
                position.principal
            );
            return Err(ContractError::InsufficientStake);
        }

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        // the reward is only booked here, minting is left to claim_interest
        settle(&env, &config, &mut position, now)?;
        position.principal -= amount;

        transfer(
            &env,
            &config.base_token,
            &env.current_contract_address(),
            &sender,
            amount,
        )?;

        save_position(&env, &sender, &position);
        utils::decrease_total_staked(&env, amount)?;

        env.events().publish(("unstake", "user"), &sender);
        env.events().publish(("unstake", "amount"), amount);
        env.events().publish(("unstake", "principal"), position.principal);
        env.events().publish(("unstake", "timestamp"), now);

        Ok(())
    }

    fn claim_interest(env: Env, sender: Address) -> Result<u128, ContractError> {
        sender.require_auth();

        let mut position = get_position(&env, &sender)
            .filter(|position| position.is_active() || position.unminted > 0)
            .ok_or_else(|| {
                log!(&env, "Stake: Claim interest: nothing staked by the sender");
                ContractError::NoStake
            })?;

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        settle(&env, &config, &mut position, now)?;

        let minted = position.unminted;
        if minted > 0 {
            let coin = ConfidentialMintClient::new(&env, &config.coin);
            if !matches!(coin.try_mint(&sender, &minted), Ok(Ok(()))) {
                log!(&env, "Stake: Claim interest: minting {} failed", minted);
                return Err(ContractError::MintFailure);
            }
            position.unminted = 0;
        }
        save_position(&env, &sender, &position);

        env.events().publish(("claim", "user"), &sender);
        env.events().publish(("claim", "amount"), minted);
        env.events()
            .publish(("claim", "total_claimed"), position.total_claimed);
        env.events().publish(("claim", "timestamp"), now);

        Ok(minted)
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Result<Address, ContractError> {
        get_admin(&env)
    }

    fn query_stake(env: Env, address: Address) -> StakeResponse {
        let Some(position) = get_position(&env, &address) else {
            return StakeResponse::default();
        };

        StakeResponse {
            pending: outstanding_reward(&env, &position),
            principal: position.principal,
            deposited_at: position.deposited_at,
            last_claim_at: position.last_claim_at,
            total_claimed: position.total_claimed,
        }
    }

    fn query_total_staked(env: Env) -> i128 {
        get_total_staked_counter(&env)
    }

    fn query_pending_interest(env: Env, address: Address) -> u128 {
        get_position(&env, &address)
            .map(|position| outstanding_reward(&env, &position))
            .unwrap_or(0)
    }
}

/// Books the reward accrued since the last settlement and moves the watermark to
/// `now`. Runs before any change to `principal`, so every accrual window is priced
/// against a constant principal.
fn settle(
    env: &Env,
    config: &Config,
    position: &mut Position,
    now: u64,
) -> Result<u128, ContractError> {
    let reward = pending_reward(env, position, config.principal_unit, now);

    let (Some(total_claimed), Some(unminted)) = (
        position.total_claimed.checked_add(reward),
        position.unminted.checked_add(reward),
    ) else {
        log!(env, "Stake: Settle: reward counters overflow");
        return Err(ContractError::ContractMathError);
    };
    position.total_claimed = total_claimed;
    position.unminted = unminted;
    position.last_claim_at = now;

    Ok(reward)
}

// What a claim would mint right now: booked but unminted reward plus fresh accrual
fn outstanding_reward(env: &Env, position: &Position) -> u128 {
    let config = get_config(env);
    let fresh = pending_reward(
        env,
        position,
        config.principal_unit,
        env.ledger().timestamp(),
    );

    position.unminted.saturating_add(fresh)
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Stake: Transfer: moving {} base tokens failed", amount);
            Err(ContractError::TransferFailure)
        }
    }
}
