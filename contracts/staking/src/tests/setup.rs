use secret_apr_coin::{Coin, CoinClient};
use soroban_sdk::{
    testutils::Ledger,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use crate::contract::{Staking, StakingClient};

/// One whole unit of the base token, which has 7 decimals like the native asset.
pub const ONE_UNIT: i128 = 10_000_000;
pub const ONE_DAY: u64 = 86_400;
pub const HALF_A_DAY: u64 = ONE_DAY / 2;
/// Ledger time the tests start from, so a zero timestamp never passes for a deposit.
pub const START: u64 = 1_700_000_000;

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn mint_base_tokens(env: &Env, token: &TokenClient, to: &Address, amount: i128) {
    StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

pub fn deploy_coin_contract<'a>(env: &Env, admin: &Address) -> CoinClient<'a> {
    let coin = CoinClient::new(env, &env.register(Coin, ()));
    coin.initialize(admin);
    coin
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: &Address,
    base_token: &Address,
    coin: &Address,
) -> StakingClient<'a> {
    let staking = StakingClient::new(env, &env.register(Staking, ()));
    staking.initialize(admin, base_token, coin);
    staking
}

/// Deploys the base token, the coin and the staking contract, and authorizes the
/// staking contract as the coin's minter.
pub fn deploy_wired<'a>(
    env: &Env,
    admin: &Address,
) -> (StakingClient<'a>, TokenClient<'a>, CoinClient<'a>) {
    let base_token = deploy_token_contract(env, admin);
    let coin = deploy_coin_contract(env, admin);
    let staking = deploy_staking_contract(env, admin, &base_token.address, &coin.address);
    coin.set_minter(&staking.address);

    (staking, base_token, coin)
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}
