use secret_apr::coin::REWARD_DECIMALS;
use soroban_sdk::{log, panic_with_error, Env, U256};

use crate::{error::ContractError, storage::Position};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
/// Whole COIN paid per whole staked unit per day.
pub const DAILY_REWARD_PER_UNIT: u128 = 1_000;
pub const REWARD_SCALE: u128 = 10u128.pow(REWARD_DECIMALS);

/// Reward accrued by `position` since its last settlement, in raw COIN units.
///
/// `floor(principal * 1000 * 10^6 * elapsed / (86400 * principal_unit))`. The numerator
/// is built in 256 bits and divided once, so the final truncation is the only loss.
/// A closed position accrues nothing no matter how much time passed.
///
/// Panics with `InvalidTime` if `now` is before the watermark, which a monotonic
/// ledger clock never produces.
pub fn pending_reward(env: &Env, position: &Position, principal_unit: i128, now: u64) -> u128 {
    if !position.is_active() {
        return 0;
    }
    if now < position.last_claim_at {
        log!(
            env,
            "Stake: Pending reward: ledger time {} is before the last settlement {}",
            now,
            position.last_claim_at
        );
        panic_with_error!(env, ContractError::InvalidTime);
    }

    let elapsed = now - position.last_claim_at;
    if elapsed == 0 {
        return 0;
    }

    let numerator = U256::from_u128(env, position.principal as u128)
        .mul(&U256::from_u128(env, DAILY_REWARD_PER_UNIT * REWARD_SCALE))
        .mul(&U256::from_u128(env, elapsed as u128));
    let denominator = U256::from_u128(env, SECONDS_PER_DAY as u128 * principal_unit as u128);

    // unreachable for real supplies; the coin rejects anything past 64 bits anyway
    numerator.div(&denominator).to_u128().unwrap_or(u128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    // base token with 7 decimals, like the native asset
    const UNIT: i128 = 10_000_000;

    fn position(principal: i128, last_claim_at: u64) -> Position {
        Position {
            principal,
            deposited_at: last_claim_at,
            last_claim_at,
            ..Default::default()
        }
    }

    #[test_case(UNIT, SECONDS_PER_DAY, 1_000_000_000 ; "one unit for one day")]
    #[test_case(UNIT, SECONDS_PER_DAY / 2, 500_000_000 ; "one unit for half a day")]
    #[test_case(2 * UNIT, SECONDS_PER_DAY, 2_000_000_000 ; "two units for one day")]
    #[test_case(UNIT / 2, SECONDS_PER_DAY, 500_000_000 ; "half a unit for one day")]
    #[test_case(UNIT, 1, 11_574 ; "one unit for one second truncates")]
    #[test_case(1, 1, 0 ; "dust for one second rounds to zero")]
    #[test_case(UNIT, 365 * SECONDS_PER_DAY, 365_000_000_000 ; "one unit for a year")]
    fn accrues_linearly(principal: i128, elapsed: u64, expected: u128) {
        let env = Env::default();
        let start = 1_000u64;

        assert_eq!(
            pending_reward(&env, &position(principal, start), UNIT, start + elapsed),
            expected
        );
    }

    #[test]
    fn closed_position_accrues_nothing() {
        let env = Env::default();

        assert_eq!(
            pending_reward(&env, &position(0, 0), UNIT, 10 * SECONDS_PER_DAY),
            0
        );
    }

    #[test]
    fn no_time_elapsed_accrues_nothing() {
        let env = Env::default();

        assert_eq!(pending_reward(&env, &position(UNIT, 500), UNIT, 500), 0);
    }

    #[test]
    fn wide_numerator_does_not_overflow() {
        let env = Env::default();
        // 10^23 units: principal * rate * elapsed is past 2^128 before the division
        let principal = 1_000_000_000_000_000_000_000_000_000_000i128;

        assert_eq!(
            pending_reward(&env, &position(principal, 0), UNIT, SECONDS_PER_DAY),
            100_000_000_000_000_000_000_000_000_000_000u128
        );
    }

    #[test]
    fn honours_the_base_token_precision() {
        let env = Env::default();
        let wei_per_unit = 1_000_000_000_000_000_000i128;

        assert_eq!(
            pending_reward(
                &env,
                &position(wei_per_unit, 0),
                wei_per_unit,
                SECONDS_PER_DAY
            ),
            1_000_000_000
        );
    }

    #[test]
    #[should_panic]
    fn clock_running_backwards_is_fatal() {
        let env = Env::default();

        pending_reward(&env, &position(UNIT, 1_000), UNIT, 999);
    }
}
