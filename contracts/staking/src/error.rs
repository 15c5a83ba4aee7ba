use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 500,
    ZeroAmount = 501,
    NoStake = 502,
    InsufficientStake = 503,
    TransferFailure = 504,
    MintFailure = 505,
    InvalidTime = 506,
    ContractMathError = 507,
    AdminNotSet = 508,
    ConfigNotSet = 509,
}
