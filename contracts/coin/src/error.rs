use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    AdminNotSet = 2,
    MinterAlreadySet = 3,
    MinterNotSet = 4,
    InvalidAmount = 5,
    BalanceOverflow = 6,
}
