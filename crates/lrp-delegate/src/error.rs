use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Registry(#[from] lrp_library::registry::RegistryError),

    #[error("No strategy assigned for asset {asset}")]
    NoStrategyAssigned { asset: String },

    #[error("Zero balance of asset {asset}")]
    ZeroBalance { asset: String },

    #[error("Native balance {balance} is below the stake unit {stake_unit}")]
    InsufficientStakeBalance {
        balance: Uint128,
        stake_unit: Uint128,
    },

    #[error("Deposit root changed since the transaction was prepared")]
    DepositRootChanged {},

    #[error("The native asset is handled by the native staking leg, not a strategy")]
    NativeStrategyNotAllowed {},

    #[error("Strategy {strategy} is not assigned to asset {asset}")]
    StrategyMismatch { strategy: String, asset: String },

    #[error("Zero: {msg}")]
    Zero { msg: String },
}
