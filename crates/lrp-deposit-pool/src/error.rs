use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Registry(#[from] lrp_library::registry::RegistryError),

    #[error("Unauthorized: {msg}")]
    Unauthorized { msg: String },

    #[error("Deposit {amount} is below the minimum deposit {min_deposit}")]
    LessThanMinDeposit {
        amount: Uint128,
        min_deposit: Uint128,
    },

    #[error("Asset {asset} is not supported")]
    UnsupportedAsset { asset: String },

    #[error("Deposit would push total backing of {asset} over its limit {limit}")]
    DepositLimitExceeded { asset: String, limit: Uint128 },

    #[error("Attached funds do not match the declared deposit amount")]
    FundsMismatch {},

    #[error("Output {out} is below the requested minimum {min_out}")]
    SlippageExceeded { out: Uint128, min_out: Uint128 },

    #[error("Deposit is too small to mint any receipt tokens")]
    ZeroMint {},

    #[error("Delegate queue is bounded at {max} members")]
    MaxDelegatesExceeded { max: u32 },

    #[error("Delegate {delegate} is not a queue member")]
    DelegateNotFound { delegate: String },

    #[error("Delegate {delegate} still holds native value")]
    DelegateHasNativeBalance { delegate: String },

    #[error("Delegate {delegate} still holds {balance} of {asset}")]
    DelegateHasAssetBalance {
        delegate: String,
        asset: String,
        balance: Uint128,
    },

    #[error("Delegate index {index} is out of range for queue length {len}")]
    DelegateIndexOutOfRange { index: u32, len: u32 },

    #[error("Pool holds {available} of {asset}, {requested} requested")]
    InsufficientAssetBalance {
        asset: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Withdrawal request {request_id} not found for this owner")]
    WithdrawalRequestNotFound { request_id: u64 },

    #[error("Withdrawal is claimable from block {claimable_at}")]
    WithdrawalDelayNotElapsed { claimable_at: u64 },

    #[error("Max delegates {count} cannot be set below the current queue length {len}")]
    BoundBelowQueueLength { count: u32, len: u32 },

    #[error("Zero: {msg}")]
    Zero { msg: String },
}
