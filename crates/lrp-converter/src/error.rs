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

    #[error("Asset {asset} is not supported")]
    UnsupportedAsset { asset: String },

    #[error("No adapter configured for asset {asset}")]
    NoAdapterConfigured { asset: String },

    #[error("Output {out} is below the requested minimum {min_out}")]
    SlippageExceeded { out: Uint128, min_out: Uint128 },

    #[error("Converter holds {available} of {asset}, {requested} requested")]
    InsufficientAssetBalance {
        asset: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Zero balance of asset {asset}")]
    ZeroBalance { asset: String },

    #[error("Zero: {msg}")]
    Zero { msg: String },
}
