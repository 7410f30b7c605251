use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Registry(#[from] lrp_library::registry::RegistryError),

    #[error("Zero: {msg}")]
    Zero { msg: String },

    #[error("Insufficient shares unstaking: tracked {tracked}, requested {requested}")]
    InsufficientShares {
        tracked: cosmwasm_std::Uint128,
        requested: cosmwasm_std::Uint128,
    },
}
