pub mod contract;
pub mod error;
pub mod msg;
pub mod testing;

mod state;

pub use crate::error::ContractError;
