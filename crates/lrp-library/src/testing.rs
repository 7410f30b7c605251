#![cfg(not(target_arch = "wasm32"))]
// Only exposed on unit and integration testing, not compiled to Wasm.

mod contract;
pub mod oracle;
pub mod registry;
pub mod restaking;
pub mod token;

pub use contract::*;
pub use oracle::OracleContract;
pub use registry::RegistryContract;
pub use restaking::{NativeStakingContract, StrategyManagerContract};
pub use token::Cw20TokenContract;
