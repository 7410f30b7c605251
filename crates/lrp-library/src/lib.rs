pub mod testing;

/// Asset identity shared by all contracts.
/// An asset is either the chain's native staking denom or a cw20 token
/// (a liquid-staking token registered in the asset registry).
pub mod asset;

/// Consumed interface of the asset registry, which also answers role checks.
pub mod registry;

/// Consumed interface of the price oracle.
pub mod oracle;

/// Consumed interface of the external restaking protocol.
pub mod restaking;

/// Message builders for the cw20 receipt token.
pub mod receipt;
