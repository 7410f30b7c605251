use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use lrp_library::asset::AssetId;

#[cw_serde]
pub struct InstantiateMsg {
    /// The deposit pool; its delegate set gates share mutations.
    pub deposit_pool: String,
    /// The asset registry (role checks and strategy assignment).
    pub registry: String,
    /// The external restaking protocol's strategy manager, used to convert
    /// tracked shares to asset amounts.
    pub strategy_manager: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record `shares` of `asset` as mid-unstake.
    /// Only callable by a registered delegate worker or a manager.
    AddSharesUnstaking { asset: AssetId, shares: Uint128 },

    /// Release `shares` of `asset` from the mid-unstake counter.
    /// Only callable by a registered delegate worker or a manager.
    ReduceSharesUnstaking { asset: AssetId, shares: Uint128 },

    /// Point the vault at a (re)deployed deposit pool. Admin only.
    SetDepositPool { deposit_pool: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Shares of `asset` currently mid-unstake.
    #[returns(Uint128)]
    SharesUnstaking { asset: AssetId },

    /// Mid-unstake shares of `asset` converted to an asset amount via the
    /// protocol's share rate.
    #[returns(Uint128)]
    AssetsUnstaking { asset: AssetId },
}
