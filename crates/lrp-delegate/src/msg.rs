use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, HexBinary, Uint128};
use lrp_library::asset::AssetId;

#[cw_serde]
pub struct InstantiateMsg {
    /// The deposit pool this worker serves.
    pub deposit_pool: String,
    /// The asset registry (role checks and strategy assignment).
    pub registry: String,
    /// The unstaking vault recording mid-unstake shares.
    pub unstaking_vault: String,
    /// The external restaking protocol's strategy manager.
    pub strategy_manager: String,
    /// The external protocol's native staking deposit contract.
    pub native_staking: String,
    /// The chain's native staking denom.
    pub denom: String,
    /// Fixed native amount staked per `StakeNative` call.
    pub stake_unit: Uint128,
}

#[cw_serde]
pub struct WithdrawalRequest {
    pub asset: AssetId,
    pub strategy: String,
    pub shares: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move the worker's full current balance of `asset` into the asset's
    /// assigned strategy. Operator only.
    DepositIntoStrategy { asset: AssetId },

    /// Stake one stake-unit of native funds with the external protocol.
    /// If `expected_deposit_root` is set it must match the deposit contract's
    /// live root. Operator only.
    StakeNative {
        pubkey: Binary,
        signature: Binary,
        deposit_root: HexBinary,
        expected_deposit_root: Option<HexBinary>,
    },

    /// Return `amount` of `asset` to the deposit pool. Manager only.
    TransferBack { asset: AssetId, amount: Uint128 },

    /// Queue strategy withdrawals with the external protocol and record the
    /// shares in the unstaking vault. Manager only.
    QueueWithdrawals { requests: Vec<WithdrawalRequest> },

    /// Complete a queued withdrawal: release the underlying from the
    /// protocol, reduce the vault's tracked shares, and forward the assets
    /// to the vault. Manager only.
    CompleteWithdrawal { asset: AssetId, shares: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The worker's direct balance of `asset`.
    #[returns(Uint128)]
    AssetBalance { asset: AssetId },

    /// The worker's strategy position in `asset`, in underlying units.
    #[returns(Uint128)]
    StakedBalance { asset: AssetId },

    /// Pod balance plus the staked-but-unverified counter.
    #[returns(Uint128)]
    NativeStakedBalance {},
}
