use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use lrp_library::asset::AssetId;

#[cw_serde]
pub struct InstantiateMsg {
    /// The asset registry (roles, supported assets, limits, strategies).
    pub registry: String,
    /// The price oracle.
    pub oracle: String,
    /// The receipt token (cw20) this pool mints against deposits.
    pub receipt_token: String,
    /// The unstaking vault.
    pub unstaking_vault: String,
    /// The converter, if already deployed. Settable later via `SetConverter`.
    pub converter: Option<String>,
    /// The chain's native staking denom.
    pub denom: String,
    /// Minimum deposit amount.
    pub min_deposit: Uint128,
    /// Upper bound on the delegate queue length.
    pub max_delegates: u32,
    /// Blocks a withdrawal request must age before it can be claimed.
    pub withdrawal_delay_blocks: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit `amount` of `asset` and receive freshly minted receipt tokens
    /// at the oracle rate. Native deposits attach the funds; cw20 deposits
    /// require a prior allowance for this contract.
    Deposit {
        asset: AssetId,
        amount: Uint128,
        /// Minimum receipt tokens the depositor will accept.
        min_receipt_out: Uint128,
        referral: Option<String>,
    },

    /// Append new delegate workers to the queue. Admin only.
    AddDelegates { delegates: Vec<String> },

    /// Remove a delegate from the queue. Fails while the delegate still
    /// holds or stakes any supported asset. Admin only.
    RemoveDelegate { delegate: String },

    /// Remove several delegates; any single failure aborts the whole batch.
    /// Admin only.
    RemoveDelegates { delegates: Vec<String> },

    /// Send `amount` of `asset` to the delegate at `delegate_index` in the
    /// queue. Manager only.
    TransferToDelegate {
        delegate_index: u32,
        asset: AssetId,
        amount: Uint128,
    },

    /// Send `amount` of `asset` to the converter. Only the converter itself
    /// may call this.
    TransferToConverter { asset: AssetId, amount: Uint128 },

    /// Trade attached native funds for `asset` out of the pool's holdings at
    /// the oracle rate. Manager only.
    SwapNativeForAsset { asset: AssetId, min_out: Uint128 },

    /// Burn `receipt_amount` of the caller's receipt tokens and record a
    /// withdrawal claimable after the configured delay.
    RequestWithdrawal {
        asset: AssetId,
        receipt_amount: Uint128,
    },

    /// Claim a matured withdrawal request owned by the caller.
    ClaimWithdrawal { request_id: u64 },

    /// Admin configuration.
    SetMinDeposit { amount: Uint128 },
    SetMaxDelegates { count: u32 },
    SetWithdrawalDelay { blocks: u64 },
    SetConverter { converter: String },
}

#[cw_serde]
pub struct WithdrawalRequest {
    pub asset: AssetId,
    pub receipt_amount: Uint128,
    /// Asset amount promised at request time, at the then-current rates.
    pub expected_amount: Uint128,
    /// Block height the request was recorded at.
    pub block: u64,
}

#[cw_serde]
pub struct WithdrawalRequestResponse {
    pub id: u64,
    pub request: WithdrawalRequest,
}

/// Where every unit of `asset` under management currently sits.
#[cw_serde]
pub struct DistributionResponse {
    /// The pool's own direct balance.
    pub pool: Uint128,
    /// Sum of the delegates' direct balances.
    pub delegate_pending: Uint128,
    /// Sum of the delegates' staked positions.
    pub delegate_staked: Uint128,
    /// Mid-unstake value tracked by the unstaking vault.
    pub unstaking: Uint128,
    /// The converter's direct balance.
    pub converter: Uint128,
    /// The unstaking vault's direct balance, awaiting distribution.
    pub vault_pending: Uint128,
    /// Sum of all of the above.
    pub total: Uint128,
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub oracle: Addr,
    pub receipt_token: Addr,
    pub unstaking_vault: Addr,
    pub converter: Option<Addr>,
    pub denom: String,
    pub min_deposit: Uint128,
    pub max_delegates: u32,
    pub withdrawal_delay_blocks: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Snapshot of where `asset` currently sits across the system.
    #[returns(DistributionResponse)]
    AssetDistribution { asset: AssetId },

    /// Total of `asset` under management (the distribution's sum).
    #[returns(Uint128)]
    TotalDeposits { asset: AssetId },

    /// The delegate queue, in insertion order.
    #[returns(Vec<Addr>)]
    Delegates {},

    /// Whether `delegate` is a current queue member.
    #[returns(bool)]
    IsDelegate { delegate: String },

    #[returns(ConfigResponse)]
    Config {},

    /// Open withdrawal requests owned by `owner`.
    #[returns(Vec<WithdrawalRequestResponse>)]
    WithdrawalRequests { owner: String },
}
