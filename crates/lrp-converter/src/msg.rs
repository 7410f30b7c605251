use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use lrp_library::asset::AssetId;

#[cw_serde]
pub struct InstantiateMsg {
    /// The deposit pool assets are pulled from and native funds returned to.
    pub deposit_pool: String,
    /// The asset registry (role checks).
    pub registry: String,
    /// The price oracle.
    pub oracle: String,
    /// The chain's native staking denom.
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pull `amount` of `asset` out of the deposit pool for conversion and
    /// record its native value as in-withdrawal. Operator only.
    TransferAssetFromDepositPool { asset: AssetId, amount: Uint128 },

    /// Trade attached native funds for `asset` out of the converter's
    /// holdings at the oracle rate. Operator only.
    SwapNativeToAsset { asset: AssetId, min_out: Uint128 },

    /// Hand `amount` of `asset` to its adapter and start unstaking.
    /// Operator only.
    Unstake { asset: AssetId, amount: Uint128 },

    /// Ask `asset`'s adapter to release matured native proceeds. Operator
    /// only.
    Claim { asset: AssetId },

    /// Forward the converter's entire native balance back to the deposit
    /// pool. Operator only.
    SendNativeToDepositPool {},

    /// Configure the unstake/claim adapter for `asset`. Admin only.
    SetAdapter { asset: AssetId, adapter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Native value of assets currently mid-conversion.
    #[returns(Uint128)]
    NativeValueInWithdrawal {},

    /// Cumulative native funds ever swapped into `asset`.
    #[returns(Uint128)]
    ConversionLimit { asset: AssetId },

    /// The adapter configured for `asset`, if any.
    #[returns(Option<Addr>)]
    Adapter { asset: AssetId },
}
