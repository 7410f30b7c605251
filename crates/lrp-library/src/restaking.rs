use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, HexBinary, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};

/// Snipped interface of the external restaking protocol's strategy manager.
/// Only the messages and queries the delegate workers need are declared here;
/// the protocol itself is a black-box collaborator.
#[cw_serde]
pub enum ExecuteMsg {
    /// Credit `amount` of `token` (already transferred to the strategy) to the
    /// calling staker's position in `strategy`.
    DepositIntoStrategy {
        strategy: String,
        token: String,
        amount: Uint128,
    },
    /// Queue `shares` of the caller's position in `strategy` for withdrawal.
    QueueWithdrawal { strategy: String, shares: Uint128 },
    /// Complete a previously queued withdrawal, releasing the underlying
    /// assets to the caller.
    CompleteWithdrawal { strategy: String, shares: Uint128 },
}

#[cw_serde]
pub enum QueryMsg {
    StrategyShares { strategy: String, staker: String },
    SharesToUnderlying { strategy: String, shares: Uint128 },
    UnderlyingToShares { strategy: String, amount: Uint128 },
}

/// Snipped interface of the protocol's native staking deposit contract.
#[cw_serde]
pub enum NativeStakingExecuteMsg {
    /// Stake the attached native funds into a new validator position.
    Stake {
        pubkey: Binary,
        signature: Binary,
        deposit_root: HexBinary,
    },
}

#[cw_serde]
pub enum NativeStakingQueryMsg {
    /// Total native value the protocol reports for `staker`'s pod.
    PodBalance { staker: String },
    /// The live deposit root of the deposit contract.
    DepositRoot {},
}

pub fn deposit_into_strategy_msg(
    protocol: &Addr,
    strategy: &Addr,
    token: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: protocol.to_string(),
        msg: to_json_binary(&ExecuteMsg::DepositIntoStrategy {
            strategy: strategy.to_string(),
            token: token.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

pub fn queue_withdrawal_msg(
    protocol: &Addr,
    strategy: &Addr,
    shares: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: protocol.to_string(),
        msg: to_json_binary(&ExecuteMsg::QueueWithdrawal {
            strategy: strategy.to_string(),
            shares,
        })?,
        funds: vec![],
    }
    .into())
}

pub fn complete_withdrawal_msg(
    protocol: &Addr,
    strategy: &Addr,
    shares: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: protocol.to_string(),
        msg: to_json_binary(&ExecuteMsg::CompleteWithdrawal {
            strategy: strategy.to_string(),
            shares,
        })?,
        funds: vec![],
    }
    .into())
}

/// Build the native stake message carrying the staked funds.
pub fn stake_msg(
    native_staking: &Addr,
    denom: impl Into<String>,
    amount: Uint128,
    pubkey: Binary,
    signature: Binary,
    deposit_root: HexBinary,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: native_staking.to_string(),
        msg: to_json_binary(&NativeStakingExecuteMsg::Stake {
            pubkey,
            signature,
            deposit_root,
        })?,
        funds: vec![Coin {
            denom: denom.into(),
            amount,
        }],
    }
    .into())
}

pub fn strategy_shares(
    querier: &QuerierWrapper,
    protocol: &Addr,
    strategy: &Addr,
    staker: &Addr,
) -> StdResult<Uint128> {
    querier.query_wasm_smart(
        protocol.to_string(),
        &QueryMsg::StrategyShares {
            strategy: strategy.to_string(),
            staker: staker.to_string(),
        },
    )
}

pub fn shares_to_underlying(
    querier: &QuerierWrapper,
    protocol: &Addr,
    strategy: &Addr,
    shares: Uint128,
) -> StdResult<Uint128> {
    querier.query_wasm_smart(
        protocol.to_string(),
        &QueryMsg::SharesToUnderlying {
            strategy: strategy.to_string(),
            shares,
        },
    )
}

pub fn pod_balance(
    querier: &QuerierWrapper,
    native_staking: &Addr,
    staker: &Addr,
) -> StdResult<Uint128> {
    querier.query_wasm_smart(
        native_staking.to_string(),
        &NativeStakingQueryMsg::PodBalance {
            staker: staker.to_string(),
        },
    )
}

pub fn deposit_root(querier: &QuerierWrapper, native_staking: &Addr) -> StdResult<HexBinary> {
    querier.query_wasm_smart(
        native_staking.to_string(),
        &NativeStakingQueryMsg::DepositRoot {},
    )
}
