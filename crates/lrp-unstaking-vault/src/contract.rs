#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};

const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let deposit_pool = deps.api.addr_validate(&msg.deposit_pool)?;
    state::DEPOSIT_POOL.save(deps.storage, &deposit_pool)?;

    let registry = deps.api.addr_validate(&msg.registry)?;
    lrp_library::registry::set_registry(deps.storage, &registry)?;

    let strategy_manager = deps.api.addr_validate(&msg.strategy_manager)?;
    state::STRATEGY_MANAGER.save(deps.storage, &strategy_manager)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deposit_pool", deposit_pool)
        .add_attribute("registry", registry)
        .add_attribute("strategy_manager", strategy_manager))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddSharesUnstaking { asset, shares } => {
            asset.validate(deps.api)?;
            execute::add_shares_unstaking(deps, env, info, asset, shares)
        }
        ExecuteMsg::ReduceSharesUnstaking { asset, shares } => {
            asset.validate(deps.api)?;
            execute::reduce_shares_unstaking(deps, env, info, asset, shares)
        }
        ExecuteMsg::SetDepositPool { deposit_pool } => {
            execute::set_deposit_pool(deps, env, info, deposit_pool)
        }
    }
}

/// Snipped query interface of the deposit pool, used to recognize delegate
/// workers without a circular crate dependency.
pub mod pool {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{Addr, Deps, StdResult};

    #[cw_serde]
    pub enum PoolQueryMsg {
        IsDelegate { delegate: String },
    }

    pub fn is_delegate(deps: Deps, pool: &Addr, addr: &Addr) -> StdResult<bool> {
        deps.querier.query_wasm_smart(
            pool.to_string(),
            &PoolQueryMsg::IsDelegate {
                delegate: addr.to_string(),
            },
        )
    }
}

mod execute {
    use super::*;
    use cosmwasm_std::{Event, Uint128};
    use lrp_library::asset::AssetId;
    use lrp_library::registry;

    /// The counters may only be mutated by a registered delegate worker or
    /// by a manager (the withdrawal-manager path).
    fn assert_delegate_or_manager(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
        let deposit_pool = state::get_deposit_pool(deps.storage)?;
        if pool::is_delegate(deps, &deposit_pool, &info.sender)? {
            return Ok(());
        }
        registry::assert_manager(deps, info)?;
        Ok(())
    }

    pub fn add_shares_unstaking(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        shares: Uint128,
    ) -> Result<Response, ContractError> {
        assert_delegate_or_manager(deps.as_ref(), &info)?;

        if shares.is_zero() {
            return Err(ContractError::Zero {
                msg: "Shares cannot be zero.".to_string(),
            });
        }

        let total = state::add_shares(deps.storage, &asset, shares)?;

        Ok(Response::new().add_event(
            Event::new("AddSharesUnstaking")
                .add_attribute("sender", info.sender)
                .add_attribute("asset", asset.id())
                .add_attribute("shares", shares.to_string())
                .add_attribute("total_shares_unstaking", total.to_string()),
        ))
    }

    pub fn reduce_shares_unstaking(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        shares: Uint128,
    ) -> Result<Response, ContractError> {
        assert_delegate_or_manager(deps.as_ref(), &info)?;

        if shares.is_zero() {
            return Err(ContractError::Zero {
                msg: "Shares cannot be zero.".to_string(),
            });
        }

        let tracked = state::get_shares(deps.storage, &asset)?;
        if shares > tracked {
            return Err(ContractError::InsufficientShares {
                tracked,
                requested: shares,
            });
        }

        let total = state::sub_shares(deps.storage, &asset, shares)?;

        Ok(Response::new().add_event(
            Event::new("ReduceSharesUnstaking")
                .add_attribute("sender", info.sender)
                .add_attribute("asset", asset.id())
                .add_attribute("shares", shares.to_string())
                .add_attribute("total_shares_unstaking", total.to_string()),
        ))
    }

    pub fn set_deposit_pool(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        deposit_pool: String,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let deposit_pool = deps.api.addr_validate(&deposit_pool)?;
        state::DEPOSIT_POOL.save(deps.storage, &deposit_pool)?;

        Ok(Response::new()
            .add_event(Event::new("SetDepositPool").add_attribute("deposit_pool", deposit_pool)))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SharesUnstaking { asset } => {
            to_json_binary(&query::shares_unstaking(deps, asset)?)
        }
        QueryMsg::AssetsUnstaking { asset } => {
            to_json_binary(&query::assets_unstaking(deps, asset)?)
        }
    }
}

mod query {
    use super::*;
    use cosmwasm_std::{StdError, Uint128};
    use lrp_library::asset::AssetId;
    use lrp_library::{registry, restaking};

    pub fn shares_unstaking(deps: Deps, asset: AssetId) -> StdResult<Uint128> {
        state::get_shares(deps.storage, &asset)
    }

    /// Convert the tracked shares to an asset amount at the protocol's
    /// current share rate. Zero shares short-circuits so an unassigned
    /// strategy never poisons aggregation for untouched assets.
    pub fn assets_unstaking(deps: Deps, asset: AssetId) -> StdResult<Uint128> {
        let shares = state::get_shares(deps.storage, &asset)?;
        if shares.is_zero() {
            return Ok(Uint128::zero());
        }

        let strategy = registry::asset_strategy(deps, &asset)?
            .ok_or(StdError::not_found("asset strategy"))?;
        let strategy_manager = state::get_strategy_manager(deps.storage)?;
        restaking::shares_to_underlying(&deps.querier, &strategy_manager, &strategy, shares)
    }
}
