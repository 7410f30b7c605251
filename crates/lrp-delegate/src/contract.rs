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

    let unstaking_vault = deps.api.addr_validate(&msg.unstaking_vault)?;
    state::UNSTAKING_VAULT.save(deps.storage, &unstaking_vault)?;

    let strategy_manager = deps.api.addr_validate(&msg.strategy_manager)?;
    state::STRATEGY_MANAGER.save(deps.storage, &strategy_manager)?;

    let native_staking = deps.api.addr_validate(&msg.native_staking)?;
    state::NATIVE_STAKING.save(deps.storage, &native_staking)?;

    lrp_library::asset::set_denom(deps.storage, msg.denom)?;
    state::STAKE_UNIT.save(deps.storage, &msg.stake_unit)?;
    state::STAKED_UNVERIFIED.save(deps.storage, &cosmwasm_std::Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deposit_pool", deposit_pool)
        .add_attribute("strategy_manager", strategy_manager)
        .add_attribute("stake_unit", msg.stake_unit.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositIntoStrategy { asset } => {
            asset.validate(deps.api)?;
            execute::deposit_into_strategy(deps, env, info, asset)
        }
        ExecuteMsg::StakeNative {
            pubkey,
            signature,
            deposit_root,
            expected_deposit_root,
        } => execute::stake_native(
            deps,
            env,
            info,
            pubkey,
            signature,
            deposit_root,
            expected_deposit_root,
        ),
        ExecuteMsg::TransferBack { asset, amount } => {
            asset.validate(deps.api)?;
            execute::transfer_back(deps, env, info, asset, amount)
        }
        ExecuteMsg::QueueWithdrawals { requests } => {
            execute::queue_withdrawals(deps, env, info, requests)
        }
        ExecuteMsg::CompleteWithdrawal { asset, shares } => {
            asset.validate(deps.api)?;
            execute::complete_withdrawal(deps, env, info, asset, shares)
        }
    }
}

mod execute {
    use super::*;
    use crate::msg::WithdrawalRequest;
    use cosmwasm_std::{Binary, CosmosMsg, Event, HexBinary, Uint128, WasmMsg};
    use lrp_library::asset::{self, AssetId};
    use lrp_library::{registry, restaking};

    pub fn deposit_into_strategy(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        asset: AssetId,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        let token = match &asset {
            AssetId::Native => return Err(ContractError::NativeStrategyNotAllowed {}),
            AssetId::Cw20(token) => token.clone(),
        };

        let strategy = registry::asset_strategy(deps.as_ref(), &asset)?.ok_or(
            ContractError::NoStrategyAssigned { asset: asset.id() },
        )?;

        let balance =
            asset::balance_of(&deps.querier, deps.storage, &asset, &env.contract.address)?;
        if balance.is_zero() {
            return Err(ContractError::ZeroBalance { asset: asset.id() });
        }

        let strategy_manager = state::get_strategy_manager(deps.storage)?;
        let transfer = asset::transfer_msg(deps.storage, &asset, &strategy, balance)?;
        let deposit =
            restaking::deposit_into_strategy_msg(&strategy_manager, &strategy, &token, balance)?;

        Ok(Response::new()
            .add_message(transfer)
            .add_message(deposit)
            .add_event(
                Event::new("DepositIntoStrategy")
                    .add_attribute("asset", asset.id())
                    .add_attribute("strategy", strategy)
                    .add_attribute("amount", balance.to_string()),
            ))
    }

    pub fn stake_native(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        pubkey: Binary,
        signature: Binary,
        deposit_root: HexBinary,
        expected_deposit_root: Option<HexBinary>,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        let native_staking = state::get_native_staking(deps.storage)?;

        // The deposit contract's root moves whenever anyone deposits; a
        // caller that prepared its signature against a snapshot can demand
        // the snapshot still holds.
        if let Some(expected) = expected_deposit_root {
            let live = restaking::deposit_root(&deps.querier, &native_staking)?;
            if live != expected {
                return Err(ContractError::DepositRootChanged {});
            }
        }

        let stake_unit = state::STAKE_UNIT.load(deps.storage)?;
        let denom = asset::get_denom(deps.storage)?;
        let balance = deps
            .querier
            .query_balance(&env.contract.address, &denom)?
            .amount;
        if balance < stake_unit {
            return Err(ContractError::InsufficientStakeBalance {
                balance,
                stake_unit,
            });
        }

        let total_unverified = state::add_staked_unverified(deps.storage, stake_unit)?;

        let stake = restaking::stake_msg(
            &native_staking,
            denom,
            stake_unit,
            pubkey,
            signature,
            deposit_root,
        )?;

        Ok(Response::new().add_message(stake).add_event(
            Event::new("StakeNative")
                .add_attribute("amount", stake_unit.to_string())
                .add_attribute("staked_unverified", total_unverified.to_string()),
        ))
    }

    pub fn transfer_back(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_manager(deps.as_ref(), &info)?;

        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }

        let deposit_pool = state::get_deposit_pool(deps.storage)?;
        let transfer = asset::transfer_msg(deps.storage, &asset, &deposit_pool, amount)?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("TransferBack")
                .add_attribute("asset", asset.id())
                .add_attribute("recipient", deposit_pool)
                .add_attribute("amount", amount.to_string()),
        ))
    }

    pub fn queue_withdrawals(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        requests: Vec<WithdrawalRequest>,
    ) -> Result<Response, ContractError> {
        registry::assert_manager(deps.as_ref(), &info)?;

        let strategy_manager = state::get_strategy_manager(deps.storage)?;
        let native_staking = state::get_native_staking(deps.storage)?;
        let unstaking_vault = state::get_unstaking_vault(deps.storage)?;

        let mut response = Response::new();
        for request in requests {
            request.asset.validate(deps.api)?;
            if request.shares.is_zero() {
                return Err(ContractError::Zero {
                    msg: "Shares cannot be zero.".to_string(),
                });
            }

            let strategy = deps.api.addr_validate(&request.strategy)?;
            if strategy == native_staking {
                return Err(ContractError::NativeStrategyNotAllowed {});
            }

            let assigned = registry::asset_strategy(deps.as_ref(), &request.asset)?.ok_or(
                ContractError::NoStrategyAssigned {
                    asset: request.asset.id(),
                },
            )?;
            if strategy != assigned {
                return Err(ContractError::StrategyMismatch {
                    strategy: strategy.to_string(),
                    asset: request.asset.id(),
                });
            }

            let record: CosmosMsg = WasmMsg::Execute {
                contract_addr: unstaking_vault.to_string(),
                msg: to_json_binary(&lrp_unstaking_vault::msg::ExecuteMsg::AddSharesUnstaking {
                    asset: request.asset.clone(),
                    shares: request.shares,
                })?,
                funds: vec![],
            }
            .into();
            let queue =
                restaking::queue_withdrawal_msg(&strategy_manager, &strategy, request.shares)?;

            response = response.add_message(record).add_message(queue).add_event(
                Event::new("QueueWithdrawal")
                    .add_attribute("asset", request.asset.id())
                    .add_attribute("strategy", strategy)
                    .add_attribute("shares", request.shares.to_string()),
            );
        }

        Ok(response)
    }

    pub fn complete_withdrawal(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        shares: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_manager(deps.as_ref(), &info)?;

        if shares.is_zero() {
            return Err(ContractError::Zero {
                msg: "Shares cannot be zero.".to_string(),
            });
        }

        let strategy = registry::asset_strategy(deps.as_ref(), &asset)?.ok_or(
            ContractError::NoStrategyAssigned { asset: asset.id() },
        )?;
        let strategy_manager = state::get_strategy_manager(deps.storage)?;
        let unstaking_vault = state::get_unstaking_vault(deps.storage)?;

        let amount =
            restaking::shares_to_underlying(&deps.querier, &strategy_manager, &strategy, shares)?;

        // Message order matters: the protocol releases the underlying to this
        // worker before the forward to the vault executes.
        let complete = restaking::complete_withdrawal_msg(&strategy_manager, &strategy, shares)?;
        let reduce: CosmosMsg = WasmMsg::Execute {
            contract_addr: unstaking_vault.to_string(),
            msg: to_json_binary(
                &lrp_unstaking_vault::msg::ExecuteMsg::ReduceSharesUnstaking {
                    asset: asset.clone(),
                    shares,
                },
            )?,
            funds: vec![],
        }
        .into();
        let forward = asset::transfer_msg(deps.storage, &asset, &unstaking_vault, amount)?;

        Ok(Response::new()
            .add_message(complete)
            .add_message(reduce)
            .add_message(forward)
            .add_event(
                Event::new("CompleteWithdrawal")
                    .add_attribute("asset", asset.id())
                    .add_attribute("strategy", strategy)
                    .add_attribute("shares", shares.to_string())
                    .add_attribute("amount", amount.to_string()),
            ))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AssetBalance { asset } => to_json_binary(&query::asset_balance(deps, env, asset)?),
        QueryMsg::StakedBalance { asset } => {
            to_json_binary(&query::staked_balance(deps, env, asset)?)
        }
        QueryMsg::NativeStakedBalance {} => {
            to_json_binary(&query::native_staked_balance(deps, env)?)
        }
    }
}

mod query {
    use super::*;
    use cosmwasm_std::Uint128;
    use lrp_library::asset::{self, AssetId};
    use lrp_library::{registry, restaking};

    pub fn asset_balance(deps: Deps, env: Env, asset: AssetId) -> StdResult<Uint128> {
        asset::balance_of(&deps.querier, deps.storage, &asset, &env.contract.address)
    }

    /// Strategy position converted to underlying units. Zero when the asset
    /// has no assigned strategy or no shares.
    pub fn staked_balance(deps: Deps, env: Env, asset: AssetId) -> StdResult<Uint128> {
        let Some(strategy) = registry::asset_strategy(deps, &asset)? else {
            return Ok(Uint128::zero());
        };
        let strategy_manager = state::get_strategy_manager(deps.storage)?;
        let shares = restaking::strategy_shares(
            &deps.querier,
            &strategy_manager,
            &strategy,
            &env.contract.address,
        )?;
        if shares.is_zero() {
            return Ok(Uint128::zero());
        }
        restaking::shares_to_underlying(&deps.querier, &strategy_manager, &strategy, shares)
    }

    pub fn native_staked_balance(deps: Deps, env: Env) -> StdResult<Uint128> {
        let native_staking = state::get_native_staking(deps.storage)?;
        let pod = restaking::pod_balance(&deps.querier, &native_staking, &env.contract.address)?;
        let unverified = state::get_staked_unverified(deps.storage)?;
        Ok(pod.checked_add(unverified)?)
    }
}
