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

    let oracle = deps.api.addr_validate(&msg.oracle)?;
    lrp_library::oracle::set_oracle(deps.storage, &oracle)?;

    lrp_library::asset::set_denom(deps.storage, msg.denom)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deposit_pool", deposit_pool)
        .add_attribute("registry", registry)
        .add_attribute("oracle", oracle))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferAssetFromDepositPool { asset, amount } => {
            asset.validate(deps.api)?;
            execute::transfer_asset_from_deposit_pool(deps, env, info, asset, amount)
        }
        ExecuteMsg::SwapNativeToAsset { asset, min_out } => {
            asset.validate(deps.api)?;
            execute::swap_native_to_asset(deps, env, info, asset, min_out)
        }
        ExecuteMsg::Unstake { asset, amount } => {
            asset.validate(deps.api)?;
            execute::unstake(deps, env, info, asset, amount)
        }
        ExecuteMsg::Claim { asset } => {
            asset.validate(deps.api)?;
            execute::claim(deps, env, info, asset)
        }
        ExecuteMsg::SendNativeToDepositPool {} => {
            execute::send_native_to_deposit_pool(deps, env, info)
        }
        ExecuteMsg::SetAdapter { asset, adapter } => {
            asset.validate(deps.api)?;
            execute::set_adapter(deps, env, info, asset, adapter)
        }
    }
}

/// Snipped interface of the per-asset unstake/claim adapters. An adapter is
/// a black box that receives the asset, unstakes it with its origin
/// protocol, and later sends native proceeds back to the converter.
pub mod adapter {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::Uint128;

    #[cw_serde]
    pub enum AdapterExecuteMsg {
        /// Begin unstaking `amount` of the adapter's asset.
        Unstake { amount: Uint128 },
        /// Release matured native proceeds to the caller.
        Claim {},
    }
}

mod execute {
    use super::*;
    use cosmwasm_std::{BankMsg, Coin, CosmosMsg, Event, StdError, Uint128, WasmMsg};
    use lrp_library::asset::{self, AssetId};
    use lrp_library::oracle::{self, PRICE_ONE};
    use lrp_library::registry;

    fn mul_ratio(
        amount: Uint128,
        numerator: Uint128,
        denominator: Uint128,
    ) -> Result<Uint128, ContractError> {
        amount
            .checked_multiply_ratio(numerator, denominator)
            .map_err(|e| StdError::generic_err(e.to_string()).into())
    }

    pub fn transfer_asset_from_deposit_pool(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }

        let price = oracle::asset_price(deps.as_ref(), &asset)?;
        let value = mul_ratio(amount, price, PRICE_ONE)?;
        let total = state::add_native_value_in_withdrawal(deps.storage, value)?;

        // If the pool leg fails the whole transaction reverts, counter
        // included.
        let deposit_pool = state::get_deposit_pool(deps.storage)?;
        let pull: CosmosMsg = WasmMsg::Execute {
            contract_addr: deposit_pool.to_string(),
            msg: to_json_binary(&lrp_deposit_pool::msg::ExecuteMsg::TransferToConverter {
                asset: asset.clone(),
                amount,
            })?,
            funds: vec![],
        }
        .into();

        Ok(Response::new().add_message(pull).add_event(
            Event::new("TransferAssetFromDepositPool")
                .add_attribute("asset", asset.id())
                .add_attribute("amount", amount.to_string())
                .add_attribute("value", value.to_string())
                .add_attribute("native_value_in_withdrawal", total.to_string()),
        ))
    }

    pub fn swap_native_to_asset(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        asset: AssetId,
        min_out: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        if asset.is_native() {
            return Err(ContractError::UnsupportedAsset { asset: asset.id() });
        }

        let denom = asset::get_denom(deps.storage)?;
        let funds = cw_utils::must_pay(&info, &denom)?;

        let price = oracle::asset_price(deps.as_ref(), &asset)?;
        let out = mul_ratio(funds, PRICE_ONE, price)?;
        if out < min_out {
            return Err(ContractError::SlippageExceeded { out, min_out });
        }

        let held = asset::balance_of(&deps.querier, deps.storage, &asset, &env.contract.address)?;
        if held < out {
            return Err(ContractError::InsufficientAssetBalance {
                asset: asset.id(),
                available: held,
                requested: out,
            });
        }

        let limit_total = state::add_conversion_limit(deps.storage, &asset, funds)?;
        let transfer = asset::transfer_msg(deps.storage, &asset, &info.sender, out)?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("SwapNativeToAsset")
                .add_attribute("sender", info.sender)
                .add_attribute("asset", asset.id())
                .add_attribute("native_in", funds.to_string())
                .add_attribute("asset_out", out.to_string())
                .add_attribute("conversion_total", limit_total.to_string()),
        ))
    }

    pub fn unstake(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }

        let adapter = state::ADAPTERS
            .may_load(deps.storage, asset.id().as_str())?
            .ok_or(ContractError::NoAdapterConfigured { asset: asset.id() })?;

        let transfer = asset::transfer_msg(deps.storage, &asset, &adapter, amount)?;
        let unstake: CosmosMsg = WasmMsg::Execute {
            contract_addr: adapter.to_string(),
            msg: to_json_binary(&adapter::AdapterExecuteMsg::Unstake { amount })?,
            funds: vec![],
        }
        .into();

        Ok(Response::new()
            .add_message(transfer)
            .add_message(unstake)
            .add_event(
                Event::new("Unstake")
                    .add_attribute("asset", asset.id())
                    .add_attribute("adapter", adapter)
                    .add_attribute("amount", amount.to_string()),
            ))
    }

    pub fn claim(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        let adapter = state::ADAPTERS
            .may_load(deps.storage, asset.id().as_str())?
            .ok_or(ContractError::NoAdapterConfigured { asset: asset.id() })?;

        let claim: CosmosMsg = WasmMsg::Execute {
            contract_addr: adapter.to_string(),
            msg: to_json_binary(&adapter::AdapterExecuteMsg::Claim {})?,
            funds: vec![],
        }
        .into();

        Ok(Response::new().add_message(claim).add_event(
            Event::new("Claim")
                .add_attribute("asset", asset.id())
                .add_attribute("adapter", adapter),
        ))
    }

    pub fn send_native_to_deposit_pool(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
    ) -> Result<Response, ContractError> {
        registry::assert_operator(deps.as_ref(), &info)?;

        let denom = asset::get_denom(deps.storage)?;
        let balance = deps
            .querier
            .query_balance(&env.contract.address, &denom)?
            .amount;
        if balance.is_zero() {
            return Err(ContractError::ZeroBalance {
                asset: AssetId::Native.id(),
            });
        }

        let total = state::sub_native_value_in_withdrawal(deps.storage, balance)?;

        let deposit_pool = state::get_deposit_pool(deps.storage)?;
        let send = BankMsg::Send {
            to_address: deposit_pool.to_string(),
            amount: vec![Coin {
                denom,
                amount: balance,
            }],
        };

        Ok(Response::new().add_message(send).add_event(
            Event::new("SendNativeToDepositPool")
                .add_attribute("amount", balance.to_string())
                .add_attribute("native_value_in_withdrawal", total.to_string()),
        ))
    }

    pub fn set_adapter(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        adapter: String,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let adapter = deps.api.addr_validate(&adapter)?;
        state::ADAPTERS.save(deps.storage, asset.id().as_str(), &adapter)?;

        Ok(Response::new().add_event(
            Event::new("SetAdapter")
                .add_attribute("asset", asset.id())
                .add_attribute("adapter", adapter),
        ))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::NativeValueInWithdrawal {} => {
            to_json_binary(&state::get_native_value_in_withdrawal(deps.storage)?)
        }
        QueryMsg::ConversionLimit { asset } => {
            to_json_binary(&state::get_conversion_limit(deps.storage, &asset)?)
        }
        QueryMsg::Adapter { asset } => {
            to_json_binary(&state::ADAPTERS.may_load(deps.storage, asset.id().as_str())?)
        }
    }
}
