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

    let registry = deps.api.addr_validate(&msg.registry)?;
    lrp_library::registry::set_registry(deps.storage, &registry)?;

    let oracle = deps.api.addr_validate(&msg.oracle)?;
    lrp_library::oracle::set_oracle(deps.storage, &oracle)?;

    let receipt_token = deps.api.addr_validate(&msg.receipt_token)?;
    state::RECEIPT_TOKEN.save(deps.storage, &receipt_token)?;

    let unstaking_vault = deps.api.addr_validate(&msg.unstaking_vault)?;
    state::UNSTAKING_VAULT.save(deps.storage, &unstaking_vault)?;

    if let Some(converter) = msg.converter {
        let converter = deps.api.addr_validate(&converter)?;
        state::CONVERTER.save(deps.storage, &converter)?;
    }

    lrp_library::asset::set_denom(deps.storage, msg.denom)?;
    state::MIN_DEPOSIT.save(deps.storage, &msg.min_deposit)?;
    state::MAX_DELEGATES.save(deps.storage, &msg.max_delegates)?;
    state::WITHDRAWAL_DELAY_BLOCKS.save(deps.storage, &msg.withdrawal_delay_blocks)?;
    state::DELEGATES.save(deps.storage, &vec![])?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("receipt_token", receipt_token)
        .add_attribute("min_deposit", msg.min_deposit.to_string())
        .add_attribute("max_delegates", msg.max_delegates.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            asset,
            amount,
            min_receipt_out,
            referral,
        } => {
            asset.validate(deps.api)?;
            execute::deposit(deps, env, info, asset, amount, min_receipt_out, referral)
        }
        ExecuteMsg::AddDelegates { delegates } => execute::add_delegates(deps, env, info, delegates),
        ExecuteMsg::RemoveDelegate { delegate } => {
            execute::remove_delegates(deps, env, info, vec![delegate])
        }
        ExecuteMsg::RemoveDelegates { delegates } => {
            execute::remove_delegates(deps, env, info, delegates)
        }
        ExecuteMsg::TransferToDelegate {
            delegate_index,
            asset,
            amount,
        } => {
            asset.validate(deps.api)?;
            execute::transfer_to_delegate(deps, env, info, delegate_index, asset, amount)
        }
        ExecuteMsg::TransferToConverter { asset, amount } => {
            asset.validate(deps.api)?;
            execute::transfer_to_converter(deps, env, info, asset, amount)
        }
        ExecuteMsg::SwapNativeForAsset { asset, min_out } => {
            asset.validate(deps.api)?;
            execute::swap_native_for_asset(deps, env, info, asset, min_out)
        }
        ExecuteMsg::RequestWithdrawal {
            asset,
            receipt_amount,
        } => {
            asset.validate(deps.api)?;
            execute::request_withdrawal(deps, env, info, asset, receipt_amount)
        }
        ExecuteMsg::ClaimWithdrawal { request_id } => {
            execute::claim_withdrawal(deps, env, info, request_id)
        }
        ExecuteMsg::SetMinDeposit { amount } => execute::set_min_deposit(deps, info, amount),
        ExecuteMsg::SetMaxDelegates { count } => execute::set_max_delegates(deps, info, count),
        ExecuteMsg::SetWithdrawalDelay { blocks } => {
            execute::set_withdrawal_delay(deps, info, blocks)
        }
        ExecuteMsg::SetConverter { converter } => execute::set_converter(deps, info, converter),
    }
}

mod execute {
    use super::*;
    use crate::msg::WithdrawalRequest;
    use cosmwasm_std::{Addr, Event, StdError, Uint128};
    use cw_utils::{must_pay, nonpayable};
    use lrp_library::asset::{self, AssetId};
    use lrp_library::oracle::{self, PRICE_ONE};
    use lrp_library::{receipt, registry};

    fn mul_ratio(
        amount: Uint128,
        numerator: Uint128,
        denominator: Uint128,
    ) -> Result<Uint128, ContractError> {
        amount
            .checked_multiply_ratio(numerator, denominator)
            .map_err(|e| StdError::generic_err(e.to_string()).into())
    }

    pub fn deposit(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        asset: AssetId,
        amount: Uint128,
        min_receipt_out: Uint128,
        referral: Option<String>,
    ) -> Result<Response, ContractError> {
        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }
        let min_deposit = state::MIN_DEPOSIT.load(deps.storage)?;
        if amount < min_deposit {
            return Err(ContractError::LessThanMinDeposit {
                amount,
                min_deposit,
            });
        }

        match &asset {
            AssetId::Native => {
                let denom = asset::get_denom(deps.storage)?;
                let paid = must_pay(&info, &denom)?;
                if paid != amount {
                    return Err(ContractError::FundsMismatch {});
                }
            }
            AssetId::Cw20(_) => {
                nonpayable(&info)?;
                if !registry::is_supported_asset(deps.as_ref(), &asset)? {
                    return Err(ContractError::UnsupportedAsset { asset: asset.id() });
                }
            }
        }

        let limit = registry::deposit_limit(deps.as_ref(), &asset)?;
        let total = query::total_deposits(deps.as_ref(), &env, &asset)?;
        match &asset {
            AssetId::Native => {
                // The attached funds are already in the pool's bank balance,
                // so the limit applies to the backing as it stood before this
                // deposit arrived. The deposit itself may overshoot: it
                // cannot be partially rejected.
                let before = total.checked_sub(amount).map_err(StdError::from)?;
                if before >= limit {
                    return Err(ContractError::DepositLimitExceeded {
                        asset: asset.id(),
                        limit,
                    });
                }
            }
            AssetId::Cw20(_) => {
                if total.checked_add(amount).map_err(StdError::from)? > limit {
                    return Err(ContractError::DepositLimitExceeded {
                        asset: asset.id(),
                        limit,
                    });
                }
            }
        }

        let asset_price = oracle::asset_price(deps.as_ref(), &asset)?;
        let receipt_price = oracle::receipt_token_price(deps.as_ref())?;
        let minted = mul_ratio(amount, asset_price, receipt_price)?;
        if minted.is_zero() {
            return Err(ContractError::ZeroMint {});
        }
        if minted < min_receipt_out {
            return Err(ContractError::SlippageExceeded {
                out: minted,
                min_out: min_receipt_out,
            });
        }

        let receipt_token = state::get_receipt_token(deps.storage)?;
        let mut response = Response::new();
        if let AssetId::Cw20(token) = &asset {
            response = response.add_message(asset::transfer_from_msg(
                token,
                &info.sender,
                &env.contract.address,
                amount,
            )?);
        }
        response = response.add_message(receipt::mint_msg(&receipt_token, &info.sender, minted)?);

        Ok(response.add_event(
            Event::new("Deposit")
                .add_attribute("sender", info.sender)
                .add_attribute("asset", asset.id())
                .add_attribute("amount", amount.to_string())
                .add_attribute("minted", minted.to_string())
                .add_attribute("referral", referral.unwrap_or_default()),
        ))
    }

    pub fn add_delegates(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        delegates: Vec<String>,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let max = state::MAX_DELEGATES.load(deps.storage)?;
        let mut queue = state::get_delegates(deps.storage)?;

        let mut response = Response::new();
        for delegate in delegates {
            let delegate = deps.api.addr_validate(&delegate)?;
            // Adding an existing member is a no-op, not an error.
            if state::is_delegate(deps.storage, &delegate)? {
                continue;
            }
            if queue.len() as u32 >= max {
                return Err(ContractError::MaxDelegatesExceeded { max });
            }
            queue.push(delegate.clone());
            state::IS_DELEGATE.save(deps.storage, &delegate, &true)?;
            response = response.add_event(
                Event::new("DelegateAdded")
                    .add_attribute("delegate", delegate)
                    .add_attribute("queue_length", queue.len().to_string()),
            );
        }
        state::DELEGATES.save(deps.storage, &queue)?;

        Ok(response)
    }

    pub fn remove_delegates(
        mut deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        delegates: Vec<String>,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let mut response = Response::new();
        for delegate in delegates {
            let delegate = deps.api.addr_validate(&delegate)?;
            remove_delegate(deps.branch(), &delegate)?;
            response =
                response.add_event(Event::new("DelegateRemoved").add_attribute("delegate", delegate));
        }
        Ok(response)
    }

    /// Remove one delegate from the queue. A delegate still holding or
    /// staking any supported asset cannot be removed: its balances would
    /// drop out of the aggregation.
    fn remove_delegate(deps: DepsMut, delegate: &Addr) -> Result<(), ContractError> {
        if !state::is_delegate(deps.storage, delegate)? {
            return Err(ContractError::DelegateNotFound {
                delegate: delegate.to_string(),
            });
        }

        let native_direct = asset::balance_of(
            &deps.querier,
            deps.storage,
            &AssetId::Native,
            delegate,
        )?;
        let native_staked: Uint128 = deps.querier.query_wasm_smart(
            delegate.to_string(),
            &lrp_delegate::msg::QueryMsg::NativeStakedBalance {},
        )?;
        if !native_direct.is_zero() || !native_staked.is_zero() {
            return Err(ContractError::DelegateHasNativeBalance {
                delegate: delegate.to_string(),
            });
        }

        for asset in registry::supported_assets(deps.as_ref())? {
            if asset.is_native() {
                continue;
            }
            let direct = asset::balance_of(&deps.querier, deps.storage, &asset, delegate)?;
            let staked: Uint128 = deps.querier.query_wasm_smart(
                delegate.to_string(),
                &lrp_delegate::msg::QueryMsg::StakedBalance {
                    asset: asset.clone(),
                },
            )?;
            let balance = direct.checked_add(staked).map_err(StdError::from)?;
            if !balance.is_zero() {
                return Err(ContractError::DelegateHasAssetBalance {
                    delegate: delegate.to_string(),
                    asset: asset.id(),
                    balance,
                });
            }
        }

        let mut queue = state::get_delegates(deps.storage)?;
        let pos = queue.iter().position(|d| d == delegate).ok_or(
            ContractError::DelegateNotFound {
                delegate: delegate.to_string(),
            },
        )?;
        // Swap-remove: queue order is not preserved across removals.
        queue.swap_remove(pos);
        state::DELEGATES.save(deps.storage, &queue)?;
        state::IS_DELEGATE.remove(deps.storage, delegate);

        Ok(())
    }

    pub fn transfer_to_delegate(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        delegate_index: u32,
        asset: AssetId,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_manager(deps.as_ref(), &info)?;

        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }

        let queue = state::get_delegates(deps.storage)?;
        let delegate = queue
            .get(delegate_index as usize)
            .ok_or(ContractError::DelegateIndexOutOfRange {
                index: delegate_index,
                len: queue.len() as u32,
            })?;

        let transfer = asset::transfer_msg(deps.storage, &asset, delegate, amount)?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("TransferToDelegate")
                .add_attribute("delegate", delegate)
                .add_attribute("asset", asset.id())
                .add_attribute("amount", amount.to_string()),
        ))
    }

    pub fn transfer_to_converter(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset: AssetId,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let converter = state::CONVERTER
            .may_load(deps.storage)?
            .ok_or(ContractError::Unauthorized {
                msg: "No converter configured.".to_string(),
            })?;
        if info.sender != converter {
            return Err(ContractError::Unauthorized {
                msg: "Only the converter can pull assets.".to_string(),
            });
        }

        if amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Amount cannot be zero.".to_string(),
            });
        }

        let transfer = asset::transfer_msg(deps.storage, &asset, &converter, amount)?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("TransferToConverter")
                .add_attribute("asset", asset.id())
                .add_attribute("amount", amount.to_string()),
        ))
    }

    pub fn swap_native_for_asset(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        asset: AssetId,
        min_out: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_manager(deps.as_ref(), &info)?;

        if asset.is_native() {
            return Err(ContractError::UnsupportedAsset { asset: asset.id() });
        }

        let denom = asset::get_denom(deps.storage)?;
        let funds = must_pay(&info, &denom)?;

        let asset_price = oracle::asset_price(deps.as_ref(), &asset)?;
        let out = mul_ratio(funds, PRICE_ONE, asset_price)?;
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

        let transfer = asset::transfer_msg(deps.storage, &asset, &info.sender, out)?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("SwapExecuted")
                .add_attribute("sender", info.sender)
                .add_attribute("asset", asset.id())
                .add_attribute("native_in", funds.to_string())
                .add_attribute("asset_out", out.to_string()),
        ))
    }

    pub fn request_withdrawal(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        asset: AssetId,
        receipt_amount: Uint128,
    ) -> Result<Response, ContractError> {
        nonpayable(&info)?;

        if receipt_amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Receipt amount cannot be zero.".to_string(),
            });
        }
        if !asset.is_native() && !registry::is_supported_asset(deps.as_ref(), &asset)? {
            return Err(ContractError::UnsupportedAsset { asset: asset.id() });
        }

        let asset_price = oracle::asset_price(deps.as_ref(), &asset)?;
        let receipt_price = oracle::receipt_token_price(deps.as_ref())?;
        let expected_amount = mul_ratio(receipt_amount, receipt_price, asset_price)?;
        if expected_amount.is_zero() {
            return Err(ContractError::Zero {
                msg: "Receipt amount is too small to withdraw anything.".to_string(),
            });
        }

        let receipt_token = state::get_receipt_token(deps.storage)?;
        let burn = receipt::burn_from_msg(&receipt_token, &info.sender, receipt_amount)?;

        let request_id = state::next_withdrawal_id(deps.storage)?;
        state::WITHDRAWAL_REQUESTS.save(
            deps.storage,
            (&info.sender, request_id),
            &WithdrawalRequest {
                asset: asset.clone(),
                receipt_amount,
                expected_amount,
                block: env.block.height,
            },
        )?;

        Ok(Response::new().add_message(burn).add_event(
            Event::new("RequestWithdrawal")
                .add_attribute("sender", info.sender)
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("asset", asset.id())
                .add_attribute("receipt_amount", receipt_amount.to_string())
                .add_attribute("expected_amount", expected_amount.to_string())
                .add_attribute("block", env.block.height.to_string()),
        ))
    }

    pub fn claim_withdrawal(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        request_id: u64,
    ) -> Result<Response, ContractError> {
        let request = state::WITHDRAWAL_REQUESTS
            .may_load(deps.storage, (&info.sender, request_id))?
            .ok_or(ContractError::WithdrawalRequestNotFound { request_id })?;

        let delay = state::WITHDRAWAL_DELAY_BLOCKS.load(deps.storage)?;
        let claimable_at = request.block.saturating_add(delay);
        if env.block.height < claimable_at {
            return Err(ContractError::WithdrawalDelayNotElapsed { claimable_at });
        }

        let held = asset::balance_of(
            &deps.querier,
            deps.storage,
            &request.asset,
            &env.contract.address,
        )?;
        if held < request.expected_amount {
            return Err(ContractError::InsufficientAssetBalance {
                asset: request.asset.id(),
                available: held,
                requested: request.expected_amount,
            });
        }

        state::WITHDRAWAL_REQUESTS.remove(deps.storage, (&info.sender, request_id));
        let transfer = asset::transfer_msg(
            deps.storage,
            &request.asset,
            &info.sender,
            request.expected_amount,
        )?;

        Ok(Response::new().add_message(transfer).add_event(
            Event::new("ClaimWithdrawal")
                .add_attribute("sender", info.sender)
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("asset", request.asset.id())
                .add_attribute("amount", request.expected_amount.to_string()),
        ))
    }

    pub fn set_min_deposit(
        deps: DepsMut,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let old = state::MIN_DEPOSIT.load(deps.storage)?;
        state::MIN_DEPOSIT.save(deps.storage, &amount)?;

        Ok(Response::new().add_event(
            Event::new("SetMinDeposit")
                .add_attribute("old", old.to_string())
                .add_attribute("new", amount.to_string()),
        ))
    }

    pub fn set_max_delegates(
        deps: DepsMut,
        info: MessageInfo,
        count: u32,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let len = state::get_delegates(deps.storage)?.len() as u32;
        if count < len {
            return Err(ContractError::BoundBelowQueueLength { count, len });
        }

        let old = state::MAX_DELEGATES.load(deps.storage)?;
        state::MAX_DELEGATES.save(deps.storage, &count)?;

        Ok(Response::new().add_event(
            Event::new("SetMaxDelegates")
                .add_attribute("old", old.to_string())
                .add_attribute("new", count.to_string()),
        ))
    }

    pub fn set_withdrawal_delay(
        deps: DepsMut,
        info: MessageInfo,
        blocks: u64,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let old = state::WITHDRAWAL_DELAY_BLOCKS.load(deps.storage)?;
        state::WITHDRAWAL_DELAY_BLOCKS.save(deps.storage, &blocks)?;

        Ok(Response::new().add_event(
            Event::new("SetWithdrawalDelay")
                .add_attribute("old", old.to_string())
                .add_attribute("new", blocks.to_string()),
        ))
    }

    pub fn set_converter(
        deps: DepsMut,
        info: MessageInfo,
        converter: String,
    ) -> Result<Response, ContractError> {
        registry::assert_admin(deps.as_ref(), &info)?;

        let converter = deps.api.addr_validate(&converter)?;
        state::CONVERTER.save(deps.storage, &converter)?;

        Ok(Response::new()
            .add_event(Event::new("SetConverter").add_attribute("converter", converter)))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AssetDistribution { asset } => {
            to_json_binary(&query::asset_distribution(deps, &env, &asset)?)
        }
        QueryMsg::TotalDeposits { asset } => {
            to_json_binary(&query::total_deposits(deps, &env, &asset)?)
        }
        QueryMsg::Delegates {} => to_json_binary(&state::get_delegates(deps.storage)?),
        QueryMsg::IsDelegate { delegate } => {
            let delegate = deps.api.addr_validate(&delegate)?;
            to_json_binary(&state::is_delegate(deps.storage, &delegate)?)
        }
        QueryMsg::Config {} => to_json_binary(&query::config(deps)?),
        QueryMsg::WithdrawalRequests { owner } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_json_binary(&query::withdrawal_requests(deps, &owner)?)
        }
    }
}

mod query {
    use super::*;
    use crate::msg::{ConfigResponse, DistributionResponse, WithdrawalRequestResponse};
    use cosmwasm_std::{Addr, Order, Uint128};
    use lrp_library::asset::{self, AssetId};
    use lrp_library::{oracle, registry};

    /// Walk every leg of the system and report where `asset` currently
    /// sits. O(n) in the bounded delegate queue.
    pub fn asset_distribution(
        deps: Deps,
        env: &Env,
        asset: &AssetId,
    ) -> StdResult<DistributionResponse> {
        let pool = asset::balance_of(&deps.querier, deps.storage, asset, &env.contract.address)?;

        let mut delegate_pending = Uint128::zero();
        let mut delegate_staked = Uint128::zero();
        for delegate in state::get_delegates(deps.storage)? {
            let pending = asset::balance_of(&deps.querier, deps.storage, asset, &delegate)?;
            delegate_pending = delegate_pending.checked_add(pending)?;

            let staked: Uint128 = match asset {
                AssetId::Native => deps.querier.query_wasm_smart(
                    delegate.to_string(),
                    &lrp_delegate::msg::QueryMsg::NativeStakedBalance {},
                )?,
                AssetId::Cw20(_) => deps.querier.query_wasm_smart(
                    delegate.to_string(),
                    &lrp_delegate::msg::QueryMsg::StakedBalance {
                        asset: asset.clone(),
                    },
                )?,
            };
            delegate_staked = delegate_staked.checked_add(staked)?;
        }

        let unstaking_vault = state::get_unstaking_vault(deps.storage)?;
        let unstaking: Uint128 = deps.querier.query_wasm_smart(
            unstaking_vault.to_string(),
            &lrp_unstaking_vault::msg::QueryMsg::AssetsUnstaking {
                asset: asset.clone(),
            },
        )?;
        let vault_pending =
            asset::balance_of(&deps.querier, deps.storage, asset, &unstaking_vault)?;

        let converter = match state::CONVERTER.may_load(deps.storage)? {
            Some(converter) => {
                asset::balance_of(&deps.querier, deps.storage, asset, &converter)?
            }
            None => Uint128::zero(),
        };

        let total = pool
            .checked_add(delegate_pending)?
            .checked_add(delegate_staked)?
            .checked_add(unstaking)?
            .checked_add(converter)?
            .checked_add(vault_pending)?;

        Ok(DistributionResponse {
            pool,
            delegate_pending,
            delegate_staked,
            unstaking,
            converter,
            vault_pending,
            total,
        })
    }

    pub fn total_deposits(deps: Deps, env: &Env, asset: &AssetId) -> StdResult<Uint128> {
        Ok(asset_distribution(deps, env, asset)?.total)
    }

    pub fn config(deps: Deps) -> StdResult<ConfigResponse> {
        Ok(ConfigResponse {
            registry: registry::get_registry(deps.storage)?,
            oracle: oracle::get_oracle(deps.storage)?,
            receipt_token: state::get_receipt_token(deps.storage)?,
            unstaking_vault: state::get_unstaking_vault(deps.storage)?,
            converter: state::CONVERTER.may_load(deps.storage)?,
            denom: asset::get_denom(deps.storage)?,
            min_deposit: state::MIN_DEPOSIT.load(deps.storage)?,
            max_delegates: state::MAX_DELEGATES.load(deps.storage)?,
            withdrawal_delay_blocks: state::WITHDRAWAL_DELAY_BLOCKS.load(deps.storage)?,
        })
    }

    pub fn withdrawal_requests(
        deps: Deps,
        owner: &Addr,
    ) -> StdResult<Vec<WithdrawalRequestResponse>> {
        state::WITHDRAWAL_REQUESTS
            .prefix(owner)
            .range(deps.storage, None, None, Order::Ascending)
            .map(|entry| {
                let (id, request) = entry?;
                Ok(WithdrawalRequestResponse { id, request })
            })
            .collect()
    }
}
