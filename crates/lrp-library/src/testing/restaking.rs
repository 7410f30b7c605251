use crate::restaking::{ExecuteMsg, NativeStakingQueryMsg, QueryMsg};
use crate::testing::TestingContract;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw_multi_test::{App, Contract, ContractWrapper};
use cw_storage_plus::{Item, Map};

/// An in-test strategy manager: shares are credited 1:1 with deposited
/// underlying, so `SharesToUnderlying` is the identity. Token custody is the
/// strategy address's own balance; this contract only does the accounting.
#[cw_serde]
pub struct InstantiateMsg {}

const SHARES: Map<(&str, &Addr), Uint128> = Map::new("shares");
const QUEUED: Map<(&str, &Addr), Uint128> = Map::new("queued");

fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, StdError> {
    Ok(Response::new())
}

fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::DepositIntoStrategy {
            strategy, amount, ..
        } => {
            SHARES.update(
                deps.storage,
                (strategy.as_str(), &info.sender),
                |shares| -> StdResult<_> {
                    shares
                        .unwrap_or(Uint128::zero())
                        .checked_add(amount)
                        .map_err(StdError::from)
                },
            )?;
        }
        ExecuteMsg::QueueWithdrawal { strategy, shares } => {
            SHARES.update(
                deps.storage,
                (strategy.as_str(), &info.sender),
                |held| -> StdResult<_> {
                    held.unwrap_or(Uint128::zero())
                        .checked_sub(shares)
                        .map_err(StdError::from)
                },
            )?;
            QUEUED.update(
                deps.storage,
                (strategy.as_str(), &info.sender),
                |queued| -> StdResult<_> {
                    queued
                        .unwrap_or(Uint128::zero())
                        .checked_add(shares)
                        .map_err(StdError::from)
                },
            )?;
        }
        ExecuteMsg::CompleteWithdrawal { strategy, shares } => {
            QUEUED.update(
                deps.storage,
                (strategy.as_str(), &info.sender),
                |queued| -> StdResult<_> {
                    queued
                        .unwrap_or(Uint128::zero())
                        .checked_sub(shares)
                        .map_err(StdError::from)
                },
            )?;
        }
    }
    Ok(Response::new())
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::StrategyShares { strategy, staker } => {
            let staker = deps.api.addr_validate(&staker)?;
            let shares = SHARES
                .may_load(deps.storage, (strategy.as_str(), &staker))?
                .unwrap_or(Uint128::zero());
            to_json_binary(&shares)
        }
        QueryMsg::SharesToUnderlying { shares, .. } => to_json_binary(&shares),
        QueryMsg::UnderlyingToShares { amount, .. } => to_json_binary(&amount),
    }
}

pub struct StrategyManagerContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for StrategyManagerContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }

    fn default_init(_app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {}
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "strategy_manager", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}

/// An in-test native staking deposit contract: accepts `Stake` funds and
/// answers pod-balance and deposit-root queries from settable state.
pub mod native_staking {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {}

    #[cw_serde]
    pub enum ExecuteMsg {
        Stake {
            pubkey: Binary,
            signature: Binary,
            deposit_root: HexBinary,
        },
        SetPodBalance {
            staker: String,
            amount: Uint128,
        },
        SetDepositRoot {
            root: HexBinary,
        },
    }

    const POD_BALANCES: Map<&Addr, Uint128> = Map::new("pod_balances");
    const DEPOSIT_ROOT: Item<HexBinary> = Item::new("deposit_root");

    fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: InstantiateMsg,
    ) -> Result<Response, StdError> {
        DEPOSIT_ROOT.save(deps.storage, &HexBinary::from([0u8; 32]))?;
        Ok(Response::new())
    }

    fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, StdError> {
        match msg {
            // Funds stay in this contract; pod balances are only reported
            // once "verified", which tests drive via SetPodBalance.
            ExecuteMsg::Stake { .. } => {}
            ExecuteMsg::SetPodBalance { staker, amount } => {
                let staker = deps.api.addr_validate(&staker)?;
                POD_BALANCES.save(deps.storage, &staker, &amount)?;
            }
            ExecuteMsg::SetDepositRoot { root } => {
                DEPOSIT_ROOT.save(deps.storage, &root)?;
            }
        }
        Ok(Response::new())
    }

    fn query(deps: Deps, _env: Env, msg: NativeStakingQueryMsg) -> StdResult<Binary> {
        match msg {
            NativeStakingQueryMsg::PodBalance { staker } => {
                let staker = deps.api.addr_validate(&staker)?;
                let balance = POD_BALANCES
                    .may_load(deps.storage, &staker)?
                    .unwrap_or(Uint128::zero());
                to_json_binary(&balance)
            }
            NativeStakingQueryMsg::DepositRoot {} => {
                to_json_binary(&DEPOSIT_ROOT.load(deps.storage)?)
            }
        }
    }

    pub struct NativeStakingContract {
        pub addr: Addr,
        pub init: InstantiateMsg,
    }

    impl TestingContract<InstantiateMsg, ExecuteMsg, NativeStakingQueryMsg>
        for NativeStakingContract
    {
        fn wrapper() -> Box<dyn Contract<Empty>> {
            Box::new(ContractWrapper::new(execute, instantiate, query))
        }

        fn default_init(_app: &mut App, _env: &Env) -> InstantiateMsg {
            InstantiateMsg {}
        }

        fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
            let init = msg.unwrap_or_else(|| Self::default_init(app, env));
            let code_id = Self::store_code(app);
            let addr = Self::instantiate(app, code_id, "native_staking", &init);
            Self { addr, init }
        }

        fn addr(&self) -> &Addr {
            &self.addr
        }
    }

    impl NativeStakingContract {
        pub fn set_pod_balance(&self, app: &mut App, staker: &Addr, amount: Uint128) {
            let sender = app.api().addr_make("admin");
            self.execute(
                app,
                &sender,
                &ExecuteMsg::SetPodBalance {
                    staker: staker.to_string(),
                    amount,
                },
            )
            .unwrap();
        }

        pub fn set_deposit_root(&self, app: &mut App, root: HexBinary) {
            let sender = app.api().addr_make("admin");
            self.execute(app, &sender, &ExecuteMsg::SetDepositRoot { root })
                .unwrap();
        }
    }
}

pub use native_staking::NativeStakingContract;
