use crate::asset::AssetId;
use crate::registry::QueryMsg;
use crate::testing::TestingContract;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    StdError, StdResult, Uint128,
};
use cw_multi_test::{App, Contract, ContractWrapper};
use cw_storage_plus::Map;

/// A functional in-test implementation of the asset registry collaborator.
/// Roles are fixed at instantiation; asset entries are settable by anyone
/// (tests orchestrate it directly).
#[cw_serde]
pub struct InstantiateMsg {
    pub admins: Vec<String>,
    pub managers: Vec<String>,
    pub operators: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetAsset {
        asset: AssetId,
        supported: bool,
        deposit_limit: Uint128,
        strategy: Option<String>,
    },
}

#[cw_serde]
struct AssetEntry {
    asset: AssetId,
    supported: bool,
    deposit_limit: Uint128,
    strategy: Option<Addr>,
}

const ADMINS: Map<&Addr, ()> = Map::new("admins");
const MANAGERS: Map<&Addr, ()> = Map::new("managers");
const OPERATORS: Map<&Addr, ()> = Map::new("operators");
const ASSETS: Map<&str, AssetEntry> = Map::new("assets");

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, StdError> {
    for admin in &msg.admins {
        ADMINS.save(deps.storage, &deps.api.addr_validate(admin)?, &())?;
    }
    for manager in &msg.managers {
        MANAGERS.save(deps.storage, &deps.api.addr_validate(manager)?, &())?;
    }
    for operator in &msg.operators {
        OPERATORS.save(deps.storage, &deps.api.addr_validate(operator)?, &())?;
    }
    Ok(Response::new())
}

fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::SetAsset {
            asset,
            supported,
            deposit_limit,
            strategy,
        } => {
            let strategy = strategy
                .map(|s| deps.api.addr_validate(&s))
                .transpose()?;
            ASSETS.save(
                deps.storage,
                asset.id().as_str(),
                &AssetEntry {
                    asset,
                    supported,
                    deposit_limit,
                    strategy,
                },
            )?;
            Ok(Response::new())
        }
    }
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsSupportedAsset { asset } => {
            let supported = ASSETS
                .may_load(deps.storage, asset.id().as_str())?
                .map(|e| e.supported)
                .unwrap_or(false);
            to_json_binary(&supported)
        }
        QueryMsg::DepositLimit { asset } => {
            let limit = ASSETS
                .may_load(deps.storage, asset.id().as_str())?
                .map(|e| e.deposit_limit)
                .unwrap_or(Uint128::MAX);
            to_json_binary(&limit)
        }
        QueryMsg::AssetStrategy { asset } => {
            let strategy = ASSETS
                .may_load(deps.storage, asset.id().as_str())?
                .and_then(|e| e.strategy);
            to_json_binary(&strategy)
        }
        QueryMsg::SupportedAssets {} => {
            let assets = ASSETS
                .range(deps.storage, None, None, Order::Ascending)
                .filter_map(|entry| match entry {
                    Ok((_, e)) if e.supported => Some(Ok(e.asset)),
                    Ok(_) => None,
                    Err(e) => Some(Err(e)),
                })
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&assets)
        }
        QueryMsg::IsAdmin { addr } => {
            let addr = deps.api.addr_validate(&addr)?;
            to_json_binary(&ADMINS.has(deps.storage, &addr))
        }
        QueryMsg::IsManager { addr } => {
            let addr = deps.api.addr_validate(&addr)?;
            to_json_binary(&MANAGERS.has(deps.storage, &addr))
        }
        QueryMsg::IsOperator { addr } => {
            let addr = deps.api.addr_validate(&addr)?;
            to_json_binary(&OPERATORS.has(deps.storage, &addr))
        }
    }
}

pub struct RegistryContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for RegistryContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }

    fn default_init(app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {
            admins: vec![app.api().addr_make("admin").to_string()],
            managers: vec![app.api().addr_make("manager").to_string()],
            operators: vec![app.api().addr_make("operator").to_string()],
        }
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "registry", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}

impl RegistryContract {
    /// Register `asset` as supported with the given limit and strategy.
    pub fn set_asset(
        &self,
        app: &mut App,
        asset: &AssetId,
        deposit_limit: Uint128,
        strategy: Option<&Addr>,
    ) {
        let sender = app.api().addr_make("admin");
        self.execute(
            app,
            &sender,
            &ExecuteMsg::SetAsset {
                asset: asset.clone(),
                supported: true,
                deposit_limit,
                strategy: strategy.map(|s| s.to_string()),
            },
        )
        .unwrap();
    }
}
