use crate::asset::AssetId;
use crate::oracle::{QueryMsg, PRICE_ONE};
use crate::testing::TestingContract;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw_multi_test::{App, Contract, ContractWrapper};
use cw_storage_plus::{Item, Map};

/// A settable in-test price oracle. Unset assets are priced at par.
#[cw_serde]
pub struct InstantiateMsg {
    pub receipt_token_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetAssetPrice { asset: AssetId, price: Uint128 },
    SetReceiptTokenPrice { price: Uint128 },
}

const PRICES: Map<&str, Uint128> = Map::new("prices");
const RECEIPT_PRICE: Item<Uint128> = Item::new("receipt_price");

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, StdError> {
    RECEIPT_PRICE.save(deps.storage, &msg.receipt_token_price)?;
    Ok(Response::new())
}

fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::SetAssetPrice { asset, price } => {
            PRICES.save(deps.storage, asset.id().as_str(), &price)?;
        }
        ExecuteMsg::SetReceiptTokenPrice { price } => {
            RECEIPT_PRICE.save(deps.storage, &price)?;
        }
    }
    Ok(Response::new())
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AssetPrice { asset } => {
            if asset.is_native() {
                return to_json_binary(&PRICE_ONE);
            }
            let price = PRICES
                .may_load(deps.storage, asset.id().as_str())?
                .unwrap_or(PRICE_ONE);
            to_json_binary(&price)
        }
        QueryMsg::ReceiptTokenPrice {} => to_json_binary(&RECEIPT_PRICE.load(deps.storage)?),
    }
}

pub struct OracleContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for OracleContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }

    fn default_init(_app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {
            receipt_token_price: PRICE_ONE,
        }
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "oracle", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}

impl OracleContract {
    pub fn set_asset_price(&self, app: &mut App, asset: &AssetId, price: Uint128) {
        let sender = app.api().addr_make("admin");
        self.execute(
            app,
            &sender,
            &ExecuteMsg::SetAssetPrice {
                asset: asset.clone(),
                price,
            },
        )
        .unwrap();
    }

    pub fn set_receipt_token_price(&self, app: &mut App, price: Uint128) {
        let sender = app.api().addr_make("admin");
        self.execute(app, &sender, &ExecuteMsg::SetReceiptTokenPrice { price })
            .unwrap();
    }
}
