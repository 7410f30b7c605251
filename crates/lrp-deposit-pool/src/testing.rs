#![cfg(not(target_arch = "wasm32"))]

use crate::contract;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use cosmwasm_std::{Addr, Empty, Env, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper};
use lrp_library::testing::TestingContract;

pub struct DepositPoolContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for DepositPoolContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(
            contract::execute,
            contract::instantiate,
            contract::query,
        ))
    }

    fn default_init(app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {
            registry: Self::get_contract_addr(app, "registry").to_string(),
            oracle: Self::get_contract_addr(app, "oracle").to_string(),
            receipt_token: Self::get_contract_addr(app, "receipt_token").to_string(),
            unstaking_vault: Self::get_contract_addr(app, "unstaking_vault").to_string(),
            converter: None,
            denom: "untrn".to_string(),
            min_deposit: Uint128::new(10),
            max_delegates: 10,
            withdrawal_delay_blocks: 100,
        }
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "deposit_pool", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}
