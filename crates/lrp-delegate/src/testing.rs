#![cfg(not(target_arch = "wasm32"))]

use crate::contract;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use cosmwasm_std::{Addr, Empty, Env, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper};
use lrp_library::testing::TestingContract;

pub struct DelegateContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for DelegateContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(
            contract::execute,
            contract::instantiate,
            contract::query,
        ))
    }

    fn default_init(app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {
            deposit_pool: Self::get_contract_addr(app, "deposit_pool").to_string(),
            registry: Self::get_contract_addr(app, "registry").to_string(),
            unstaking_vault: Self::get_contract_addr(app, "unstaking_vault").to_string(),
            strategy_manager: Self::get_contract_addr(app, "strategy_manager").to_string(),
            native_staking: Self::get_contract_addr(app, "native_staking").to_string(),
            denom: "untrn".to_string(),
            stake_unit: Uint128::new(32_000_000),
        }
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "delegate", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}
