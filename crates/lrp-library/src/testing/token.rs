use crate::testing::TestingContract;
use cosmwasm_std::{Addr, Empty, Env, Uint128};
use cw20::MinterResponse;
use cw_multi_test::{App, Contract, ContractWrapper};

/// A real cw20-base token for integration tests (receipt token, lst).
pub struct Cw20TokenContract {
    pub addr: Addr,
    pub init: cw20_base::msg::InstantiateMsg,
}

impl
    TestingContract<
        cw20_base::msg::InstantiateMsg,
        cw20_base::msg::ExecuteMsg,
        cw20_base::msg::QueryMsg,
    > for Cw20TokenContract
{
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query,
        ))
    }

    fn default_init(app: &mut App, _env: &Env) -> cw20_base::msg::InstantiateMsg {
        cw20_base::msg::InstantiateMsg {
            name: "Liquid Staking Token".to_string(),
            symbol: "LST".to_string(),
            decimals: 6,
            initial_balances: vec![],
            mint: Some(MinterResponse {
                minter: app.api().addr_make("owner").to_string(),
                cap: None,
            }),
            marketing: None,
        }
    }

    fn new(app: &mut App, env: &Env, msg: Option<cw20_base::msg::InstantiateMsg>) -> Self {
        let init = msg.unwrap_or_else(|| Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "cw20_token", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}

impl Cw20TokenContract {
    pub fn mint(&self, app: &mut App, minter: &Addr, recipient: &Addr, amount: Uint128) {
        self.execute(
            app,
            minter,
            &cw20_base::msg::ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            },
        )
        .unwrap();
    }

    pub fn increase_allowance(&self, app: &mut App, owner: &Addr, spender: &Addr, amount: Uint128) {
        self.execute(
            app,
            owner,
            &cw20_base::msg::ExecuteMsg::IncreaseAllowance {
                spender: spender.to_string(),
                amount,
                expires: None,
            },
        )
        .unwrap();
    }

    /// Hand the mint authority over, e.g. to the deposit pool once it exists.
    pub fn update_minter(&self, app: &mut App, current: &Addr, new_minter: &Addr) {
        self.execute(
            app,
            current,
            &cw20_base::msg::ExecuteMsg::UpdateMinter {
                new_minter: Some(new_minter.to_string()),
            },
        )
        .unwrap();
    }

    pub fn balance_of(&self, app: &App, addr: &Addr) -> Uint128 {
        let res: cw20::BalanceResponse = self
            .query(
                app,
                &cw20_base::msg::QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance
    }
}
