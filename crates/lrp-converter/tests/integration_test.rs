use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use lrp_converter::contract::adapter::AdapterExecuteMsg;
use lrp_converter::msg::{ExecuteMsg, QueryMsg};
use lrp_converter::testing::ConverterContract;
use lrp_deposit_pool::testing::DepositPoolContract;
use lrp_library::asset::AssetId;
use lrp_library::oracle::PRICE_ONE;
use lrp_library::testing::{
    Cw20TokenContract, OracleContract, RegistryContract, TestingContract,
};

const DENOM: &str = "untrn";

/// A black-box adapter: holds whatever it is sent, and on `Claim` releases
/// its full native balance to the caller.
fn adapter_contract() -> Box<dyn Contract<Empty>> {
    fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Empty,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: AdapterExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            AdapterExecuteMsg::Unstake { .. } => Ok(Response::new()),
            AdapterExecuteMsg::Claim {} => {
                let balance = deps
                    .querier
                    .query_balance(&env.contract.address, DENOM)?;
                Ok(Response::new().add_message(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: vec![balance],
                }))
            }
        }
    }

    fn query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
        to_json_binary(&Empty::default())
    }

    Box::new(ContractWrapper::new(execute, instantiate, query))
}

struct TestContracts {
    lst: Cw20TokenContract,
    pool: DepositPoolContract,
    converter: ConverterContract,
}

impl TestContracts {
    fn init() -> (App, TestContracts) {
        let mut app = App::new(|router, api, storage| {
            let owner = api.addr_make("owner");
            router
                .bank
                .init_balance(storage, &owner, coins(1_000_000_000_000, DENOM))
                .unwrap();
        });
        let env = mock_env();
        let admin = app.api().addr_make("admin");

        let registry = RegistryContract::new(&mut app, &env, None);
        let oracle = OracleContract::new(&mut app, &env, None);
        let lst = Cw20TokenContract::new(&mut app, &env, None);

        // The pool's receipt token and vault legs are not exercised here.
        let receipt_token = app.api().addr_make("receipt_token");
        let unstaking_vault = app.api().addr_make("unstaking_vault");
        let pool = DepositPoolContract::new(
            &mut app,
            &env,
            Some(lrp_deposit_pool::msg::InstantiateMsg {
                registry: registry.addr.to_string(),
                oracle: oracle.addr.to_string(),
                receipt_token: receipt_token.to_string(),
                unstaking_vault: unstaking_vault.to_string(),
                converter: None,
                denom: DENOM.to_string(),
                min_deposit: Uint128::new(10),
                max_delegates: 10,
                withdrawal_delay_blocks: 100,
            }),
        );
        let converter = ConverterContract::new(&mut app, &env, None);
        pool.execute(
            &mut app,
            &admin,
            &lrp_deposit_pool::msg::ExecuteMsg::SetConverter {
                converter: converter.addr.to_string(),
            },
        )
        .unwrap();

        // The lst trades at 2.0 native.
        oracle.set_asset_price(
            &mut app,
            &AssetId::Cw20(lst.addr.clone()),
            PRICE_ONE + PRICE_ONE,
        );

        (
            app,
            Self {
                lst,
                pool,
                converter,
            },
        )
    }

    fn lst_asset(&self) -> AssetId {
        AssetId::Cw20(self.lst.addr.clone())
    }

    fn native_value_in_withdrawal(&self, app: &App) -> Uint128 {
        self.converter
            .query(app, &QueryMsg::NativeValueInWithdrawal {})
            .unwrap()
    }
}

#[test]
fn conversion_round_trip_floors_the_counter() {
    let (mut app, tc) = TestContracts::init();
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let admin = app.api().addr_make("admin");
    let operator = app.api().addr_make("operator");
    let asset = tc.lst_asset();

    // The pool holds 2 lst awaiting conversion.
    tc.lst.mint(app, &owner, &tc.pool.addr, Uint128::new(2));

    // Pulling them records 2 * 2.0 = 4 native in withdrawal.
    tc.converter
        .execute(
            app,
            &operator,
            &ExecuteMsg::TransferAssetFromDepositPool {
                asset: asset.clone(),
                amount: Uint128::new(2),
            },
        )
        .unwrap();
    assert_eq!(tc.native_value_in_withdrawal(app), Uint128::new(4));
    assert_eq!(
        tc.lst.balance_of(app, &tc.converter.addr),
        Uint128::new(2)
    );
    assert_eq!(tc.lst.balance_of(app, &tc.pool.addr), Uint128::zero());

    // Hand the lst to the adapter and start unstaking.
    let adapter_code = app.store_code(adapter_contract());
    let adapter = app
        .instantiate_contract(
            adapter_code,
            app.api().addr_make("sender"),
            &Empty::default(),
            &[],
            "adapter",
            None,
        )
        .unwrap();
    tc.converter
        .execute(
            app,
            &admin,
            &ExecuteMsg::SetAdapter {
                asset: asset.clone(),
                adapter: adapter.to_string(),
            },
        )
        .unwrap();
    tc.converter
        .execute(
            app,
            &operator,
            &ExecuteMsg::Unstake {
                asset: asset.clone(),
                amount: Uint128::new(2),
            },
        )
        .unwrap();
    assert_eq!(tc.lst.balance_of(app, &adapter), Uint128::new(2));

    // The origin protocol matures: 5 native sit at the adapter, worth more
    // than the 4 recorded on the way out.
    app.send_tokens(owner, adapter.clone(), &coins(5, DENOM))
        .unwrap();
    tc.converter
        .execute(app, &operator, &ExecuteMsg::Claim { asset })
        .unwrap();
    let balance = app.wrap().query_balance(&tc.converter.addr, DENOM).unwrap();
    assert_eq!(balance.amount, Uint128::new(5));

    // Forwarding floors the counter at zero instead of underflowing.
    tc.converter
        .execute(app, &operator, &ExecuteMsg::SendNativeToDepositPool {})
        .unwrap();
    assert_eq!(tc.native_value_in_withdrawal(app), Uint128::zero());
    let balance = app.wrap().query_balance(&tc.pool.addr, DENOM).unwrap();
    assert_eq!(balance.amount, Uint128::new(5));
}

#[test]
fn swap_native_to_asset_accumulates_the_counter() {
    let (mut app, tc) = TestContracts::init();
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let operator = app.api().addr_make("operator");
    let asset = tc.lst_asset();

    tc.lst
        .mint(app, &owner, &tc.converter.addr, Uint128::new(100));
    app.send_tokens(owner, operator.clone(), &coins(200, DENOM))
        .unwrap();

    // 100 native buys 50 lst at 2.0.
    tc.converter
        .execute_with_funds(
            app,
            &operator,
            &ExecuteMsg::SwapNativeToAsset {
                asset: asset.clone(),
                min_out: Uint128::new(50),
            },
            coins(100, DENOM),
        )
        .unwrap();
    assert_eq!(tc.lst.balance_of(app, &operator), Uint128::new(50));

    let limit: Uint128 = tc
        .converter
        .query(
            app,
            &QueryMsg::ConversionLimit {
                asset: asset.clone(),
            },
        )
        .unwrap();
    assert_eq!(limit, Uint128::new(100));

    // Asking for more than the rate yields is rejected.
    let err = tc
        .converter
        .execute_with_funds(
            app,
            &operator,
            &ExecuteMsg::SwapNativeToAsset {
                asset,
                min_out: Uint128::new(51),
            },
            coins(100, DENOM),
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("below the requested"));
}

#[test]
fn only_the_converter_can_pull_from_the_pool() {
    let (mut app, tc) = TestContracts::init();
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let manager = app.api().addr_make("manager");
    let asset = tc.lst_asset();

    tc.lst.mint(app, &owner, &tc.pool.addr, Uint128::new(10));

    let err = tc
        .pool
        .execute(
            app,
            &manager,
            &lrp_deposit_pool::msg::ExecuteMsg::TransferToConverter {
                asset,
                amount: Uint128::new(10),
            },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Unauthorized"));
}
