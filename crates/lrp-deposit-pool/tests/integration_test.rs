use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{coins, Addr, Uint128};
use cw20::MinterResponse;
use cw_multi_test::{App, Executor};
use lrp_delegate::testing::DelegateContract;
use lrp_deposit_pool::msg::{DistributionResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use lrp_deposit_pool::testing::DepositPoolContract;
use lrp_library::asset::AssetId;
use lrp_library::oracle::PRICE_ONE;
use lrp_library::testing::{
    Cw20TokenContract, NativeStakingContract, OracleContract, RegistryContract,
    StrategyManagerContract, TestingContract,
};
use lrp_unstaking_vault::testing::UnstakingVaultContract;

const DENOM: &str = "untrn";

struct TestContracts {
    registry: RegistryContract,
    oracle: OracleContract,
    strategy_manager: StrategyManagerContract,
    native_staking: NativeStakingContract,
    receipt_token: Cw20TokenContract,
    lst: Cw20TokenContract,
    vault: UnstakingVaultContract,
    pool: DepositPoolContract,
}

impl TestContracts {
    fn init(max_delegates: u32) -> (App, TestContracts) {
        let mut app = App::new(|router, api, storage| {
            let owner = api.addr_make("owner");
            router
                .bank
                .init_balance(storage, &owner, coins(1_000_000_000_000, DENOM))
                .unwrap();
        });
        let env = mock_env();
        let owner = app.api().addr_make("owner");
        let admin = app.api().addr_make("admin");

        let registry = RegistryContract::new(&mut app, &env, None);
        let oracle = OracleContract::new(&mut app, &env, None);
        let strategy_manager = StrategyManagerContract::new(&mut app, &env, None);
        let native_staking = NativeStakingContract::new(&mut app, &env, None);

        // The receipt token starts with the owner as minter; the authority
        // moves to the pool once the pool exists.
        let receipt_token = Cw20TokenContract::new(
            &mut app,
            &env,
            Some(cw20_base::msg::InstantiateMsg {
                name: "Pool Receipt Token".to_string(),
                symbol: "PRT".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: owner.to_string(),
                    cap: None,
                }),
                marketing: None,
            }),
        );
        let lst = Cw20TokenContract::new(&mut app, &env, None);

        // The vault is deployed before the pool; the pool address is wired
        // in afterwards.
        let placeholder = app.api().addr_make("placeholder");
        let vault = UnstakingVaultContract::new(
            &mut app,
            &env,
            Some(lrp_unstaking_vault::msg::InstantiateMsg {
                deposit_pool: placeholder.to_string(),
                registry: registry.addr.to_string(),
                strategy_manager: strategy_manager.addr.to_string(),
            }),
        );

        let pool = DepositPoolContract::new(
            &mut app,
            &env,
            Some(InstantiateMsg {
                registry: registry.addr.to_string(),
                oracle: oracle.addr.to_string(),
                receipt_token: receipt_token.addr.to_string(),
                unstaking_vault: vault.addr.to_string(),
                converter: None,
                denom: DENOM.to_string(),
                min_deposit: Uint128::new(10),
                max_delegates,
                withdrawal_delay_blocks: 100,
            }),
        );

        vault
            .execute(
                &mut app,
                &admin,
                &lrp_unstaking_vault::msg::ExecuteMsg::SetDepositPool {
                    deposit_pool: pool.addr.to_string(),
                },
            )
            .unwrap();
        receipt_token.update_minter(&mut app, &owner, &pool.addr);

        (
            app,
            Self {
                registry,
                oracle,
                strategy_manager,
                native_staking,
                receipt_token,
                lst,
                vault,
                pool,
            },
        )
    }

    fn new_delegate(&self, app: &mut App) -> DelegateContract {
        DelegateContract::new(
            app,
            &mock_env(),
            Some(lrp_delegate::msg::InstantiateMsg {
                deposit_pool: self.pool.addr.to_string(),
                registry: self.registry.addr.to_string(),
                unstaking_vault: self.vault.addr.to_string(),
                strategy_manager: self.strategy_manager.addr.to_string(),
                native_staking: self.native_staking.addr.to_string(),
                denom: DENOM.to_string(),
                stake_unit: Uint128::new(32_000_000),
            }),
        )
    }

    fn lst_asset(&self) -> AssetId {
        AssetId::Cw20(self.lst.addr.clone())
    }

    fn total_deposits(&self, app: &App, asset: &AssetId) -> Uint128 {
        self.pool
            .query(
                app,
                &QueryMsg::TotalDeposits {
                    asset: asset.clone(),
                },
            )
            .unwrap()
    }
}

#[test]
fn cw20_deposit_limit_is_a_hard_cap() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let user = app.api().addr_make("user");
    let asset = tc.lst_asset();

    tc.registry.set_asset(app, &asset, Uint128::new(100), None);
    tc.lst.mint(app, &owner, &user, Uint128::new(200));
    tc.lst
        .increase_allowance(app, &user, &tc.pool.addr, Uint128::new(200));

    // 60 fits under the limit of 100.
    tc.pool
        .execute(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: asset.clone(),
                amount: Uint128::new(60),
                min_receipt_out: Uint128::zero(),
                referral: None,
            },
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(60));

    // 60 + 50 would exceed it.
    let err = tc
        .pool
        .execute(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: asset.clone(),
                amount: Uint128::new(50),
                min_receipt_out: Uint128::zero(),
                referral: None,
            },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("over its limit"));

    // 60 + 40 lands exactly on the limit.
    tc.pool
        .execute(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: asset.clone(),
                amount: Uint128::new(40),
                min_receipt_out: Uint128::zero(),
                referral: None,
            },
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(100));
    assert_eq!(tc.total_deposits(app, &asset), Uint128::new(100));
}

#[test]
fn native_deposit_limit_allows_one_overshoot() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let user = app.api().addr_make("user");

    tc.registry
        .set_asset(app, &AssetId::Native, Uint128::new(100), None);
    app.send_tokens(owner, user.clone(), &coins(200, DENOM))
        .unwrap();

    let deposit = |amount: u128| ExecuteMsg::Deposit {
        asset: AssetId::Native,
        amount: Uint128::new(amount),
        min_receipt_out: Uint128::zero(),
        referral: None,
    };

    tc.pool
        .execute_with_funds(app, &user, &deposit(60), coins(60, DENOM))
        .unwrap();

    // Backing was 60, still strictly below 100: the deposit goes through
    // even though it pushes the total to 110.
    tc.pool
        .execute_with_funds(app, &user, &deposit(50), coins(50, DENOM))
        .unwrap();
    assert_eq!(tc.total_deposits(app, &AssetId::Native), Uint128::new(110));

    // Backing is now at or over the limit, so further deposits fail.
    let err = tc
        .pool
        .execute_with_funds(app, &user, &deposit(40), coins(40, DENOM))
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("over its limit"));
}

#[test]
fn minting_is_linear_in_the_oracle_rate() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let user = app.api().addr_make("user");
    let asset = tc.lst_asset();

    tc.registry.set_asset(app, &asset, Uint128::MAX, None);
    // 1.5 native per lst unit.
    tc.oracle.set_asset_price(
        app,
        &asset,
        PRICE_ONE + Uint128::new(500_000_000_000_000_000),
    );

    tc.lst.mint(app, &owner, &user, Uint128::new(300));
    tc.lst
        .increase_allowance(app, &user, &tc.pool.addr, Uint128::new(300));

    tc.pool
        .execute(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: asset.clone(),
                amount: Uint128::new(100),
                min_receipt_out: Uint128::new(150),
                referral: None,
            },
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(150));

    // Twice the deposit mints twice the receipt tokens.
    tc.pool
        .execute(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset,
                amount: Uint128::new(200),
                min_receipt_out: Uint128::new(300),
                referral: None,
            },
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(450));
}

#[test]
fn delegate_queue_bound_and_recovery() {
    let (mut app, tc) = TestContracts::init(2);
    let app = &mut app;
    let admin = app.api().addr_make("admin");

    let d1 = tc.new_delegate(app);
    let d2 = tc.new_delegate(app);
    let d3 = tc.new_delegate(app);

    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d1.addr.to_string(), d2.addr.to_string()],
            },
        )
        .unwrap();

    // The third member exceeds the bound.
    let err = tc
        .pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d3.addr.to_string()],
            },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("bounded at 2"));

    // Re-adding an existing member is a no-op.
    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d1.addr.to_string()],
            },
        )
        .unwrap();
    let delegates: Vec<Addr> = tc.pool.query(app, &QueryMsg::Delegates {}).unwrap();
    assert_eq!(delegates, vec![d1.addr.clone(), d2.addr.clone()]);

    // Removing an empty delegate frees a slot for the third.
    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::RemoveDelegate {
                delegate: d1.addr.to_string(),
            },
        )
        .unwrap();
    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d3.addr.to_string()],
            },
        )
        .unwrap();

    let delegates: Vec<Addr> = tc.pool.query(app, &QueryMsg::Delegates {}).unwrap();
    assert_eq!(delegates.len(), 2);
    let is_member: bool = tc
        .pool
        .query(
            app,
            &QueryMsg::IsDelegate {
                delegate: d1.addr.to_string(),
            },
        )
        .unwrap();
    assert!(!is_member);
}

#[test]
fn distribution_tracks_internal_transfers() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let admin = app.api().addr_make("admin");
    let manager = app.api().addr_make("manager");
    let user = app.api().addr_make("user");

    let d1 = tc.new_delegate(app);
    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d1.addr.to_string()],
            },
        )
        .unwrap();

    app.send_tokens(owner, user.clone(), &coins(1_000, DENOM))
        .unwrap();
    tc.pool
        .execute_with_funds(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: AssetId::Native,
                amount: Uint128::new(1_000),
                min_receipt_out: Uint128::new(1_000),
                referral: None,
            },
            coins(1_000, DENOM),
        )
        .unwrap();

    let dist: DistributionResponse = tc
        .pool
        .query(
            app,
            &QueryMsg::AssetDistribution {
                asset: AssetId::Native,
            },
        )
        .unwrap();
    assert_eq!(dist.pool, Uint128::new(1_000));
    assert_eq!(dist.delegate_pending, Uint128::zero());
    assert_eq!(dist.total, Uint128::new(1_000));

    // Moving funds to a delegate shifts legs but conserves the total.
    tc.pool
        .execute(
            app,
            &manager,
            &ExecuteMsg::TransferToDelegate {
                delegate_index: 0,
                asset: AssetId::Native,
                amount: Uint128::new(400),
            },
        )
        .unwrap();

    let dist: DistributionResponse = tc
        .pool
        .query(
            app,
            &QueryMsg::AssetDistribution {
                asset: AssetId::Native,
            },
        )
        .unwrap();
    assert_eq!(dist.pool, Uint128::new(600));
    assert_eq!(dist.delegate_pending, Uint128::new(400));
    assert_eq!(dist.total, Uint128::new(1_000));
}

#[test]
fn loaded_delegate_cannot_be_removed() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let admin = app.api().addr_make("admin");
    let manager = app.api().addr_make("manager");
    let user = app.api().addr_make("user");

    let d1 = tc.new_delegate(app);
    let d2 = tc.new_delegate(app);
    tc.pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::AddDelegates {
                delegates: vec![d1.addr.to_string(), d2.addr.to_string()],
            },
        )
        .unwrap();

    app.send_tokens(owner, user.clone(), &coins(1_000, DENOM))
        .unwrap();
    tc.pool
        .execute_with_funds(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: AssetId::Native,
                amount: Uint128::new(1_000),
                min_receipt_out: Uint128::zero(),
                referral: None,
            },
            coins(1_000, DENOM),
        )
        .unwrap();
    tc.pool
        .execute(
            app,
            &manager,
            &ExecuteMsg::TransferToDelegate {
                delegate_index: 0,
                asset: AssetId::Native,
                amount: Uint128::new(400),
            },
        )
        .unwrap();

    let err = tc
        .pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::RemoveDelegate {
                delegate: d1.addr.to_string(),
            },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("native value"));

    // A batch containing the loaded delegate rolls back entirely: the
    // clean one stays a member too.
    let err = tc
        .pool
        .execute(
            app,
            &admin,
            &ExecuteMsg::RemoveDelegates {
                delegates: vec![d2.addr.to_string(), d1.addr.to_string()],
            },
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("native value"));

    let delegates: Vec<Addr> = tc.pool.query(app, &QueryMsg::Delegates {}).unwrap();
    assert_eq!(delegates, vec![d1.addr.clone(), d2.addr.clone()]);
}

#[test]
fn withdrawal_request_and_claim() {
    let (mut app, tc) = TestContracts::init(10);
    let app = &mut app;
    let owner = app.api().addr_make("owner");
    let user = app.api().addr_make("user");

    app.send_tokens(owner, user.clone(), &coins(1_000, DENOM))
        .unwrap();
    tc.pool
        .execute_with_funds(
            app,
            &user,
            &ExecuteMsg::Deposit {
                asset: AssetId::Native,
                amount: Uint128::new(1_000),
                min_receipt_out: Uint128::new(1_000),
                referral: None,
            },
            coins(1_000, DENOM),
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(1_000));

    // The pool burns via BurnFrom and needs an allowance.
    tc.receipt_token
        .increase_allowance(app, &user, &tc.pool.addr, Uint128::new(500));
    tc.pool
        .execute(
            app,
            &user,
            &ExecuteMsg::RequestWithdrawal {
                asset: AssetId::Native,
                receipt_amount: Uint128::new(500),
            },
        )
        .unwrap();
    assert_eq!(tc.receipt_token.balance_of(app, &user), Uint128::new(500));

    let requests: Vec<lrp_deposit_pool::msg::WithdrawalRequestResponse> = tc
        .pool
        .query(
            app,
            &QueryMsg::WithdrawalRequests {
                owner: user.to_string(),
            },
        )
        .unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request.expected_amount, Uint128::new(500));

    // Claiming before the delay has elapsed is rejected.
    let err = tc
        .pool
        .execute(app, &user, &ExecuteMsg::ClaimWithdrawal { request_id: 0 })
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("claimable from block"));

    app.update_block(|block| block.height += 100);
    tc.pool
        .execute(app, &user, &ExecuteMsg::ClaimWithdrawal { request_id: 0 })
        .unwrap();

    let balance = app.wrap().query_balance(&user, DENOM).unwrap();
    assert_eq!(balance.amount, Uint128::new(500));
    // Claims are the one path that shrinks the total.
    assert_eq!(tc.total_deposits(app, &AssetId::Native), Uint128::new(500));

    let requests: Vec<lrp_deposit_pool::msg::WithdrawalRequestResponse> = tc
        .pool
        .query(
            app,
            &QueryMsg::WithdrawalRequests {
                owner: user.to_string(),
            },
        )
        .unwrap();
    assert!(requests.is_empty());
}
