use comptroller::{
    ERROR_LIQUIDATE_SEIZE_TOO_MUCH, ERROR_LIQUIDATOR_IS_BORROWER, ERROR_MARKET_NOT_LISTED,
    ERROR_NOT_IN_SHORTFALL, ERROR_PAUSED, ERROR_TOO_MUCH_REPAY,
};
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::imports::TestAddress;

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

const SUPPLIER: TestAddress = TestAddress::new("supplier");
const BORROWER: TestAddress = TestAddress::new("borrower");
const LIQUIDATOR: TestAddress = TestAddress::new("liquidator");

/// Borrower holds 10000 TT1 shares (200 TT1) and owes 100 TT2, both assets at 1 USD.
fn borrowed_state() -> MoneyMarketTestState {
    let mut state = MoneyMarketTestState::new();
    state.setup_account(SUPPLIER);
    state.setup_account(BORROWER);
    state.setup_account(LIQUIDATOR);

    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();
    state.mint(&SUPPLIER, &tt2_pool, TT2_TOKEN, units(1_000));
    state.mint(&BORROWER, &tt1_pool, TT1_TOKEN, units(200));
    state.borrow(&BORROWER, &tt2_pool, units(100));

    state
}

/// Collateral price halves: 200 * 0.5 * 0.6 = 60 USD against 100 USD of debt.
fn shortfall_state() -> MoneyMarketTestState {
    let mut state = borrowed_state();
    let tt1_pool = state.tt1_pool.clone();
    state.set_price(&tt1_pool, price_cents(50));

    let (liquidity, shortfall) = state.account_liquidity(&BORROWER);
    assert_eq!(liquidity, BigUint::zero());
    assert_eq!(shortfall, price(40));

    state
}

#[test]
fn liquidate_seizes_collateral_with_incentive() {
    let mut state = shortfall_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    // 50 * 1 * 1.08 / (0.5 * 0.02)
    let expected_seize = shares(5_400);
    assert_eq!(
        state.seize_tokens(&tt2_pool, &tt1_pool, units(50)),
        expected_seize
    );

    let seized = state.liquidate(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(50),
        &BORROWER,
        &tt1_pool,
    );

    assert_eq!(seized.into_raw_units(), &expected_seize);
    assert_eq!(state.account_shares(&tt1_pool, &LIQUIDATOR), shares(5_400));
    assert_eq!(state.account_shares(&tt1_pool, &BORROWER), shares(4_600));
    assert_eq!(state.total_supply(&tt1_pool), shares(10_000));
    assert_eq!(state.borrow_balance(&tt2_pool, &BORROWER), units(50));
    assert_eq!(state.total_borrows(&tt2_pool), units(50));
    assert!(state.check_membership(&LIQUIDATOR, &tt1_pool));

    state
        .world
        .check_account(LIQUIDATOR)
        .esdt_balance(TT2_TOKEN, units(INITIAL_BALANCE - 50));
}

#[test]
fn liquidate_above_close_factor_fails() {
    let mut state = shortfall_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(51),
        &BORROWER,
        &tt1_pool,
        ERROR_TOO_MUCH_REPAY,
    );
}

#[test]
fn liquidate_seizing_more_than_collateral_reverts() {
    let mut state = borrowed_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    // 50 * 1.08 / (0.01 * 0.02) = 270000 shares against the 10000 the borrower holds
    state.set_price(&tt1_pool, price_cents(1));
    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(50),
        &BORROWER,
        &tt1_pool,
        ERROR_LIQUIDATE_SEIZE_TOO_MUCH,
    );

    // The repayment is rolled back with the failed seize
    assert_eq!(state.borrow_balance(&tt2_pool, &BORROWER), units(100));
    assert_eq!(state.total_borrows(&tt2_pool), units(100));
    assert_eq!(state.account_shares(&tt1_pool, &BORROWER), shares(10_000));
    assert_eq!(state.account_shares(&tt1_pool, &LIQUIDATOR), BigUint::zero());
    state
        .world
        .check_account(LIQUIDATOR)
        .esdt_balance(TT2_TOKEN, units(INITIAL_BALANCE));
}

#[test]
fn liquidate_healthy_account_fails() {
    let mut state = borrowed_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &tt1_pool,
        ERROR_NOT_IN_SHORTFALL,
    );
}

#[test]
fn liquidate_self_fails() {
    let mut state = shortfall_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    state.liquidate_error(
        &BORROWER,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &tt1_pool,
        ERROR_LIQUIDATOR_IS_BORROWER,
    );
}

#[test]
fn liquidate_with_unlisted_collateral_fails() {
    let mut state = shortfall_state();
    let tt2_pool = state.tt2_pool.clone();
    let comptroller = state.comptroller.clone();
    let unlisted = deploy_pool(&mut state.world, &comptroller, TT3_TOKEN);

    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &unlisted,
        ERROR_MARKET_NOT_LISTED,
    );
}

#[test]
fn liquidate_while_seize_paused_fails() {
    let mut state = shortfall_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    state.set_seize_paused(&OWNER_ADDRESS, true);
    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &tt1_pool,
        ERROR_PAUSED,
    );

    state.set_seize_paused(&OWNER_ADDRESS, false);
    state.liquidate(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &tt1_pool,
    );
}

#[test]
fn liquidate_seizing_borrowed_pool_shares() {
    let mut state = MoneyMarketTestState::new();
    state.setup_account(BORROWER);
    state.setup_account(LIQUIDATOR);
    let tt2_pool = state.tt2_pool.clone();

    // 1000 TT2 of collateral (50000 shares) backing a 600 TT2 borrow in the same pool
    state.mint(&BORROWER, &tt2_pool, TT2_TOKEN, units(1_000));
    state.borrow(&BORROWER, &tt2_pool, units(600));

    // Dropping the collateral factor puts the account in shortfall
    state.set_collateral_factor(&tt2_pool, 5_000);
    let (_, shortfall) = state.account_liquidity(&BORROWER);
    assert_eq!(shortfall, price(100));

    // 100 * 1.08 / 0.02
    let seized = state.liquidate(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(100),
        &BORROWER,
        &tt2_pool,
    );

    assert_eq!(seized.into_raw_units(), &shares(5_400));
    assert_eq!(state.account_shares(&tt2_pool, &LIQUIDATOR), shares(5_400));
    assert_eq!(state.account_shares(&tt2_pool, &BORROWER), shares(44_600));
    assert_eq!(state.borrow_balance(&tt2_pool, &BORROWER), units(500));
}

#[test]
fn liquidation_is_blocked_once_debt_is_covered_again() {
    let mut state = shortfall_state();
    let tt1_pool = state.tt1_pool.clone();
    let tt2_pool = state.tt2_pool.clone();

    state.set_price(&tt1_pool, price(1));
    state.liquidate_error(
        &LIQUIDATOR,
        &tt2_pool,
        TT2_TOKEN,
        units(10),
        &BORROWER,
        &tt1_pool,
        ERROR_NOT_IN_SHORTFALL,
    );
}
