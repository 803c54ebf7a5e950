multiversx_sc::imports!();

use common_errors::{ERROR_EXIT_MARKET_BALANCE_OWED, ERROR_TOO_MANY_MARKETS};

use crate::{cache::Cache, liquidity, oracle, storage, validation};

/// Market membership of accounts.
///
/// Only entered pools count as collateral and only entered pools may be borrowed from.
#[multiversx_sc::module]
pub trait MembershipModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Adds every pool in `pools` to the caller's collateral set.
    ///
    /// # Arguments
    /// - `pools`: Listed pools to enter. Pools already entered are skipped.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_LISTED`: If any pool is not listed.
    /// - `ERROR_TOO_MANY_MARKETS`: If the account would exceed `max_assets`.
    #[endpoint(enterMarkets)]
    fn enter_markets(&self, pools: MultiValueEncoded<ManagedAddress>) {
        let caller = self.blockchain().get_caller();
        for pool in pools {
            self.require_listed(&pool);
            self.enter_market(&pool, &caller);
        }
    }

    /// Removes `pool` from the caller's collateral set.
    ///
    /// **Process**:
    /// 1. Returns if the caller is not a member.
    /// 2. Requires no owed balance in the pool.
    /// 3. Requires the account to stay solvent without the pool's collateral.
    ///
    /// # Errors
    /// - `ERROR_EXIT_MARKET_BALANCE_OWED`: If the caller still borrows from the pool.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: If the remaining collateral does not cover the debt.
    #[endpoint(exitMarket)]
    fn exit_market(&self, pool: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        if !self.account_markets(&caller).contains(&pool) {
            return;
        }

        let position = self.pool_position(&pool, &caller);
        require!(
            position.owed.into_raw_units() == &BigUint::zero(),
            ERROR_EXIT_MARKET_BALANCE_OWED
        );

        let mut cache = Cache::new(self);
        self.require_no_shortfall(
            &caller,
            &pool,
            position.shares.into_raw_units(),
            &BigUint::zero(),
            &mut cache,
        );

        self.account_markets(&caller).swap_remove(&pool);
        self.market_exited_event(&pool, &caller);
    }

    /// Enters `pool` for `account`, failing when the membership limit is reached.
    fn enter_market(&self, pool: &ManagedAddress, account: &ManagedAddress) {
        let mut markets = self.account_markets(account);
        if markets.contains(pool) {
            return;
        }

        require!(
            markets.len() < self.max_assets().get(),
            ERROR_TOO_MANY_MARKETS
        );

        markets.insert(pool.clone());
        self.market_entered_event(pool, account);
    }

    /// Enters `pool` for `account` when there is room left, used when an account receives shares.
    fn try_enter_market(&self, pool: &ManagedAddress, account: &ManagedAddress) {
        let markets = self.account_markets(account);
        if markets.contains(pool) || markets.len() >= self.max_assets().get() {
            return;
        }

        self.enter_market(pool, account);
    }
}
