multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_BORROW_CAP_EXCEEDED, ERROR_LIQUIDATOR_IS_BORROWER, ERROR_MARKET_NOT_FRESH,
    ERROR_NOT_IN_SHORTFALL, ERROR_PAUSED, ERROR_TOO_MUCH_REPAY,
};

use crate::{cache::Cache, liquidity, membership, oracle, storage, validation};

/// Policy hooks called synchronously by the pools before every state change.
///
/// **Scope**: Every hook takes the calling pool from the call context and requires it to be
/// listed. A hook either returns or aborts the whole transaction, including the pool's call.
///
/// **Goal**: Keep the risk rules in one contract while the pools only keep the ledger.
#[multiversx_sc::module]
pub trait HooksModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + membership::MembershipModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Authorizes a deposit and enters the minter into the pool while it has room for it.
    #[endpoint(mintAllowed)]
    fn mint_allowed(&self, minter: ManagedAddress, _mint_amount: BigUint) {
        let pool = self.blockchain().get_caller();
        let market = self.require_listed(&pool);
        require!(market.can_mint(), ERROR_PAUSED);

        self.try_enter_market(&pool, &minter);
    }

    /// Authorizes burning `redeem_shares` of `redeemer`.
    ///
    /// Shares of a pool the redeemer never entered back no debt and are always redeemable.
    #[endpoint(redeemAllowed)]
    fn redeem_allowed(&self, redeemer: ManagedAddress, redeem_shares: BigUint) {
        let pool = self.require_caller_is_listed_pool();
        self.redeem_allowed_internal(&pool, &redeemer, &redeem_shares);
    }

    /// Authorizes a new borrow of `borrow_amount` by `borrower`.
    ///
    /// **Process**:
    /// 1. Requires borrowing to be unpaused for the pool.
    /// 2. Enters the borrower into the pool.
    /// 3. Requires a usable oracle price for the underlying.
    /// 4. Requires `total_borrows + borrow_amount` to stay within the borrow cap, if any.
    /// 5. Requires the borrower to stay solvent with the new debt.
    ///
    /// # Errors
    /// - `ERROR_PAUSED`, `ERROR_TOO_MANY_MARKETS`, `ERROR_BORROW_CAP_EXCEEDED`.
    /// - `ERROR_PRICE_UNAVAILABLE`, `ERROR_PRICE_FEED_STALE`, `ERROR_ORACLE_PAUSED`.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`.
    #[endpoint(borrowAllowed)]
    fn borrow_allowed(&self, borrower: ManagedAddress, borrow_amount: BigUint) {
        let pool = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let market = cache.get_cached_market(&pool);
        require!(market.can_borrow(), ERROR_PAUSED);

        self.enter_market(&pool, &borrower);
        cache.get_cached_price(&pool);

        if market.has_borrow_cap() {
            let total_borrows = self.pool_total_borrows(pool.clone()).get();
            let next_total_borrows = total_borrows.into_raw_units() + &borrow_amount;
            require!(
                next_total_borrows <= market.borrow_cap,
                ERROR_BORROW_CAP_EXCEEDED
            );
        }

        self.require_no_shortfall(
            &borrower,
            &pool,
            &BigUint::zero(),
            &borrow_amount,
            &mut cache,
        );
    }

    #[endpoint(repayBorrowAllowed)]
    fn repay_borrow_allowed(
        &self,
        _payer: ManagedAddress,
        _borrower: ManagedAddress,
        _repay_amount: BigUint,
    ) {
        self.require_caller_is_listed_pool();
    }

    /// Authorizes the calling pool to liquidate `borrower` for `repay_amount`.
    ///
    /// **Process**:
    /// 1. Requires the collateral pool to be listed and accrued in the current block.
    /// 2. Rejects self liquidation.
    /// 3. Requires the borrower to be in shortfall.
    /// 4. Requires `repay_amount <= close_factor * owed` in the calling pool.
    ///
    /// **Security Tip**: The calling pool accrues itself and the collateral pool before this
    /// hook, so both ledgers read here are current.
    #[endpoint(liquidateBorrowAllowed)]
    fn liquidate_borrow_allowed(
        &self,
        collateral_pool: ManagedAddress,
        liquidator: ManagedAddress,
        borrower: ManagedAddress,
        repay_amount: BigUint,
    ) {
        let borrowed_pool = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        cache.get_cached_market(&borrowed_pool);
        cache.get_cached_market(&collateral_pool);

        require!(liquidator != borrower, ERROR_LIQUIDATOR_IS_BORROWER);

        let current_block = self.blockchain().get_block_nonce();
        require!(
            self.pool_accrual_block(collateral_pool.clone()).get() == current_block,
            ERROR_MARKET_NOT_FRESH
        );

        let (_, shortfall) = self.hypothetical_liquidity(
            &borrower,
            None,
            &BigUint::zero(),
            &BigUint::zero(),
            &mut cache,
        );
        require!(
            shortfall.into_raw_units() > &BigUint::zero(),
            ERROR_NOT_IN_SHORTFALL
        );

        let params = self.pool_params(borrowed_pool.clone()).get();
        let owed = self.stored_owed_balance(&borrowed_pool, &borrower, &params);
        let max_close = self.mul_floor(
            &owed,
            &self.close_factor().get(),
            params.underlying_decimals,
        );
        require!(
            &repay_amount <= max_close.into_raw_units(),
            ERROR_TOO_MUCH_REPAY
        );
    }

    /// Authorizes the calling collateral pool to move `_seize_tokens` shares of `borrower`
    /// to `liquidator` on behalf of `borrowed_pool`.
    ///
    /// The liquidator enters the collateral pool when it has room for it.
    #[endpoint(seizeAllowed)]
    fn seize_allowed(
        &self,
        borrowed_pool: ManagedAddress,
        liquidator: ManagedAddress,
        _borrower: ManagedAddress,
        _seize_tokens: BigUint,
    ) {
        require!(!self.seize_paused().get(), ERROR_PAUSED);

        let collateral_pool = self.require_caller_is_listed_pool();
        self.require_listed(&borrowed_pool);
        self.require_pool_bound_to_self(&collateral_pool);
        self.require_pool_bound_to_self(&borrowed_pool);

        self.try_enter_market(&collateral_pool, &liquidator);
    }

    /// Authorizes moving `shares` from `from` to `to`, with the same solvency rule as a redeem.
    #[endpoint(transferAllowed)]
    fn transfer_allowed(&self, from: ManagedAddress, to: ManagedAddress, shares: BigUint) {
        require!(!self.transfer_paused().get(), ERROR_PAUSED);

        let pool = self.require_caller_is_listed_pool();
        self.redeem_allowed_internal(&pool, &from, &shares);
        self.try_enter_market(&pool, &to);
    }

    /// Number of collateral shares worth `repay_amount` of the borrowed underlying plus the
    /// liquidation incentive.
    ///
    /// **Formula**:
    /// - `repay * price_borrowed * incentive / (price_collateral * exchange_rate_collateral)`
    ///
    /// # Arguments
    /// - `borrowed_pool`: Pool being repaid.
    /// - `collateral_pool`: Pool whose shares are seized.
    /// - `repay_amount`: Raw underlying units of the borrowed pool.
    ///
    /// # Returns
    /// - `BigUint`: raw share units of the collateral pool, truncated.
    #[view(liquidateCalculateSeizeTokens)]
    fn liquidate_calculate_seize_tokens(
        &self,
        borrowed_pool: ManagedAddress,
        collateral_pool: ManagedAddress,
        repay_amount: BigUint,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        let price_borrowed = cache.get_cached_price(&borrowed_pool);
        let price_collateral = cache.get_cached_price(&collateral_pool);

        let borrowed_params = self.pool_params(borrowed_pool).get();
        let collateral_params = self.pool_params(collateral_pool.clone()).get();
        let exchange_rate = self.stored_exchange_rate(&collateral_pool, &collateral_params);

        let repay = self.to_decimal(repay_amount, borrowed_params.underlying_decimals);
        let repay_value = self.mul_floor(&repay, &price_borrowed, WAD_PRECISION);
        let seize_value = self.mul_floor(
            &repay_value,
            &self.liquidation_incentive().get(),
            WAD_PRECISION,
        );
        let share_value = self.mul_floor(&price_collateral, &exchange_rate, WAD_PRECISION);

        let seize_tokens = self.div_floor(&seize_value, &share_value, collateral_params.share_decimals);
        seize_tokens.into_raw_units().clone()
    }

    fn redeem_allowed_internal(
        &self,
        pool: &ManagedAddress,
        redeemer: &ManagedAddress,
        redeem_shares: &BigUint,
    ) {
        if !self.account_markets(redeemer).contains(pool) {
            return;
        }

        let mut cache = Cache::new(self);
        self.require_no_shortfall(redeemer, pool, redeem_shares, &BigUint::zero(), &mut cache);
    }
}
