multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::ERROR_INSUFFICIENT_LIQUIDITY;
use common_structs::PoolParams;

use crate::{cache::Cache, oracle, storage, validation};

/// Position of one account in one pool, valued from the pool storage as of its last accrual.
pub struct PoolPosition<M: ManagedTypeApi> {
    pub params: PoolParams<M>,
    pub shares: ManagedDecimal<M, NumDecimals>,
    pub owed: ManagedDecimal<M, NumDecimals>,
    pub exchange_rate: ManagedDecimal<M, NumDecimals>,
}

/// Solvency engine of the comptroller.
///
/// **Scope**: Values every pool an account entered in USD (WAD) through the oracle.
///
/// **Goal**: Answer whether an account stays collateralized after a hypothetical redeem or
/// borrow, without ever calling back into the pools.
#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Exchange rate of `pool` as of its last accrual (WAD).
    fn stored_exchange_rate(
        &self,
        pool: &ManagedAddress,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_exchange_rate(
            &self.pool_total_cash(pool.clone()).get(),
            &self.pool_total_borrows(pool.clone()).get(),
            &self.pool_total_reserves(pool.clone()).get(),
            &self.pool_total_supply(pool.clone()).get(),
            params,
        )
    }

    /// Owed balance of `account` in `pool` at the stored borrow index.
    fn stored_owed_balance(
        &self,
        pool: &ManagedAddress,
        account: &ManagedAddress,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let borrows = self.pool_account_borrows(pool.clone(), account);
        if borrows.is_empty() {
            return self.to_decimal(BigUint::zero(), params.underlying_decimals);
        }

        self.calc_owed_balance(&borrows.get(), &self.pool_borrow_index(pool.clone()).get())
    }

    fn pool_position(
        &self,
        pool: &ManagedAddress,
        account: &ManagedAddress,
    ) -> PoolPosition<Self::Api> {
        let params = self.pool_params(pool.clone()).get();

        let shares_mapper = self.pool_account_shares(pool.clone(), account);
        let shares = if shares_mapper.is_empty() {
            self.to_decimal(BigUint::zero(), params.share_decimals)
        } else {
            shares_mapper.get()
        };

        let owed = self.stored_owed_balance(pool, account, &params);
        let exchange_rate = self.stored_exchange_rate(pool, &params);

        PoolPosition {
            params,
            shares,
            owed,
            exchange_rate,
        }
    }

    /// Computes the liquidity of `account` as if it redeemed `redeem_shares` and borrowed
    /// `borrow_amount` in `modified_pool`.
    ///
    /// **Process**:
    /// 1. For every entered pool, values the collateral as `shares * exchange_rate * price * collateral_factor`.
    /// 2. Values the debt of every entered pool as `owed * price`.
    /// 3. In `modified_pool` adds the borrow to the debt and the collateral value of the
    ///    redeemed shares to the debt side.
    /// 4. Compares both sums.
    ///
    /// # Arguments
    /// - `account`: Account being checked.
    /// - `modified_pool`: Pool under test, `None` for a plain liquidity check.
    /// - `redeem_shares`: Raw share units removed from `modified_pool`.
    /// - `borrow_amount`: Raw underlying units borrowed from `modified_pool`.
    /// - `cache`: Market and price memo of the current call.
    ///
    /// # Returns
    /// - `(liquidity, shortfall)` in WAD USD, at most one of them non-zero.
    fn hypothetical_liquidity(
        &self,
        account: &ManagedAddress,
        modified_pool: Option<&ManagedAddress>,
        redeem_shares: &BigUint,
        borrow_amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let mut collateral_value = self.wad_zero();
        let mut borrow_effects = self.wad_zero();

        for pool in self.account_markets(account).iter() {
            let market = cache.get_cached_market(&pool);
            let price = cache.get_cached_price(&pool);
            let position = self.pool_position(&pool, account);

            let share_value = self.collateral_value_of(
                &position.shares,
                &position,
                &price,
                &market.collateral_factor,
            );
            collateral_value += &share_value;

            let mut owed = position.owed.clone();
            if modified_pool == Some(&pool) {
                let redeemed = self.to_decimal(redeem_shares.clone(), position.params.share_decimals);
                borrow_effects += &self.collateral_value_of(
                    &redeemed,
                    &position,
                    &price,
                    &market.collateral_factor,
                );
                owed += &self.to_decimal(borrow_amount.clone(), position.params.underlying_decimals);
            }

            borrow_effects += &self.mul_floor(&owed, &price, WAD_PRECISION);
        }

        if collateral_value > borrow_effects {
            (collateral_value - borrow_effects, self.wad_zero())
        } else {
            (self.wad_zero(), borrow_effects - collateral_value)
        }
    }

    /// Risk-adjusted USD value of `shares` of a pool (WAD).
    fn collateral_value_of(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        position: &PoolPosition<Self::Api>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let underlying = self.shares_to_underlying(shares, &position.exchange_rate, &position.params);
        let value = self.mul_floor(&underlying, price, WAD_PRECISION);
        self.mul_floor(&value, collateral_factor, WAD_PRECISION)
    }

    /// Fails unless `account` stays free of shortfall after the hypothetical action.
    ///
    /// **Security Tip**: Called by every hook that removes collateral or adds debt.
    fn require_no_shortfall(
        &self,
        account: &ManagedAddress,
        modified_pool: &ManagedAddress,
        redeem_shares: &BigUint,
        borrow_amount: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        let (_, shortfall) = self.hypothetical_liquidity(
            account,
            Some(modified_pool),
            redeem_shares,
            borrow_amount,
            cache,
        );
        require!(
            shortfall.into_raw_units() == &BigUint::zero(),
            ERROR_INSUFFICIENT_LIQUIDITY
        );
    }
}
