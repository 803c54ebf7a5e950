multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_LIQUIDATE_SEIZE_TOO_MUCH, ERROR_NOT_A_POOL};
use common_proxies::{proxy_comptroller::ComptrollerProxy, proxy_money_market::MoneyMarketProxy};
use common_structs::PoolParams;

use super::{cache::Cache, liquidity, storage, utils, view};

/// Liquidation of under-collateralized borrowers.
///
/// **Scope**: The borrowed pool drives the flow; the collateral pool only accrues and moves shares.
///
/// **Goal**: Repay part of a shortfall account's debt and hand the liquidator collateral shares
/// worth the repayment plus the liquidation incentive.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + utils::UtilsModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + view::ViewModule
{
    /// Repays part of `borrower`'s debt in this pool and seizes collateral in `collateral_pool`.
    ///
    /// **Process**:
    /// 1. Accrues this pool and, when different, the collateral pool.
    /// 2. Asks the comptroller through `liquidateBorrowAllowed` (shortfall, close factor, freshness).
    /// 3. Repays the attached payment on behalf of the borrower.
    /// 4. Asks the comptroller how many collateral shares the repayment is worth.
    /// 5. Moves those shares from the borrower to the liquidator, in place when the collateral is
    ///    this pool and through the collateral pool's `seize` otherwise.
    ///
    /// # Arguments
    /// - `borrower`: Account in shortfall.
    /// - `collateral_pool`: Pool whose shares are seized.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: seized collateral shares.
    ///
    /// **Security Considerations**: The collateral pool only moves shares after its own
    /// `seizeAllowed` check, which requires both pools to be listed under the same comptroller.
    #[payable]
    #[endpoint(liquidateBorrow)]
    fn liquidate_borrow(
        &self,
        borrower: ManagedAddress,
        collateral_pool: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let own_address = self.blockchain().get_sc_address();
        let is_same_pool = collateral_pool == own_address;
        if !is_same_pool {
            self.tx()
                .to(&collateral_pool)
                .typed(MoneyMarketProxy)
                .accrue_interest()
                .sync_call();
        }

        let liquidator = self.blockchain().get_caller();
        let comptroller = self.comptroller().get();

        let repay_amount = {
            let mut cache = Cache::new(self);
            let repay_amount = self.get_payment_amount(&cache);

            self.tx()
                .to(&comptroller)
                .typed(ComptrollerProxy)
                .liquidate_borrow_allowed(
                    &collateral_pool,
                    &liquidator,
                    &borrower,
                    repay_amount.into_raw_units(),
                )
                .sync_call();

            self.repay_borrow_fresh(&mut cache, &liquidator, &borrower, &repay_amount);
            repay_amount
        };

        let seize_tokens = self
            .tx()
            .to(&comptroller)
            .typed(ComptrollerProxy)
            .liquidate_calculate_seize_tokens(&own_address, &collateral_pool, repay_amount.into_raw_units())
            .returns(ReturnsResult)
            .sync_call();

        let collateral_params = if is_same_pool {
            let params = self.params().get();
            self.seize_fresh(&own_address, &liquidator, &borrower, &seize_tokens, &params);
            params
        } else {
            self.tx()
                .to(&collateral_pool)
                .typed(MoneyMarketProxy)
                .seize(&liquidator, &borrower, &seize_tokens)
                .sync_call();
            self.pool_params_from_address(collateral_pool.clone()).get()
        };

        self.liquidate_borrow_event(
            &liquidator,
            &borrower,
            repay_amount.into_raw_units(),
            &collateral_pool,
            &seize_tokens,
        );

        self.to_decimal(seize_tokens, collateral_params.share_decimals)
    }

    /// Moves `seize_tokens` shares of `borrower` to `liquidator` on behalf of the borrowed pool.
    ///
    /// **Security Considerations**: Only callable by a contract, and the comptroller's `seizeAllowed`
    /// rejects any caller that is not a listed pool of the same comptroller.
    #[endpoint(seize)]
    fn seize(&self, liquidator: ManagedAddress, borrower: ManagedAddress, seize_tokens: BigUint) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let borrowed_pool = self.blockchain().get_caller();
        require!(
            self.blockchain().is_smart_contract(&borrowed_pool),
            ERROR_NOT_A_POOL
        );

        let params = self.params().get();
        self.seize_fresh(&borrowed_pool, &liquidator, &borrower, &seize_tokens, &params);
    }

    fn seize_fresh(
        &self,
        borrowed_pool: &ManagedAddress,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        seize_tokens: &BigUint,
        params: &PoolParams<Self::Api>,
    ) {
        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .seize_allowed(borrowed_pool, liquidator, borrower, seize_tokens)
            .sync_call();

        let seize_shares = self.to_decimal(seize_tokens.clone(), params.share_decimals);
        let borrower_shares = self.get_account_shares(borrower, params);
        require!(
            borrower_shares >= seize_shares,
            ERROR_LIQUIDATE_SEIZE_TOO_MUCH
        );

        self.move_shares(borrower, liquidator, &seize_shares, params);
    }

    #[storage_mapper_from_address("params")]
    fn pool_params_from_address(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<PoolParams<Self::Api>, ManagedAddress>;
}
