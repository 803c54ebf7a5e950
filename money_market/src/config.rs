multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_CASH, ERROR_INSUFFICIENT_RESERVES, ERROR_INVALID_RESERVE_FACTOR,
};

use super::{cache::Cache, storage, utils, view};

/// Owner-gated pool parameters. A pool deployed by the comptroller's factory is owned by the
/// comptroller, which exposes these as its own pool administration endpoints.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + view::ViewModule
{
    /// Sets the share of future interest kept as reserves (BPS, at most 100%).
    ///
    /// Interest accrued up to this block still uses the previous factor.
    #[only_owner]
    #[endpoint(setReserveFactor)]
    fn set_reserve_factor(&self, reserve_factor: BigUint) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let new_factor = self.to_decimal_bps(reserve_factor);
        require!(new_factor <= self.bps(), ERROR_INVALID_RESERVE_FACTOR);

        let old_factor = self.reserve_factor().get();
        self.reserve_factor().set(&new_factor);

        self.new_reserve_factor_event(old_factor.into_raw_units(), new_factor.into_raw_units());
    }

    /// Replaces the jump rate curve. Inputs are yearly RAY rates, see `build_rate_model`.
    #[only_owner]
    #[endpoint(setInterestRateModel)]
    fn set_interest_rate_model(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let model = self.build_rate_model(
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        );
        self.rate_model().set(&model);

        self.new_rate_model_event(&model);
    }

    /// Withdraws `amount` of reserves to the owner.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: the transferred underlying.
    #[only_owner]
    #[endpoint(reduceReserves)]
    fn reduce_reserves(&self, amount: BigUint) -> EgldOrEsdtTokenPayment<Self::Api> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        self.require_amount_greater_than_zero(&amount);

        let admin = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = cache.get_decimal_value(&amount);

        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);
        require!(
            cache.total_reserves >= amount,
            ERROR_INSUFFICIENT_RESERVES
        );

        cache.total_reserves -= &amount;
        cache.total_cash -= &amount;

        self.reserves_reduced_event(
            &admin,
            amount.into_raw_units(),
            cache.total_reserves.into_raw_units(),
        );

        self.send_asset(&cache, &amount, &admin)
    }
}
