#![no_std]
use common_constants::{BLOCKS_PER_YEAR, RAY_PRECISION, WAD_PRECISION};
use common_errors::ERROR_INVALID_RATE_MODEL;
use common_structs::{BorrowSnapshot, InterestRateModel, PoolParams};

multiversx_sc::imports!();

/// The InterestRates module holds the jump rate curve and the share/underlying conversions
/// used by the money market and by the comptroller when it values pool positions.
///
/// **Scope**: Pure functions over pool totals; nothing here reads or writes storage.
///
/// **Goal**: Both contracts derive exchange rates and owed balances with exactly the same
/// arithmetic, so a liquidity check never disagrees with the pool ledger.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Builds a per-block rate model out of yearly parameters.
    ///
    /// **Formula**:
    /// - `rate_per_block = rate_per_year / BLOCKS_PER_YEAR` for the base, multiplier and jump multiplier.
    /// - `kink` is kept as a ratio.
    ///
    /// # Arguments
    /// - `base_rate_per_year`, `multiplier_per_year`, `jump_multiplier_per_year`: RAY-scaled yearly rates.
    /// - `kink`: RAY-scaled utilization where the jump multiplier starts to apply.
    ///
    /// # Returns
    /// - `InterestRateModel<Self::Api>`: per-block RAY parameters.
    ///
    /// **Security Tip**: A kink above 1.0 would make the jump branch unreachable and is rejected.
    fn build_rate_model(
        &self,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) -> InterestRateModel<Self::Api> {
        let kink = self.to_decimal_ray(kink);
        require!(kink <= self.ray(), ERROR_INVALID_RATE_MODEL);

        let blocks_per_year = self.to_decimal(BigUint::from(BLOCKS_PER_YEAR), 0);

        InterestRateModel {
            base_rate: self.div_floor(
                &self.to_decimal_ray(base_rate_per_year),
                &blocks_per_year,
                RAY_PRECISION,
            ),
            multiplier: self.div_floor(
                &self.to_decimal_ray(multiplier_per_year),
                &blocks_per_year,
                RAY_PRECISION,
            ),
            jump_multiplier: self.div_floor(
                &self.to_decimal_ray(jump_multiplier_per_year),
                &blocks_per_year,
                RAY_PRECISION,
            ),
            kink,
        }
    }

    /// Share of the pool's funds that is lent out.
    ///
    /// **Formula**:
    /// - `u = borrows / (cash + borrows)`, zero when both are zero.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: utilization (RAY-based).
    fn get_utilization(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrows: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total = cash.clone() + borrows.clone();
        if total.into_raw_units() == &BigUint::zero() {
            return self.ray_zero();
        }

        self.div_floor(borrows, &total, RAY_PRECISION)
    }

    /// Per-block borrow rate for the given pool state.
    ///
    /// **Formula**:
    /// - If `u < kink`: `base + multiplier * u`.
    /// - Otherwise: `base + multiplier * kink + jump_multiplier * (u - kink)`.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: per-block borrow rate (RAY-based).
    fn calc_borrow_rate(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrows: &ManagedDecimal<Self::Api, NumDecimals>,
        model: &InterestRateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.get_utilization(cash, borrows);
        self.borrow_rate_at(&utilization, model)
    }

    fn borrow_rate_at(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        model: &InterestRateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization < &model.kink {
            return model.base_rate.clone()
                + self.mul_floor(&model.multiplier, utilization, RAY_PRECISION);
        }

        let normal_rate =
            model.base_rate.clone() + self.mul_floor(&model.multiplier, &model.kink, RAY_PRECISION);
        let excess_utilization = utilization.clone() - model.kink.clone();

        normal_rate + self.mul_floor(&model.jump_multiplier, &excess_utilization, RAY_PRECISION)
    }

    /// Per-block rate earned by suppliers.
    ///
    /// **Formula**:
    /// - `supply_rate = borrow_rate * u * (1 - reserve_factor)`.
    ///
    /// # Arguments
    /// - `reserve_factor`: BPS-based share of interest kept as reserves.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: per-block supply rate (RAY-based).
    fn calc_supply_rate(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrows: &ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        model: &InterestRateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.get_utilization(cash, borrows);
        if utilization == self.ray_zero() {
            return self.ray_zero();
        }

        let borrow_rate = self.borrow_rate_at(&utilization, model);
        let one_minus_reserve_factor = self.sub_or_fail(&self.bps(), reserve_factor);
        let rate_to_pool = self.mul_floor(&borrow_rate, &one_minus_reserve_factor, RAY_PRECISION);

        self.mul_floor(&utilization, &rate_to_pool, RAY_PRECISION)
    }

    /// Simple interest factor `rate * blocks`, kept in RAY without any truncation.
    fn calculate_interest_factor(
        &self,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        block_delta: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(
            rate,
            &self.to_decimal(BigUint::from(block_delta), 0),
            RAY_PRECISION,
        )
    }

    /// Underlying whole units backing one whole share.
    ///
    /// **Formula**:
    /// - `supply == 0`: the initial exchange rate.
    /// - Otherwise: `(cash + borrows - reserves) / supply`.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: exchange rate (WAD-based).
    ///
    /// **Security Tip**: Reserves larger than `cash + borrows` abort instead of wrapping.
    fn calc_exchange_rate(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrows: &ManagedDecimal<Self::Api, NumDecimals>,
        reserves: &ManagedDecimal<Self::Api, NumDecimals>,
        supply: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if supply.into_raw_units() == &BigUint::zero() {
            return params.initial_exchange_rate.clone();
        }

        let backing = self.sub_or_fail(&(cash.clone() + borrows.clone()), reserves);
        self.div_floor(&backing, supply, WAD_PRECISION)
    }

    /// Owed balance of a borrow snapshot under the given index.
    ///
    /// **Formula**:
    /// - `principal * borrow_index / interest_index`, truncated to the underlying decimals.
    fn calc_owed_balance(
        &self,
        snapshot: &BorrowSnapshot<Self::Api>,
        borrow_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let decimals = snapshot.principal.scale();
        if !snapshot.has_debt() {
            return self.to_decimal(BigUint::zero(), decimals);
        }

        let grown = self.mul_floor(&snapshot.principal, borrow_index, decimals + RAY_PRECISION);
        self.div_floor(&grown, &snapshot.interest_index, decimals)
    }

    /// Underlying value of `shares`, truncated.
    fn shares_to_underlying(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(shares, exchange_rate, params.underlying_decimals)
    }

    /// Shares minted for `amount`, truncated so the pool never hands out more than it received.
    fn underlying_to_shares_floor(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_floor(amount, exchange_rate, params.share_decimals)
    }

    /// Shares burned to release `amount`, rounded up in favour of the pool.
    fn underlying_to_shares_ceil(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_ceil(amount, exchange_rate, params.share_decimals)
    }
}
