multiversx_sc::imports!();

use common_errors::{
    ERROR_ARRAY_LENGTH_MISMATCH, ERROR_INVALID_ADDRESS, ERROR_INVALID_CLOSE_FACTOR,
    ERROR_INVALID_COLLATERAL_FACTOR, ERROR_INVALID_LIQUIDATION_INCENTIVE,
    ERROR_INVALID_MAX_ASSETS, ERROR_MARKET_ALREADY_LISTED,
};
use common_proxies::proxy_money_market::MoneyMarketProxy;
use common_structs::MarketConfig;

use crate::{cache::Cache, factory, oracle, storage, validation};

const MINT_ACTION: &[u8] = b"Mint";
const BORROW_ACTION: &[u8] = b"Borrow";
const TRANSFER_ACTION: &[u8] = b"Transfer";
const SEIZE_ACTION: &[u8] = b"Seize";

/// Owner configuration of the comptroller: market listing, risk parameters, pause switches and
/// the administration of the pools it owns.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + factory::FactoryModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists an existing pool with a zero collateral factor.
    ///
    /// # Arguments
    /// - `pool`: A money market deployed with this comptroller as its `comptroller`.
    ///
    /// # Errors
    /// - `ERROR_MARKET_ALREADY_LISTED`: If the pool is listed already.
    /// - `ERROR_POOL_COMPTROLLER_MISMATCH`: If the pool answers to another comptroller.
    #[only_owner]
    #[endpoint(supportMarket)]
    fn support_market(&self, pool: ManagedAddress) {
        self.list_market(&pool);
    }

    /// Deploys a pool from the template and lists it.
    ///
    /// **Purpose**: The comptroller owns every pool created here, so its pool administration
    /// endpoints work on them.
    ///
    /// # Arguments
    /// - `underlying`: Asset lent by the pool.
    /// - `underlying_decimals`, `share_decimals`: Decimals of the underlying and of the shares.
    /// - `initial_exchange_rate`: Underlying per share of an empty pool (WAD).
    /// - `base_rate_per_year`, `multiplier_per_year`, `jump_multiplier_per_year`, `kink`: Rate curve (RAY).
    /// - `reserve_factor`: BPS.
    ///
    /// # Returns
    /// - `ManagedAddress`: The new pool.
    #[only_owner]
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        underlying: EgldOrEsdtTokenIdentifier,
        underlying_decimals: usize,
        share_decimals: usize,
        initial_exchange_rate: BigUint,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
    ) -> ManagedAddress {
        let pool = self.create_pool(
            &underlying,
            underlying_decimals,
            share_decimals,
            &initial_exchange_rate,
            &base_rate_per_year,
            &multiplier_per_year,
            &jump_multiplier_per_year,
            &kink,
            &reserve_factor,
        );
        self.list_market(&pool);

        pool
    }

    /// Sets the share of a pool's collateral value that counts towards borrowing power.
    ///
    /// # Arguments
    /// - `pool`: Listed pool.
    /// - `collateral_factor`: BPS, strictly below 100%.
    ///
    /// **Security Tip**: A non-zero factor needs a usable price, otherwise the collateral could
    /// never be valued.
    #[only_owner]
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, pool: ManagedAddress, collateral_factor: BigUint) {
        let mut market = self.require_listed(&pool);

        let new_factor = self.to_decimal_bps(collateral_factor);
        require!(new_factor < self.bps(), ERROR_INVALID_COLLATERAL_FACTOR);

        if new_factor.into_raw_units() > &BigUint::zero() {
            let mut cache = Cache::new(self);
            cache.get_cached_price(&pool);
        }

        let old_factor = market.collateral_factor.clone();
        market.collateral_factor = new_factor;
        self.markets(&pool).set(&market);

        self.new_collateral_factor_event(
            &pool,
            old_factor.into_raw_units(),
            market.collateral_factor.into_raw_units(),
        );
    }

    /// Sets the borrow caps of several pools, a zero cap removes the limit.
    ///
    /// # Arguments
    /// - `pools`: Listed pools.
    /// - `caps`: Raw underlying units, pointwise with `pools`.
    #[only_owner]
    #[endpoint(setMarketBorrowCaps)]
    fn set_market_borrow_caps(
        &self,
        pools: ManagedVec<ManagedAddress>,
        caps: ManagedVec<BigUint>,
    ) {
        require!(pools.len() == caps.len(), ERROR_ARRAY_LENGTH_MISMATCH);

        for (pool, cap) in pools.iter().zip(caps.iter()) {
            let mut market = self.require_listed(&pool);
            market.borrow_cap = (*cap).clone();
            self.markets(&pool).set(&market);

            self.new_borrow_cap_event(&pool, &cap);
        }
    }

    /// Stores the reward speeds of several pools. Speeds are recorded, not distributed.
    #[only_owner]
    #[endpoint(setCompSpeeds)]
    fn set_comp_speeds(
        &self,
        pools: ManagedVec<ManagedAddress>,
        supply_speeds: ManagedVec<BigUint>,
        borrow_speeds: ManagedVec<BigUint>,
    ) {
        require!(
            pools.len() == supply_speeds.len() && pools.len() == borrow_speeds.len(),
            ERROR_ARRAY_LENGTH_MISMATCH
        );

        for index in 0..pools.len() {
            let pool = pools.get(index);
            let supply_speed = (*supply_speeds.get(index)).clone();
            let borrow_speed = (*borrow_speeds.get(index)).clone();

            let mut market = self.require_listed(&pool);
            market.is_comped = supply_speed > 0 || borrow_speed > 0;
            market.supply_speed = supply_speed;
            market.borrow_speed = borrow_speed;
            self.markets(&pool).set(&market);

            self.new_comp_speeds_event(&pool, &market.supply_speed, &market.borrow_speed);
        }
    }

    /// Sets the close factor (BPS, above 0% and at most 100%).
    #[only_owner]
    #[endpoint(setCloseFactor)]
    fn set_close_factor(&self, close_factor: BigUint) {
        let new_factor = self.validate_close_factor(close_factor);
        let old_factor = self.close_factor().get();
        self.close_factor().set(&new_factor);

        self.new_close_factor_event(old_factor.into_raw_units(), new_factor.into_raw_units());
    }

    /// Sets the liquidation incentive (BPS, at least 100%).
    #[only_owner]
    #[endpoint(setLiquidationIncentive)]
    fn set_liquidation_incentive(&self, liquidation_incentive: BigUint) {
        let new_incentive = self.validate_liquidation_incentive(liquidation_incentive);
        let old_incentive = self.liquidation_incentive().get();
        self.liquidation_incentive().set(&new_incentive);

        self.new_liquidation_incentive_event(
            old_incentive.into_raw_units(),
            new_incentive.into_raw_units(),
        );
    }

    #[only_owner]
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        require!(!price_oracle.is_zero(), ERROR_INVALID_ADDRESS);

        let old_oracle = self.price_oracle().get();
        self.price_oracle().set(&price_oracle);

        self.new_price_oracle_event(&old_oracle, &price_oracle);
    }

    #[only_owner]
    #[endpoint(setMaxAssets)]
    fn set_max_assets(&self, max_assets: usize) {
        require!(max_assets > 0, ERROR_INVALID_MAX_ASSETS);
        self.max_assets().set(max_assets);
    }

    /// Seconds after which an oracle price is rejected, zero disables the check.
    #[only_owner]
    #[endpoint(setMaxPriceAge)]
    fn set_max_price_age(&self, max_price_age: u64) {
        self.max_price_age().set(max_price_age);
    }

    #[only_owner]
    #[endpoint(setPoolTemplate)]
    fn set_pool_template(&self, pool_template: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&pool_template),
            ERROR_INVALID_ADDRESS
        );
        self.pool_template().set(&pool_template);
    }

    #[only_owner]
    #[endpoint(setPauseGuardian)]
    fn set_pause_guardian(&self, guardian: ManagedAddress) {
        self.pause_guardian().set(&guardian);
    }

    #[endpoint(setMintPaused)]
    fn set_mint_paused(&self, pool: ManagedAddress, paused: bool) {
        self.require_pause_rights(paused);

        let mut market = self.require_listed(&pool);
        market.mint_paused = paused;
        self.markets(&pool).set(&market);

        self.action_paused_event(&pool, &ManagedBuffer::from(MINT_ACTION), paused);
    }

    #[endpoint(setBorrowPaused)]
    fn set_borrow_paused(&self, pool: ManagedAddress, paused: bool) {
        self.require_pause_rights(paused);

        let mut market = self.require_listed(&pool);
        market.borrow_paused = paused;
        self.markets(&pool).set(&market);

        self.action_paused_event(&pool, &ManagedBuffer::from(BORROW_ACTION), paused);
    }

    #[endpoint(setTransferPaused)]
    fn set_transfer_paused(&self, paused: bool) {
        self.require_pause_rights(paused);
        self.transfer_paused().set(paused);

        self.action_paused_event(
            &ManagedAddress::zero(),
            &ManagedBuffer::from(TRANSFER_ACTION),
            paused,
        );
    }

    #[endpoint(setSeizePaused)]
    fn set_seize_paused(&self, paused: bool) {
        self.require_pause_rights(paused);
        self.seize_paused().set(paused);

        self.action_paused_event(
            &ManagedAddress::zero(),
            &ManagedBuffer::from(SEIZE_ACTION),
            paused,
        );
    }

    /// POOL ADMINISTRATION ///
    ///
    /// Forwards a new reserve factor to a pool owned by this comptroller.
    #[only_owner]
    #[endpoint(setReserveFactor)]
    fn set_pool_reserve_factor(&self, pool: ManagedAddress, reserve_factor: BigUint) {
        self.require_listed(&pool);

        self.tx()
            .to(&pool)
            .typed(MoneyMarketProxy)
            .set_reserve_factor(reserve_factor)
            .sync_call();
    }

    /// Forwards a new rate curve to a pool owned by this comptroller.
    #[only_owner]
    #[endpoint(setInterestRateModel)]
    fn set_pool_interest_rate_model(
        &self,
        pool: ManagedAddress,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
    ) {
        self.require_listed(&pool);

        self.tx()
            .to(&pool)
            .typed(MoneyMarketProxy)
            .set_interest_rate_model(
                base_rate_per_year,
                multiplier_per_year,
                jump_multiplier_per_year,
                kink,
            )
            .sync_call();
    }

    /// Withdraws reserves of a pool owned by this comptroller and forwards them to the owner.
    #[only_owner]
    #[endpoint(reduceReserves)]
    fn reduce_pool_reserves(&self, pool: ManagedAddress, amount: BigUint) {
        self.require_listed(&pool);

        let payment = self
            .tx()
            .to(&pool)
            .typed(MoneyMarketProxy)
            .reduce_reserves(amount)
            .returns(ReturnsResult)
            .sync_call();

        self.tx()
            .to(self.blockchain().get_owner_address())
            .payment(&payment)
            .transfer_if_not_empty();
    }

    fn list_market(&self, pool: &ManagedAddress) {
        let mapper = self.markets(pool);
        require!(
            mapper.is_empty() || !mapper.get().is_listed,
            ERROR_MARKET_ALREADY_LISTED
        );
        self.require_pool_bound_to_self(pool);

        mapper.set(MarketConfig::new_listed(self.bps_zero()));
        self.all_markets().insert(pool.clone());

        self.market_listed_event(pool);
    }

    fn validate_close_factor(&self, close_factor: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        let close_factor = self.to_decimal_bps(close_factor);
        require!(
            close_factor > self.bps_zero() && close_factor <= self.bps(),
            ERROR_INVALID_CLOSE_FACTOR
        );
        close_factor
    }

    fn validate_liquidation_incentive(
        &self,
        liquidation_incentive: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let liquidation_incentive = self.to_decimal_bps(liquidation_incentive);
        require!(
            liquidation_incentive >= self.bps(),
            ERROR_INVALID_LIQUIDATION_INCENTIVE
        );
        liquidation_incentive
    }
}
