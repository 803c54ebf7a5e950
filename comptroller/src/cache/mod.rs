use common_structs::MarketConfig;

multiversx_sc::imports!();

/// Per-call memo of market configurations and oracle prices.
///
/// A liquidity check walks every pool an account entered and a liquidation prices two pools,
/// so each pool is read from storage at most once per call.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::validation::ValidationModule,
{
    sc_ref: &'a C,

    pub prices_cache:
        ManagedMapEncoded<C::Api, ManagedAddress<C::Api>, ManagedDecimal<C::Api, NumDecimals>>,
    pub markets: ManagedMapEncoded<C::Api, ManagedAddress<C::Api>, MarketConfig<C::Api>>,
    pub price_oracle: ManagedAddress<C::Api>,
    pub max_price_age: u64,
    pub current_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::validation::ValidationModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            markets: ManagedMapEncoded::new(),
            price_oracle: sc_ref.price_oracle().get(),
            max_price_age: sc_ref.max_price_age().get(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Retrieves or caches the configuration of a listed pool.
    ///
    /// # Arguments
    /// - `pool`: Address of the money market.
    ///
    /// # Returns
    /// - `MarketConfig` of the pool, the call fails when the pool is not listed.
    pub fn get_cached_market(&mut self, pool: &ManagedAddress<C::Api>) -> MarketConfig<C::Api> {
        if self.markets.contains(pool) {
            return self.markets.get(pool);
        }

        let market = self.sc_ref.require_listed(pool);
        self.markets.put(pool, &market);

        market
    }

    /// Retrieves or caches the USD price of one whole unit of the pool's underlying (WAD).
    pub fn get_cached_price(
        &mut self,
        pool: &ManagedAddress<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        if self.prices_cache.contains(pool) {
            return self.prices_cache.get(pool);
        }

        let price = self.sc_ref.read_oracle_price(
            pool,
            &self.price_oracle,
            self.max_price_age,
            self.current_timestamp,
        );
        self.prices_cache.put(pool, &price);

        price
    }
}
