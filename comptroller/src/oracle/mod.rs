multiversx_sc::imports!();

use common_constants::PRICES_STORAGE_KEY;
use common_errors::{
    ERROR_ORACLE_PAUSED, ERROR_PRICE_FEED_STALE, ERROR_PRICE_ORACLE_NOT_SET,
    ERROR_PRICE_UNAVAILABLE,
};
use common_structs::TimestampedPrice;
use multiversx_sc::storage::StorageKey;

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + validation::ValidationModule + common_math::SharedMathModule
{
    /// Price feed of `pool` as stored by the oracle contract.
    fn oracle_price_feed(
        &self,
        price_oracle: ManagedAddress,
        pool: &ManagedAddress,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress> {
        let mut key = StorageKey::new(PRICES_STORAGE_KEY);
        key.append_item(pool);
        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(price_oracle, key)
    }

    /// Reads the USD price of one whole unit of `pool`'s underlying straight from the oracle storage.
    ///
    /// **Purpose**: Every valuation of the comptroller goes through this single read, so an
    /// unusable price blocks the action instead of being valued at zero.
    ///
    /// **Process**:
    /// 1. Requires an oracle address and an unpaused oracle.
    /// 2. Requires a posted, non-zero price.
    /// 3. When `max_price_age` is set, requires the price to be at most that many seconds old.
    ///
    /// # Arguments
    /// - `pool`: Pool whose underlying is priced.
    /// - `price_oracle`: Oracle contract address.
    /// - `max_price_age`: Staleness limit in seconds, zero disables it.
    /// - `now`: Current block timestamp.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: price in WAD.
    fn read_oracle_price(
        &self,
        pool: &ManagedAddress,
        price_oracle: &ManagedAddress,
        max_price_age: u64,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(!price_oracle.is_zero(), ERROR_PRICE_ORACLE_NOT_SET);
        require!(
            !self.price_oracle_paused_state(price_oracle.clone()).get(),
            ERROR_ORACLE_PAUSED
        );

        let feed_mapper = self.oracle_price_feed(price_oracle.clone(), pool);
        require!(!feed_mapper.is_empty(), ERROR_PRICE_UNAVAILABLE);

        let feed = feed_mapper.get();
        require!(feed.price > BigUint::zero(), ERROR_PRICE_UNAVAILABLE);

        if max_price_age > 0 {
            require!(
                now.saturating_sub(feed.timestamp) <= max_price_age,
                ERROR_PRICE_FEED_STALE
            );
        }

        self.to_decimal_wad(feed.price)
    }
}
