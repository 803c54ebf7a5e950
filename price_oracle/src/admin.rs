multiversx_sc::imports!();

use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + common_events::EventsModule
{
    #[init]
    fn init(&self) {
        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    /// Posts the USD price (WAD) of one whole unit of the underlying of `pool`.
    #[only_owner]
    #[endpoint(setUnderlyingPrice)]
    fn set_underlying_price(&self, pool: ManagedAddress, price: BigUint) {
        self.require_not_paused();

        self.post_price(&pool, price);
    }

    /// Posts several prices in a single transaction.
    #[only_owner]
    #[endpoint(setUnderlyingPrices)]
    fn set_underlying_prices(&self, prices: MultiValueEncoded<MultiValue2<ManagedAddress, BigUint>>) {
        self.require_not_paused();

        for (pool, price) in prices.into_iter().map(|entry| entry.into_tuple()) {
            self.post_price(&pool, price);
        }
    }

    fn post_price(&self, pool: &ManagedAddress, price: BigUint) {
        let mapper = self.prices(pool);
        let previous = if mapper.is_empty() {
            BigUint::zero()
        } else {
            mapper.get().price
        };

        self.price_posted_event(pool, &previous, &price);

        mapper.set(TimestampedPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
        });
    }
}
