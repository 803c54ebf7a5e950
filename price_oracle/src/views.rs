multiversx_sc::imports!();

use common_errors::{ERROR_ORACLE_PAUSED, ERROR_PRICE_NOT_FOUND};
use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Returns the latest price of the underlying of `pool` (WAD).
    /// Fails while paused or when no price was ever posted.
    #[view(getUnderlyingPrice)]
    fn get_underlying_price(&self, pool: ManagedAddress) -> BigUint {
        self.get_price_feed(pool).price
    }

    /// Returns the latest price of the underlying of `pool` together with its posting time.
    #[view(getPriceFeed)]
    fn get_price_feed(&self, pool: ManagedAddress) -> TimestampedPrice<Self::Api> {
        require!(self.not_paused(), ERROR_ORACLE_PAUSED);

        let mapper = self.prices(&pool);
        require!(!mapper.is_empty(), ERROR_PRICE_NOT_FOUND);

        mapper.get()
    }
}
