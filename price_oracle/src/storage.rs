multiversx_sc::imports!();

use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Latest price posted for the underlying of `pool`.
    ///
    /// The comptroller reads this key directly from the oracle's storage.
    #[storage_mapper("prices")]
    fn prices(&self, pool: &ManagedAddress) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
