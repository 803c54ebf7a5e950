use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_money_market;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a new money market from the pool template, bound to this comptroller.
    ///
    /// The comptroller becomes the owner of the new pool, which is what lets it route the pool
    /// administration endpoints.
    fn create_pool(
        &self,
        underlying: &EgldOrEsdtTokenIdentifier,
        underlying_decimals: usize,
        share_decimals: usize,
        initial_exchange_rate: &BigUint,
        base_rate_per_year: &BigUint,
        multiplier_per_year: &BigUint,
        jump_multiplier_per_year: &BigUint,
        kink: &BigUint,
        reserve_factor: &BigUint,
    ) -> ManagedAddress {
        require!(!self.pool_template().is_empty(), ERROR_TEMPLATE_EMPTY);

        let template = self.pool_template().get();
        require!(!template.is_zero(), ERROR_TEMPLATE_EMPTY);

        self.tx()
            .typed(proxy_money_market::MoneyMarketProxy)
            .init(
                self.blockchain().get_sc_address(),
                underlying,
                underlying_decimals,
                share_decimals,
                initial_exchange_rate,
                base_rate_per_year,
                multiplier_per_year,
                jump_multiplier_per_year,
                kink,
                reserve_factor,
            )
            .from_source(template)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }
}
