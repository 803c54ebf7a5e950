#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod factory;
pub mod hooks;
pub mod liquidity;
pub mod membership;
pub mod oracle;
pub mod storage;
pub mod validation;
pub mod views;

use common_constants::DEFAULT_MAX_ASSETS;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Comptroller:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + factory::FactoryModule
    + config::ConfigModule
    + membership::MembershipModule
    + liquidity::LiquidityModule
    + hooks::HooksModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initializes the comptroller with its collaborators and global risk parameters.
    ///
    /// # Arguments
    /// - `pool_template`: Money market deployed as code source by `createMarket`, may be zero
    ///   when pools are only listed through `supportMarket`.
    /// - `price_oracle`: Address of the price oracle.
    /// - `close_factor`: Maximum share of a borrow repaid per liquidation (BPS, within (0%, 100%]).
    /// - `liquidation_incentive`: Collateral bonus of liquidators (BPS, at least 100%).
    #[init]
    fn init(
        &self,
        pool_template: ManagedAddress,
        price_oracle: ManagedAddress,
        close_factor: BigUint,
        liquidation_incentive: BigUint,
    ) {
        require!(!price_oracle.is_zero(), ERROR_INVALID_ADDRESS);

        let close_factor = self.validate_close_factor(close_factor);
        let liquidation_incentive = self.validate_liquidation_incentive(liquidation_incentive);

        self.pool_template().set(&pool_template);
        self.price_oracle().set(&price_oracle);
        self.close_factor().set(&close_factor);
        self.liquidation_incentive().set(&liquidation_incentive);

        // Default membership limit, keeps the liquidity check within gas bounds
        self.max_assets().set(DEFAULT_MAX_ASSETS);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
