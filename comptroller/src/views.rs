multiversx_sc::imports!();

use common_constants::COMPTROLLER_VERSION;
use common_structs::MarketConfig;

use crate::{cache::Cache, liquidity, oracle, storage, validation};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Interface version of this comptroller. Pools and integrators check it instead of
    /// following a chain of implementations.
    #[view(getComptrollerVersion)]
    fn comptroller_version(&self) -> u32 {
        COMPTROLLER_VERSION
    }

    /// Retrieves the pools an account has entered.
    #[view(getAssetsIn)]
    fn get_assets_in(&self, account: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut assets = MultiValueEncoded::new();
        for pool in self.account_markets(&account).iter() {
            assets.push(pool);
        }
        assets
    }

    #[view(checkMembership)]
    fn check_membership(&self, account: ManagedAddress, pool: ManagedAddress) -> bool {
        self.account_markets(&account).contains(&pool)
    }

    /// Risk configuration of a listed pool.
    #[view(getMarket)]
    fn market(&self, pool: ManagedAddress) -> MarketConfig<Self::Api> {
        self.require_listed(&pool)
    }

    /// Current liquidity of an account, valued with the stored pool ledgers.
    ///
    /// # Returns
    /// - `(liquidity, shortfall)` in WAD USD, at most one of them non-zero.
    #[view(getAccountLiquidity)]
    fn get_account_liquidity(
        &self,
        account: ManagedAddress,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let mut cache = Cache::new(self);
        let (liquidity, shortfall) = self.hypothetical_liquidity(
            &account,
            None,
            &BigUint::zero(),
            &BigUint::zero(),
            &mut cache,
        );
        (liquidity, shortfall).into()
    }

    /// Liquidity of an account if it redeemed `redeem_shares` and borrowed `borrow_amount` in `pool`.
    ///
    /// # Arguments
    /// - `account`: Account being checked.
    /// - `pool`: Pool the hypothetical action applies to, only counted when entered.
    /// - `redeem_shares`: Raw share units.
    /// - `borrow_amount`: Raw underlying units.
    #[view(getHypotheticalAccountLiquidity)]
    fn get_hypothetical_account_liquidity(
        &self,
        account: ManagedAddress,
        pool: ManagedAddress,
        redeem_shares: BigUint,
        borrow_amount: BigUint,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let mut cache = Cache::new(self);
        let (liquidity, shortfall) = self.hypothetical_liquidity(
            &account,
            Some(&pool),
            &redeem_shares,
            &borrow_amount,
            &mut cache,
        );
        (liquidity, shortfall).into()
    }
}
