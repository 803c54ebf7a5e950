use common_structs::{MarketConfig, PoolParams};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Risk configuration of every pool ever listed.
    /// Empty for pools that were never listed.
    #[storage_mapper("markets")]
    fn markets(&self, pool: &ManagedAddress) -> SingleValueMapper<MarketConfig<Self::Api>>;

    /// Get the set of listed pools
    #[view(getAllMarkets)]
    #[storage_mapper("all_markets")]
    fn all_markets(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Pools an account has entered, i.e. the pools counted by its liquidity check.
    #[storage_mapper("account_markets")]
    fn account_markets(&self, account: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    /// Maximum share of a borrow that a single liquidation may repay (BPS).
    #[view(getCloseFactor)]
    #[storage_mapper("close_factor")]
    fn close_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Collateral value handed to a liquidator per unit of repaid value (BPS, at least 100%).
    #[view(getLiquidationIncentive)]
    #[storage_mapper("liquidation_incentive")]
    fn liquidation_incentive(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the money market template address
    /// Source code of every pool deployed through `createMarket`.
    #[view(getPoolTemplate)]
    #[storage_mapper("pool_template")]
    fn pool_template(&self) -> SingleValueMapper<ManagedAddress>;

    /// Maximum number of pools a single account may enter.
    #[view(getMaxAssets)]
    #[storage_mapper("max_assets")]
    fn max_assets(&self) -> SingleValueMapper<usize>;

    /// Maximum age of an oracle price in seconds, zero disables the check.
    #[view(getMaxPriceAge)]
    #[storage_mapper("max_price_age")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;

    /// Account allowed to pause actions next to the owner. Only the owner unpauses.
    #[view(getPauseGuardian)]
    #[storage_mapper("pause_guardian")]
    fn pause_guardian(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isTransferPaused)]
    #[storage_mapper("transfer_paused")]
    fn transfer_paused(&self) -> SingleValueMapper<bool>;

    #[view(isSeizePaused)]
    #[storage_mapper("seize_paused")]
    fn seize_paused(&self) -> SingleValueMapper<bool>;

    /// POOL STORAGE ///
    ///
    /// Comptroller a pool was deployed against.
    #[storage_mapper_from_address("comptroller")]
    fn pool_comptroller(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    /// Underlying asset, decimals and initial exchange rate of a pool.
    #[storage_mapper_from_address("params")]
    fn pool_params(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<PoolParams<Self::Api>, ManagedAddress>;

    /// Outstanding pool shares, in share decimals.
    #[storage_mapper_from_address("total_supply")]
    fn pool_total_supply(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Total owed by all borrowers as of the last accrual, in underlying decimals.
    #[storage_mapper_from_address("total_borrows")]
    fn pool_total_borrows(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("total_reserves")]
    fn pool_total_reserves(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("total_cash")]
    fn pool_total_cash(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Retrieves the borrow index of a pool as of its last accrual (RAY).
    #[storage_mapper_from_address("borrow_index")]
    fn pool_borrow_index(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    /// Block nonce of the last interest accrual of a pool.
    #[storage_mapper_from_address("accrual_block")]
    fn pool_accrual_block(&self, pool: ManagedAddress) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn price_oracle_paused_state(
        &self,
        price_oracle_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
