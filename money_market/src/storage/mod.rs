multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BorrowSnapshot, InterestRateModel, PoolParams};

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the core state variables of the money market.
///
/// The comptroller reads several of these keys directly from this contract's storage,
/// so the keys are part of the pool's external interface.
#[multiversx_sc::module]
pub trait Storage {
    /// Risk controller authorizing every action of this pool.
    #[view(getComptroller)]
    #[storage_mapper("comptroller")]
    fn comptroller(&self) -> SingleValueMapper<ManagedAddress>;

    /// Underlying asset, its decimals, the share decimals and the initial exchange rate.
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<PoolParams<Self::Api>>;

    /// Per-block jump rate curve.
    #[view(getRateModel)]
    #[storage_mapper("rate_model")]
    fn rate_model(&self) -> SingleValueMapper<InterestRateModel<Self::Api>>;

    /// Share of accrued interest kept as reserves (BPS).
    #[view(getReserveFactor)]
    #[storage_mapper("reserve_factor")]
    fn reserve_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Outstanding pool shares, in share decimals.
    #[view(getTotalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Outstanding borrows including accrued interest, in underlying decimals.
    #[view(getTotalBorrows)]
    #[storage_mapper("total_borrows")]
    fn total_borrows(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Reserves owned by the protocol, in underlying decimals.
    #[view(getTotalReserves)]
    #[storage_mapper("total_reserves")]
    fn total_reserves(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Underlying held by the pool as accounted by the ledger.
    ///
    /// Direct transfers that bypass the endpoints are not counted.
    #[view(getCash)]
    #[storage_mapper("total_cash")]
    fn total_cash(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Cumulative borrow index (RAY), starts at 1.0 and never decreases.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Block nonce of the last interest accrual.
    #[view(getAccrualBlockNumber)]
    #[storage_mapper("accrual_block")]
    fn accrual_block(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("account_shares")]
    fn account_shares(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("account_borrows")]
    fn account_borrows(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BorrowSnapshot<Self::Api>>;

    #[storage_mapper("mutation_in_progress")]
    fn mutation_in_progress(&self) -> SingleValueMapper<bool>;
}
