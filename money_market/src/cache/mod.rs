use common_structs::{InterestRateModel, PoolParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the pool's state, cached from on-chain storage for efficient access and updates.
///
/// **Scope**: Holds the pool totals, the borrow index and the accrual block for one endpoint call.
///
/// **Goal**: Let an operation read and mutate the ledger in memory and write it back exactly once.
///
/// **Fields**:
/// - `total_cash`, `total_borrows`, `total_reserves` use the underlying decimals.
/// - `total_supply` uses the share decimals.
/// - `borrow_index` uses RAY precision.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// Outstanding shares.
    pub total_supply: ManagedDecimal<C::Api, NumDecimals>,
    /// Outstanding borrows including accrued interest.
    pub total_borrows: ManagedDecimal<C::Api, NumDecimals>,
    /// Protocol owned part of the pool.
    pub total_reserves: ManagedDecimal<C::Api, NumDecimals>,
    /// Underlying held by the pool.
    pub total_cash: ManagedDecimal<C::Api, NumDecimals>,
    pub borrow_index: ManagedDecimal<C::Api, NumDecimals>,
    /// Block nonce of the last accrual.
    pub accrual_block: u64,
    /// Block nonce of the current transaction.
    pub current_block: u64,
    pub params: PoolParams<C::Api>,
    pub rate_model: InterestRateModel<C::Api>,
    /// BPS based.
    pub reserve_factor: ManagedDecimal<C::Api, NumDecimals>,
    /// Zero in underlying decimals.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_rates::InterestRates,
{
    /// Constructs a new Cache by reading the current state from on-chain storage.
    ///
    /// # Arguments
    /// - `sc_ref`: Reference to the contract implementing `Storage` and `InterestRates`.
    ///
    /// # Returns
    /// - `Cache<Self>`: A new instance containing the cached pool state.
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.underlying_decimals),
            total_supply: sc_ref.total_supply().get(),
            total_borrows: sc_ref.total_borrows().get(),
            total_reserves: sc_ref.total_reserves().get(),
            total_cash: sc_ref.total_cash().get(),
            borrow_index: sc_ref.borrow_index().get(),
            accrual_block: sc_ref.accrual_block().get(),
            current_block: sc_ref.blockchain().get_block_nonce(),
            rate_model: sc_ref.rate_model().get(),
            reserve_factor: sc_ref.reserve_factor().get(),
            params,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the mutable ledger fields back to on-chain storage when the Cache is dropped.
    ///
    /// **Fields Updated**: `total_supply`, `total_borrows`, `total_reserves`, `total_cash`,
    /// `borrow_index`, `accrual_block`.
    fn drop(&mut self) {
        self.sc_ref.total_supply().set(&self.total_supply);
        self.sc_ref.total_borrows().set(&self.total_borrows);
        self.sc_ref.total_reserves().set(&self.total_reserves);
        self.sc_ref.total_cash().set(&self.total_cash);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref.accrual_block().set(self.accrual_block);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_rates::InterestRates,
{
    /// Converts a raw underlying amount into a `ManagedDecimal` with the underlying decimals.
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.underlying_decimals)
    }

    /// Converts a raw share amount into a `ManagedDecimal` with the share decimals.
    pub fn get_share_value(&self, value: &BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(value.clone(), self.params.share_decimals)
    }

    /// Checks if the given asset matches the pool's underlying.
    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.underlying == *asset
    }

    /// Underlying whole units per whole share at the cached state (WAD).
    pub fn exchange_rate(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.calc_exchange_rate(
            &self.total_cash,
            &self.total_borrows,
            &self.total_reserves,
            &self.total_supply,
            &self.params,
        )
    }

    /// Per-block borrow rate at the cached state (RAY).
    pub fn borrow_rate(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .calc_borrow_rate(&self.total_cash, &self.total_borrows, &self.rate_model)
    }

    pub fn has_cash(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.total_cash >= *amount
    }
}
