multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{MAX_BORROW_RATE_PER_BLOCK, RAY_PRECISION};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BLOCK_REGRESSION, ERROR_BORROW_RATE_TOO_HIGH,
    ERROR_INVALID_ASSET, ERROR_REENTRANT_CALL,
};
use common_structs::BorrowSnapshot;

use crate::{cache::Cache, guard::MutationGuard, storage, view};

/// The `UtilsModule` trait provides helpers shared by every mutating endpoint of the pool.
///
/// **Scope**: Interest accrual, the reentrancy guard, asset transfers, payment validation and
/// the per-account ledger writes.
///
/// **Goal**: Keep each endpoint a short sequence of guard, accrue, authorize, mutate, transfer.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + view::ViewModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Applies the interest accrued since `cache.accrual_block` to the cached ledger.
    ///
    /// **Process**:
    /// 1. Fails if the current block is before the accrual block and returns early if equal.
    /// 2. Computes the borrow rate from the cached cash and borrows and rejects absurd rates.
    /// 3. `interest_factor = borrow_rate * blocks`.
    /// 4. `total_borrows += interest_factor * total_borrows`.
    /// 5. `total_reserves += interest * reserve_factor`.
    /// 6. `borrow_index += borrow_index * interest_factor`.
    /// 7. Moves the accrual block to the current block and emits `accrue_interest`.
    ///
    /// # Arguments
    /// - `cache`: Mutable reference to the pool state (`Cache<Self>`).
    ///
    /// **Security Tip**: Calling it twice in the same block is a no-op, which is what keeps
    /// repeated accruals idempotent.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        require!(
            cache.current_block >= cache.accrual_block,
            ERROR_BLOCK_REGRESSION
        );

        let delta = cache.current_block - cache.accrual_block;
        if delta == 0 {
            return;
        }

        let borrow_rate = cache.borrow_rate();
        require!(
            borrow_rate <= self.to_decimal_ray(BigUint::from(MAX_BORROW_RATE_PER_BLOCK)),
            ERROR_BORROW_RATE_TOO_HIGH
        );

        let underlying_decimals = cache.params.underlying_decimals;
        let interest_factor = self.calculate_interest_factor(&borrow_rate, delta);
        let interest = self.mul_floor(&interest_factor, &cache.total_borrows, underlying_decimals);
        let new_reserves = self.mul_floor(&interest, &cache.reserve_factor, underlying_decimals);
        let index_growth = self.mul_floor(&cache.borrow_index, &interest_factor, RAY_PRECISION);

        cache.total_borrows += &interest;
        cache.total_reserves += &new_reserves;
        cache.borrow_index += &index_growth;
        cache.accrual_block = cache.current_block;

        self.accrue_interest_event(
            cache.current_block,
            cache.total_cash.into_raw_units(),
            interest.into_raw_units(),
            cache.borrow_index.into_raw_units(),
            cache.total_borrows.into_raw_units(),
            cache.total_reserves.into_raw_units(),
        );
    }

    /// Accrues interest and commits it before anything else reads pool storage.
    ///
    /// The comptroller reads this pool's totals straight from storage during the hooks, so the
    /// accrual has to be written back before the hook call.
    fn accrue_and_commit(&self) {
        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);
    }

    /// Acquires the reentrancy guard.
    ///
    /// # Returns
    /// - `MutationGuard<Self>`: releases the guard when dropped.
    fn lock_mutation(&self) -> MutationGuard<Self> {
        require!(!self.mutation_in_progress().get(), ERROR_REENTRANT_CALL);
        MutationGuard::new(self)
    }

    /// Transfers the underlying to a specified address.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: Payment object representing the transfer.
    ///
    /// **Security Tip**: Uses `transfer_if_not_empty` to avoid empty transfers.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.underlying.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Retrieves and validates the payment of the current call.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: payment amount in the underlying decimals.
    ///
    /// **Security Tip**: Rejects any token other than the underlying and empty payments.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        self.require_amount_greater_than_zero(&amount);

        cache.get_decimal_value(&amount)
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// Owed balance of `account` at the cached borrow index.
    fn owed_balance(
        &self,
        cache: &Cache<Self>,
        account: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let snapshot = self.get_borrow_snapshot(account, &cache.params);
        self.calc_owed_balance(&snapshot, &cache.borrow_index)
    }

    /// Stores a new owed balance for `account`, normalized against the cached borrow index.
    ///
    /// A zero balance removes the record.
    fn store_owed_balance(
        &self,
        cache: &Cache<Self>,
        account: &ManagedAddress,
        owed: ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        if owed == cache.zero {
            self.account_borrows(account).clear();
            return;
        }

        self.account_borrows(account)
            .set(BorrowSnapshot::new(owed, cache.borrow_index.clone()));
    }

    /// Stores the share balance of `account`, a zero balance removes the record.
    fn store_shares(&self, account: &ManagedAddress, shares: &ManagedDecimal<Self::Api, NumDecimals>) {
        if shares.into_raw_units() == &BigUint::zero() {
            self.account_shares(account).clear();
            return;
        }

        self.account_shares(account).set(shares);
    }
}
