multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BorrowSnapshot, PoolParams};

use crate::storage;

/// The ViewModule provides read-only endpoints over the stored pool state.
///
/// None of these accrue interest; they report the ledger as of the last accrual block.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_rates::InterestRates + common_math::SharedMathModule
{
    /// Underlying whole units per whole share as of the last accrual.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: exchange rate (WAD-based).
    #[view(exchangeRateStored)]
    fn exchange_rate_stored(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        self.calc_exchange_rate(
            &self.total_cash().get(),
            &self.total_borrows().get(),
            &self.total_reserves().get(),
            &self.total_supply().get(),
            &params,
        )
    }

    /// Owed balance of `account` as of the last accrual.
    #[view(borrowBalanceStored)]
    fn borrow_balance_stored(
        &self,
        account: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let snapshot = self.get_borrow_snapshot(account, &params);
        self.calc_owed_balance(&snapshot, &self.borrow_index().get())
    }

    /// Shares, owed balance and exchange rate of `account`, in this order.
    #[view(getAccountSnapshot)]
    fn get_account_snapshot(
        &self,
        account: &ManagedAddress,
    ) -> MultiValue3<
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    > {
        let params = self.params().get();
        let shares = self.get_account_shares(account, &params);
        (
            shares,
            self.borrow_balance_stored(account),
            self.exchange_rate_stored(),
        )
            .into()
    }

    #[view(getAccountShares)]
    fn account_shares_view(&self, account: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        self.get_account_shares(account, &params)
    }

    #[view(getAccountBorrowSnapshot)]
    fn account_borrow_snapshot_view(&self, account: &ManagedAddress) -> BorrowSnapshot<Self::Api> {
        let params = self.params().get();
        self.get_borrow_snapshot(account, &params)
    }

    /// Retrieves the current capital utilization of the pool.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: `borrows / (cash + borrows)` (RAY-based).
    #[view(getUtilization)]
    fn utilization_view(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_utilization(&self.total_cash().get(), &self.total_borrows().get())
    }

    /// Retrieves the current per-block borrow rate.
    #[view(borrowRatePerBlock)]
    fn borrow_rate_per_block(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_borrow_rate(
            &self.total_cash().get(),
            &self.total_borrows().get(),
            &self.rate_model().get(),
        )
    }

    /// Retrieves the current per-block supply rate.
    ///
    /// The supply rate is derived from utilization, the borrow rate and the reserve factor.
    #[view(supplyRatePerBlock)]
    fn supply_rate_per_block(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_supply_rate(
            &self.total_cash().get(),
            &self.total_borrows().get(),
            &self.reserve_factor().get(),
            &self.rate_model().get(),
        )
    }

    /// Shares held by `account`, zero when it never held any.
    fn get_account_shares(
        &self,
        account: &ManagedAddress,
        params: &PoolParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.account_shares(account);
        if mapper.is_empty() {
            return self.to_decimal(BigUint::zero(), params.share_decimals);
        }
        mapper.get()
    }

    /// Borrow snapshot of `account`, a zero principal when it has no debt.
    fn get_borrow_snapshot(
        &self,
        account: &ManagedAddress,
        params: &PoolParams<Self::Api>,
    ) -> BorrowSnapshot<Self::Api> {
        let mapper = self.account_borrows(account);
        if mapper.is_empty() {
            return BorrowSnapshot::new(
                self.to_decimal(BigUint::zero(), params.underlying_decimals),
                self.ray_zero(),
            );
        }
        mapper.get()
    }
}
