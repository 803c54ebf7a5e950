multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_INSUFFICIENT_CASH, ERROR_INSUFFICIENT_SHARES, ERROR_INVALID_ADDRESS, ERROR_REPAY_TOO_MUCH,
    ERROR_TRANSFER_TO_SELF, ERROR_ZERO_SHARES,
};
use common_proxies::proxy_comptroller::ComptrollerProxy;

use super::{cache::Cache, storage, utils, view};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + view::ViewModule
{
    /// Brings the pool's borrows, reserves and borrow index up to the current block.
    ///
    /// **Purpose**: Lets anyone (the comptroller during liquidations, keepers, other pools)
    /// refresh the ledger without performing any other action.
    ///
    /// **Security Considerations**: Idempotent within a block; fails if the block nonce went backwards.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();
    }

    /// Supplies the underlying to the pool in exchange for shares.
    ///
    /// **Process**:
    /// 1. Accrues interest and asks the comptroller through `mintAllowed`.
    /// 2. `shares = floor(amount / exchange_rate)`, rejecting a mint worth zero shares.
    /// 3. Credits the shares and adds the payment to the cash.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: minted shares.
    ///
    /// **Security Considerations**: Only the underlying is accepted as payment.
    #[payable]
    #[endpoint(mint)]
    fn mint(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let minter = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .mint_allowed(&minter, amount.into_raw_units())
            .sync_call();

        let shares = self.underlying_to_shares_floor(&amount, &cache.exchange_rate(), &cache.params);
        require!(
            shares.into_raw_units() > &BigUint::zero(),
            ERROR_ZERO_SHARES
        );

        let balance = self.get_account_shares(&minter, &cache.params) + shares.clone();
        self.store_shares(&minter, &balance);

        cache.total_supply += &shares;
        cache.total_cash += &amount;

        self.mint_event(&minter, amount.into_raw_units(), shares.into_raw_units());

        shares
    }

    /// Burns `shares` and pays out their underlying value, truncated.
    #[endpoint(redeem)]
    fn redeem(&self, shares: BigUint) -> EgldOrEsdtTokenPayment<Self::Api> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        self.require_amount_greater_than_zero(&shares);

        let mut cache = Cache::new(self);
        let shares = cache.get_share_value(&shares);
        let amount = self.shares_to_underlying(&shares, &cache.exchange_rate(), &cache.params);

        self.redeem_fresh(&mut cache, shares, amount)
    }

    /// Pays out exactly `amount` of the underlying, burning the shares it is worth rounded up.
    ///
    /// When rounding up asks for one raw share more than the caller holds, the whole balance is
    /// burned instead and its truncated value is paid out, so a mint can be undone by the same amount.
    #[endpoint(redeemUnderlying)]
    fn redeem_underlying(&self, amount: BigUint) -> EgldOrEsdtTokenPayment<Self::Api> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        self.require_amount_greater_than_zero(&amount);

        let redeemer = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let exchange_rate = cache.exchange_rate();
        let amount = cache.get_decimal_value(&amount);
        let shares = self.underlying_to_shares_ceil(&amount, &exchange_rate, &cache.params);

        let balance = self.get_account_shares(&redeemer, &cache.params);
        if shares > balance
            && (shares.clone() - balance.clone()).into_raw_units() <= &BigUint::from(1u64)
        {
            let amount = self.shares_to_underlying(&balance, &exchange_rate, &cache.params);
            return self.redeem_fresh(&mut cache, balance, amount);
        }

        self.redeem_fresh(&mut cache, shares, amount)
    }

    /// Borrows the underlying against the caller's collateral across all entered markets.
    ///
    /// **Process**:
    /// 1. Accrues interest and asks the comptroller through `borrowAllowed`, which enters the
    ///    market, checks the price, the borrow cap and the post-borrow solvency.
    /// 2. Requires the pool to hold enough cash.
    /// 3. Re-normalizes the account's debt against the current index and adds `amount`.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: the transferred underlying.
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) -> EgldOrEsdtTokenPayment<Self::Api> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        self.require_amount_greater_than_zero(&amount);

        let borrower = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = cache.get_decimal_value(&amount);

        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .borrow_allowed(&borrower, amount.into_raw_units())
            .sync_call();

        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        let account_borrows = self.owed_balance(&cache, &borrower) + amount.clone();
        self.store_owed_balance(&cache, &borrower, account_borrows.clone());

        cache.total_borrows += &amount;
        cache.total_cash -= &amount;

        self.borrow_event(
            &borrower,
            amount.into_raw_units(),
            account_borrows.into_raw_units(),
            cache.total_borrows.into_raw_units(),
        );

        self.send_asset(&cache, &amount, &borrower)
    }

    /// Repays the caller's own debt with the attached payment.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: the remaining owed balance.
    ///
    /// **Security Considerations**: Paying more than the owed balance is rejected.
    #[payable]
    #[endpoint(repayBorrow)]
    fn repay_borrow(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let caller = self.blockchain().get_caller();
        self.repay_with_payment(&caller)
    }

    /// Repays the debt of `borrower` with the attached payment.
    #[payable]
    #[endpoint(repayBorrowBehalf)]
    fn repay_borrow_behalf(&self, borrower: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.repay_with_payment(&borrower)
    }

    /// Moves `shares` from the caller to `to`.
    ///
    /// **Security Considerations**: The comptroller rejects the move while transfers are paused
    /// or when the sender would end up in shortfall.
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, shares: BigUint) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let from = self.blockchain().get_caller();
        require!(!to.is_zero(), ERROR_INVALID_ADDRESS);
        require!(from != to, ERROR_TRANSFER_TO_SELF);
        self.require_amount_greater_than_zero(&shares);

        let params = self.params().get();
        let shares = self.to_decimal(shares, params.share_decimals);
        let from_balance = self.get_account_shares(&from, &params);
        require!(from_balance >= shares, ERROR_INSUFFICIENT_SHARES);

        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .transfer_allowed(&from, &to, shares.into_raw_units())
            .sync_call();

        self.move_shares(&from, &to, &shares, &params);
    }

    /// Adds the attached payment to the reserves.
    #[payable]
    #[endpoint(addReserves)]
    fn add_reserves(&self) {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let benefactor = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        cache.total_reserves += &amount;
        cache.total_cash += &amount;

        self.reserves_added_event(
            &benefactor,
            amount.into_raw_units(),
            cache.total_reserves.into_raw_units(),
        );
    }

    /// Exchange rate after accruing interest.
    #[endpoint(exchangeRateCurrent)]
    fn exchange_rate_current(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();
        self.exchange_rate_stored()
    }

    /// Owed balance of `account` after accruing interest.
    #[endpoint(borrowBalanceCurrent)]
    fn borrow_balance_current(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();
        self.borrow_balance_stored(&account)
    }

    /// Underlying value of the shares of `account` after accruing interest.
    #[endpoint(balanceOfUnderlying)]
    fn balance_of_underlying(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let params = self.params().get();
        let shares = self.get_account_shares(&account, &params);
        self.shares_to_underlying(&shares, &self.exchange_rate_stored(), &params)
    }

    /// Total borrows after accruing interest.
    #[endpoint(totalBorrowsCurrent)]
    fn total_borrows_current(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();
        self.total_borrows().get()
    }

    fn redeem_fresh(
        &self,
        cache: &mut Cache<Self>,
        shares: ManagedDecimal<Self::Api, NumDecimals>,
        amount: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        self.require_amount_greater_than_zero(shares.into_raw_units());
        self.require_amount_greater_than_zero(amount.into_raw_units());

        let redeemer = self.blockchain().get_caller();
        let balance = self.get_account_shares(&redeemer, &cache.params);
        require!(balance >= shares, ERROR_INSUFFICIENT_SHARES);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .redeem_allowed(&redeemer, shares.into_raw_units())
            .sync_call();

        self.store_shares(&redeemer, &(balance - shares.clone()));
        cache.total_supply -= &shares;
        cache.total_cash -= &amount;

        self.redeem_event(&redeemer, amount.into_raw_units(), shares.into_raw_units());

        self.send_asset(cache, &amount, &redeemer)
    }

    fn repay_with_payment(&self, borrower: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let _guard = self.lock_mutation();
        self.accrue_and_commit();

        let payer = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.repay_borrow_fresh(&mut cache, &payer, borrower, &amount)
    }

    /// Applies a repayment of `amount` made by `payer` to the debt of `borrower`.
    ///
    /// **Process**:
    /// 1. Rejects amounts above the owed balance.
    /// 2. Asks the comptroller through `repayBorrowAllowed`.
    /// 3. Lowers the account's debt and the total borrows, adds the payment to the cash.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: the remaining owed balance.
    ///
    /// **Security Tip**: `total_borrows` is lowered with saturation, since per-account truncation
    /// can leave the sum of owed balances a few units above it.
    fn repay_borrow_fresh(
        &self,
        cache: &mut Cache<Self>,
        payer: &ManagedAddress,
        borrower: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let owed = self.owed_balance(cache, borrower);
        require!(*amount <= owed, ERROR_REPAY_TOO_MUCH);

        self.tx()
            .to(self.comptroller().get())
            .typed(ComptrollerProxy)
            .repay_borrow_allowed(payer, borrower, amount.into_raw_units())
            .sync_call();

        let account_borrows = owed - amount.clone();
        self.store_owed_balance(cache, borrower, account_borrows.clone());

        cache.total_borrows = self.sub_saturating(&cache.total_borrows, amount);
        cache.total_cash += amount;

        self.repay_borrow_event(
            payer,
            borrower,
            amount.into_raw_units(),
            account_borrows.into_raw_units(),
            cache.total_borrows.into_raw_units(),
        );

        account_borrows
    }

    fn move_shares(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &common_structs::PoolParams<Self::Api>,
    ) {
        let from_balance = self.get_account_shares(from, params);
        let to_balance = self.get_account_shares(to, params);

        self.store_shares(from, &(from_balance - shares.clone()));
        self.store_shares(to, &(to_balance + shares.clone()));

        self.share_transfer_event(from, to, shares.into_raw_units());
    }
}
