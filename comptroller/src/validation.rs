multiversx_sc::imports!();

use common_constants::{ACCOUNT_BORROWS_STORAGE_KEY, ACCOUNT_SHARES_STORAGE_KEY};
use common_errors::{
    ERROR_MARKET_NOT_LISTED, ERROR_NOT_OWNER_OR_GUARDIAN, ERROR_ONLY_OWNER_CAN_UNPAUSE,
    ERROR_POOL_COMPTROLLER_MISMATCH,
};
use common_structs::{BorrowSnapshot, MarketConfig};
use multiversx_sc::storage::StorageKey;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Share balance of `account` in `pool`.
    ///
    /// # Arguments
    /// - `pool`: Address of the money market.
    /// - `account`: Holder of the shares.
    ///
    /// # Returns
    /// - `SingleValueMapper`: Shares in `ManagedDecimal` format, tied to the pool address.
    ///   Empty when the account holds no shares.
    fn pool_account_shares(
        &self,
        pool: ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress> {
        let mut key = StorageKey::new(ACCOUNT_SHARES_STORAGE_KEY);
        key.append_item(account);
        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(pool, key)
    }

    /// Borrow snapshot of `account` in `pool`, empty when the account never borrowed or fully repaid.
    fn pool_account_borrows(
        &self,
        pool: ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BorrowSnapshot<Self::Api>, ManagedAddress> {
        let mut key = StorageKey::new(ACCOUNT_BORROWS_STORAGE_KEY);
        key.append_item(account);
        SingleValueMapper::<_, _, ManagedAddress>::new_from_address(pool, key)
    }

    /// Ensures `pool` is listed and returns its configuration.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_LISTED`: If the pool was never listed.
    fn require_listed(&self, pool: &ManagedAddress) -> MarketConfig<Self::Api> {
        let mapper = self.markets(pool);
        require!(!mapper.is_empty(), ERROR_MARKET_NOT_LISTED);

        let market = mapper.get();
        require!(market.is_listed, ERROR_MARKET_NOT_LISTED);

        market
    }

    /// Hooks are only answered for listed pools. Returns the calling pool.
    fn require_caller_is_listed_pool(&self) -> ManagedAddress {
        let pool = self.blockchain().get_caller();
        self.require_listed(&pool);
        pool
    }

    /// Ensures `pool` was deployed against this comptroller.
    ///
    /// # Errors
    /// - `ERROR_POOL_COMPTROLLER_MISMATCH`: If the pool names another comptroller or none at all.
    fn require_pool_bound_to_self(&self, pool: &ManagedAddress) {
        let mapper = self.pool_comptroller(pool.clone());
        require!(!mapper.is_empty(), ERROR_POOL_COMPTROLLER_MISMATCH);
        require!(
            mapper.get() == self.blockchain().get_sc_address(),
            ERROR_POOL_COMPTROLLER_MISMATCH
        );
    }

    /// Pausing is open to the owner and the pause guardian, unpausing only to the owner.
    fn require_pause_rights(&self, paused: bool) {
        let caller = self.blockchain().get_caller();
        let is_owner = caller == self.blockchain().get_owner_address();
        if !paused {
            require!(is_owner, ERROR_ONLY_OWNER_CAN_UNPAUSE);
            return;
        }

        let guardian = self.pause_guardian();
        let is_guardian = !guardian.is_empty() && guardian.get() == caller;
        require!(is_owner || is_guardian, ERROR_NOT_OWNER_OR_GUARDIAN);
    }
}
