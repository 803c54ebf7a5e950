#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Money market

    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] block: u64,
        #[indexed] cash_prior: &BigUint,
        #[indexed] interest_accumulated: &BigUint,
        #[indexed] borrow_index: &BigUint,
        #[indexed] total_borrows: &BigUint,
        #[indexed] total_reserves: &BigUint,
    );

    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] minter: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] redeemer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] account_borrows: &BigUint,
        #[indexed] total_borrows: &BigUint,
    );

    // `payer` differs from `borrower` only for repayments on behalf and liquidations
    #[event("repay_borrow")]
    fn repay_borrow_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] account_borrows: &BigUint,
        #[indexed] total_borrows: &BigUint,
    );

    #[event("liquidate_borrow")]
    fn liquidate_borrow_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] repay_amount: &BigUint,
        #[indexed] collateral_pool: &ManagedAddress,
        #[indexed] seize_shares: &BigUint,
    );

    #[event("share_transfer")]
    fn share_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    #[event("reserves_added")]
    fn reserves_added_event(
        &self,
        #[indexed] benefactor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_reserves: &BigUint,
    );

    #[event("reserves_reduced")]
    fn reserves_reduced_event(
        &self,
        #[indexed] admin: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_reserves: &BigUint,
    );

    #[event("new_reserve_factor")]
    fn new_reserve_factor_event(&self, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    #[event("new_rate_model")]
    fn new_rate_model_event(&self, #[indexed] model: &InterestRateModel<Self::Api>);

    // Comptroller

    #[event("market_listed")]
    fn market_listed_event(&self, #[indexed] pool: &ManagedAddress);

    #[event("market_entered")]
    fn market_entered_event(&self, #[indexed] pool: &ManagedAddress, #[indexed] account: &ManagedAddress);

    #[event("market_exited")]
    fn market_exited_event(&self, #[indexed] pool: &ManagedAddress, #[indexed] account: &ManagedAddress);

    #[event("new_collateral_factor")]
    fn new_collateral_factor_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] old: &BigUint,
        #[indexed] new: &BigUint,
    );

    #[event("new_borrow_cap")]
    fn new_borrow_cap_event(&self, #[indexed] pool: &ManagedAddress, #[indexed] cap: &BigUint);

    #[event("new_comp_speeds")]
    fn new_comp_speeds_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] supply_speed: &BigUint,
        #[indexed] borrow_speed: &BigUint,
    );

    #[event("new_close_factor")]
    fn new_close_factor_event(&self, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    #[event("new_liquidation_incentive")]
    fn new_liquidation_incentive_event(&self, #[indexed] old: &BigUint, #[indexed] new: &BigUint);

    #[event("new_price_oracle")]
    fn new_price_oracle_event(&self, #[indexed] old: &ManagedAddress, #[indexed] new: &ManagedAddress);

    // `pool` is empty for global actions such as transfers and seizes
    #[event("action_paused")]
    fn action_paused_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] action: &ManagedBuffer,
        #[indexed] paused: bool,
    );

    // Price oracle

    #[event("price_posted")]
    fn price_posted_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] previous: &BigUint,
        #[indexed] new: &BigUint,
    );
}
