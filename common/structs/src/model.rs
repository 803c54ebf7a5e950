#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Immutable description of a money market, fixed at deployment.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolParams<M: ManagedTypeApi> {
    pub underlying: EgldOrEsdtTokenIdentifier<M>,
    pub underlying_decimals: usize,
    pub share_decimals: usize,
    /// Underlying whole units per whole share while the pool has no supply (WAD)
    pub initial_exchange_rate: ManagedDecimal<M, NumDecimals>,
}

/// Jump rate curve, every field is a per-block RAY value except `kink`, which is a RAY ratio.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct InterestRateModel<M: ManagedTypeApi> {
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub multiplier: ManagedDecimal<M, NumDecimals>,
    pub jump_multiplier: ManagedDecimal<M, NumDecimals>,
    pub kink: ManagedDecimal<M, NumDecimals>,
}

/// Borrow balance of an account at the time of its last interaction with the pool.
///
/// The owed balance at any later point is `principal * borrow_index / interest_index`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct BorrowSnapshot<M: ManagedTypeApi> {
    pub principal: ManagedDecimal<M, NumDecimals>,
    pub interest_index: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> BorrowSnapshot<M> {
    pub fn new(
        principal: ManagedDecimal<M, NumDecimals>,
        interest_index: ManagedDecimal<M, NumDecimals>,
    ) -> Self {
        BorrowSnapshot {
            principal,
            interest_index,
        }
    }

    pub fn has_debt(&self) -> bool {
        self.principal.into_raw_units() > &BigUint::zero()
    }
}

/// Risk configuration kept by the comptroller for every listed pool.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub is_listed: bool,
    /// BPS, strictly below 100%
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    /// Raw underlying units, zero means uncapped
    pub borrow_cap: BigUint<M>,
    pub is_comped: bool,
    pub supply_speed: BigUint<M>,
    pub borrow_speed: BigUint<M>,
    pub mint_paused: bool,
    pub borrow_paused: bool,
}

impl<M: ManagedTypeApi> MarketConfig<M> {
    pub fn new_listed(collateral_factor: ManagedDecimal<M, NumDecimals>) -> Self {
        MarketConfig {
            is_listed: true,
            collateral_factor,
            borrow_cap: BigUint::zero(),
            is_comped: false,
            supply_speed: BigUint::zero(),
            borrow_speed: BigUint::zero(),
            mint_paused: false,
            borrow_paused: false,
        }
    }

    pub fn has_borrow_cap(&self) -> bool {
        self.borrow_cap > 0
    }

    pub fn can_mint(&self) -> bool {
        self.is_listed && !self.mint_paused
    }

    pub fn can_borrow(&self) -> bool {
        self.is_listed && !self.borrow_paused
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    /// USD per whole unit of underlying, WAD
    pub price: BigUint<M>,
    pub timestamp: u64,
}
