#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod guard;
pub mod liquidation;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_errors::{ERROR_INVALID_ADDRESS, ERROR_INVALID_EXCHANGE_RATE, ERROR_INVALID_RESERVE_FACTOR};

#[multiversx_sc::contract]
pub trait MoneyMarket:
    storage::Storage
    + common_events::EventsModule
    + common_rates::InterestRates
    + liquidity::LiquidityModule
    + liquidation::LiquidationModule
    + config::ConfigModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Initializes the money market for a single underlying asset.
    ///
    /// **Purpose**: Sets up the ledger of an empty pool bound to its comptroller.
    ///
    /// **Process**:
    /// 1. Stores the comptroller and the pool parameters.
    /// 2. Builds the per-block rate model out of the yearly parameters.
    /// 3. Starts the borrow index at 1.0 (RAY) and every total at zero.
    /// 4. Records the current block nonce as the accrual block.
    ///
    /// ### Parameters
    /// - `comptroller`: Risk controller authorizing every action of this pool.
    /// - `underlying`: The asset identifier (`EgldOrEsdtTokenIdentifier`) lent by the pool.
    /// - `underlying_decimals`: Decimals of the underlying.
    /// - `share_decimals`: Decimals of the pool shares.
    /// - `initial_exchange_rate`: Underlying whole units per whole share while the pool is empty (WAD).
    /// - `base_rate_per_year`, `multiplier_per_year`, `jump_multiplier_per_year`: Yearly rates (RAY).
    /// - `kink`: Utilization where the jump multiplier starts to apply (RAY).
    /// - `reserve_factor`: Share of interest kept as reserves (BPS).
    ///
    /// **Security Considerations**:
    /// - A zero exchange rate would make every mint divide by zero and is rejected.
    /// - Every ledger value is written so that no read ever decodes empty storage.
    #[init]
    fn init(
        &self,
        comptroller: ManagedAddress,
        underlying: EgldOrEsdtTokenIdentifier,
        underlying_decimals: usize,
        share_decimals: usize,
        initial_exchange_rate: BigUint,
        base_rate_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_multiplier_per_year: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
    ) {
        require!(!comptroller.is_zero(), ERROR_INVALID_ADDRESS);
        require!(
            initial_exchange_rate > BigUint::zero(),
            ERROR_INVALID_EXCHANGE_RATE
        );

        let reserve_factor = self.to_decimal_bps(reserve_factor);
        require!(reserve_factor <= self.bps(), ERROR_INVALID_RESERVE_FACTOR);

        self.comptroller().set(&comptroller);
        self.params().set(PoolParams {
            underlying,
            underlying_decimals,
            share_decimals,
            initial_exchange_rate: self.to_decimal_wad(initial_exchange_rate),
        });
        self.rate_model().set(self.build_rate_model(
            base_rate_per_year,
            multiplier_per_year,
            jump_multiplier_per_year,
            kink,
        ));
        self.reserve_factor().set(reserve_factor);

        let zero = self.to_decimal(BigUint::zero(), underlying_decimals);
        self.total_supply()
            .set(self.to_decimal(BigUint::zero(), share_decimals));
        self.total_borrows().set(&zero);
        self.total_reserves().set(&zero);
        self.total_cash().set(&zero);

        self.borrow_index().set(self.ray());
        self.accrual_block().set(self.blockchain().get_block_nonce());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
