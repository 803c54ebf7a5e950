#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// 1 USD, also the scale of the exchange rate between shares and underlying
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Rounds of 6 seconds in a 365 day year
pub const BLOCKS_PER_YEAR: u64 = 5_256_000;

/// Upper bound of the per-block borrow rate, 0.0005% in RAY
pub const MAX_BORROW_RATE_PER_BLOCK: u128 = 5_000_000_000_000_000_000;

/// Maximum number of markets an account may enter unless reconfigured
pub const DEFAULT_MAX_ASSETS: usize = 10;

pub const COMPTROLLER_VERSION: u32 = 1;

/// Money market storage keys read by the comptroller from the pool accounts.
/// Must match the `#[storage_mapper]` names of the pool contract.
pub const ACCOUNT_SHARES_STORAGE_KEY: &[u8] = b"account_shares";
pub const ACCOUNT_BORROWS_STORAGE_KEY: &[u8] = b"account_borrows";

/// Price oracle storage key read by the comptroller.
pub const PRICES_STORAGE_KEY: &[u8] = b"prices";
