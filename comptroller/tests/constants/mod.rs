use multiversx_sc_scenario::imports::{MxscPath, TestAddress, TestTokenIdentifier};

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const GUARDIAN_ADDRESS: TestAddress = TestAddress::new("guardian");

pub const COMPTROLLER_PATH: MxscPath = MxscPath::new("output/comptroller.mxsc.json");
pub const MONEY_MARKET_PATH: MxscPath =
    MxscPath::new("../money_market/output/money-market.mxsc.json");
pub const PRICE_ORACLE_PATH: MxscPath =
    MxscPath::new("../price_oracle/output/price-oracle.mxsc.json");

// Collateral asset
pub const TT1_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TT1-abcdef");
// Borrowed asset
pub const TT2_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TT2-abcdef");
pub const TT3_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TT3-abcdef");

pub const UNDERLYING_DECIMALS: usize = 18;
pub const SHARE_DECIMALS: usize = 8;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// 0.02 underlying per share, 1 underlying mints 50 shares
pub const INITIAL_EXCHANGE_RATE: u128 = 20_000_000_000_000_000;

pub const BASE_RATE_PER_YEAR: u128 = 20_000_000_000_000_000_000_000_000; // 2%
pub const MULTIPLIER_PER_YEAR: u128 = 100_000_000_000_000_000_000_000_000; // 10%
pub const JUMP_MULTIPLIER_PER_YEAR: u128 = RAY; // 100%
pub const KINK: u128 = 800_000_000_000_000_000_000_000_000; // 80%

pub const RESERVE_FACTOR: u64 = 1_000; // 10%
pub const COLLATERAL_FACTOR: u64 = 6_000; // 60%
pub const CLOSE_FACTOR: u64 = 5_000; // 50%
pub const LIQUIDATION_INCENTIVE: u64 = 10_800; // 108%

pub const START_BLOCK: u64 = 1;
pub const START_TIMESTAMP: u64 = 1_000;

pub const INITIAL_BALANCE: u64 = 1_000_000;
