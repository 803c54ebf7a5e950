#![no_std]

pub static ERROR_MATH_OVERFLOW: &[u8] = b"Math overflow.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_REENTRANT_CALL: &[u8] = b"Re-entrant call while a pool mutation is in progress.";

pub static ERROR_BLOCK_REGRESSION: &[u8] = b"Current block is older than the last accrual.";

pub static ERROR_BORROW_RATE_TOO_HIGH: &[u8] = b"Borrow rate is absurdly high.";

pub static ERROR_INVALID_RATE_MODEL: &[u8] = b"Invalid interest rate model, kink must be at most 1.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Reserve factor must be at most 100%.";

pub static ERROR_INVALID_EXCHANGE_RATE: &[u8] = b"Initial exchange rate must be greater than zero.";

pub static ERROR_ZERO_SHARES: &[u8] = b"Amount too small to mint or burn any shares.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares for this account.";

pub static ERROR_INSUFFICIENT_CASH: &[u8] = b"Not enough cash in the pool.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient account liquidity.";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Not enough reserves in the pool.";

pub static ERROR_REPAY_TOO_MUCH: &[u8] = b"Repay amount exceeds the owed balance.";

pub static ERROR_TOO_MUCH_REPAY: &[u8] = b"Repay amount exceeds the close factor limit.";

pub static ERROR_NOT_IN_SHORTFALL: &[u8] = b"Account is not in shortfall.";

pub static ERROR_LIQUIDATOR_IS_BORROWER: &[u8] = b"Liquidator can not be the borrower.";

pub static ERROR_LIQUIDATE_SEIZE_TOO_MUCH: &[u8] = b"Seize tokens exceed the borrower collateral.";

pub static ERROR_MARKET_NOT_FRESH: &[u8] = b"Market interest is not accrued for the current block.";

pub static ERROR_NOT_A_POOL: &[u8] = b"Caller is not a listed pool of the same comptroller.";

pub static ERROR_TRANSFER_TO_SELF: &[u8] = b"Can not transfer shares to self.";

pub static ERROR_MARKET_NOT_LISTED: &[u8] = b"Market not listed.";

pub static ERROR_MARKET_ALREADY_LISTED: &[u8] = b"Market already listed.";

pub static ERROR_POOL_COMPTROLLER_MISMATCH: &[u8] = b"Pool is bound to a different comptroller.";

pub static ERROR_BORROW_CAP_EXCEEDED: &[u8] = b"Market borrow cap reached.";

pub static ERROR_PAUSED: &[u8] = b"Action is paused.";

pub static ERROR_ONLY_OWNER_CAN_UNPAUSE: &[u8] = b"Only the owner can unpause.";

pub static ERROR_NOT_OWNER_OR_GUARDIAN: &[u8] = b"Only the owner or the pause guardian.";

pub static ERROR_INVALID_COLLATERAL_FACTOR: &[u8] = b"Collateral factor must be lower than 100%.";

pub static ERROR_INVALID_CLOSE_FACTOR: &[u8] = b"Close factor must be within (0%, 100%].";

pub static ERROR_INVALID_LIQUIDATION_INCENTIVE: &[u8] =
    b"Liquidation incentive must be at least 100%.";

pub static ERROR_INVALID_MAX_ASSETS: &[u8] = b"Max assets must be greater than zero.";

pub static ERROR_ARRAY_LENGTH_MISMATCH: &[u8] = b"Array arguments have different lengths.";

pub static ERROR_TOO_MANY_MARKETS: &[u8] = b"Account entered too many markets.";

pub static ERROR_EXIT_MARKET_BALANCE_OWED: &[u8] = b"Can not exit a market with an owed balance.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Money market contract template is empty.";

pub static ERROR_PRICE_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_PRICE_UNAVAILABLE: &[u8] = b"Oracle price is zero.";

pub static ERROR_PRICE_FEED_STALE: &[u8] = b"Oracle price is stale.";

pub static ERROR_ORACLE_PAUSED: &[u8] = b"Price oracle is paused.";

pub static ERROR_PRICE_NOT_FOUND: &[u8] = b"No price posted for this pool.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";
