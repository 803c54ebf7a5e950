use crate::constants::*;

use common_proxies::{
    proxy_comptroller::ComptrollerProxy, proxy_money_market::MoneyMarketProxy,
    proxy_price_oracle::PriceOracleProxy,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedDecimal,
    ManagedVec, MultiValueEncoded, NumDecimals, ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(COMPTROLLER_PATH, comptroller::ContractBuilder);
    blockchain.register_contract(MONEY_MARKET_PATH, money_market::ContractBuilder);
    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);

    blockchain
}

/// Whole underlying units in raw units.
pub fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(UNDERLYING_DECIMALS as u32)
}

/// Whole shares in raw units.
pub fn shares(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(SHARE_DECIMALS as u32)
}

/// USD price with WAD precision.
pub fn price(dollars: u64) -> BigUint<StaticApi> {
    BigUint::from(dollars) * BigUint::from(WAD)
}

/// USD price in cents with WAD precision.
pub fn price_cents(cents: u64) -> BigUint<StaticApi> {
    BigUint::from(cents) * BigUint::from(WAD / 100)
}

pub struct MoneyMarketTestState {
    pub world: ScenarioWorld,
    pub comptroller: ManagedAddress<StaticApi>,
    pub price_oracle: ManagedAddress<StaticApi>,
    pub tt1_pool: ManagedAddress<StaticApi>,
    pub tt2_pool: ManagedAddress<StaticApi>,
    pub block: u64,
}

impl MoneyMarketTestState {
    /// Two listed pools (TT1 and TT2) priced at 1 USD with a 60% collateral factor.
    pub fn new() -> Self {
        let mut world = world();
        setup_owner(&mut world);
        world
            .current_block()
            .block_nonce(START_BLOCK)
            .block_timestamp(START_TIMESTAMP);

        let price_oracle = setup_price_oracle(&mut world);
        let comptroller = setup_comptroller(&mut world, &ManagedAddress::zero(), &price_oracle);

        let tt1_pool = deploy_pool(&mut world, &comptroller, TT1_TOKEN);
        let tt2_pool = deploy_pool(&mut world, &comptroller, TT2_TOKEN);

        let mut state = Self {
            world,
            comptroller,
            price_oracle,
            tt1_pool,
            tt2_pool,
            block: START_BLOCK,
        };

        let tt1_pool = state.tt1_pool.clone();
        let tt2_pool = state.tt2_pool.clone();
        for pool in [&tt1_pool, &tt2_pool] {
            state.set_price(pool, price(1));
            state.support_market(pool);
            state.set_collateral_factor(pool, COLLATERAL_FACTOR);
        }

        state
    }

    pub fn set_block(&mut self, block: u64) {
        self.block = block;
        self.world.current_block().block_nonce(block);
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        let block = self.block + blocks;
        self.set_block(block);
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn setup_account(&mut self, account: TestAddress) {
        self.world
            .account(account)
            .nonce(1)
            .esdt_balance(TT1_TOKEN, units(INITIAL_BALANCE))
            .esdt_balance(TT2_TOKEN, units(INITIAL_BALANCE))
            .esdt_balance(TT3_TOKEN, units(INITIAL_BALANCE));
    }

    // Oracle

    pub fn set_price(&mut self, pool: &ManagedAddress<StaticApi>, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_oracle)
            .typed(PriceOracleProxy)
            .set_underlying_price(pool, price)
            .run();
    }

    pub fn pause_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_oracle)
            .typed(PriceOracleProxy)
            .pause_endpoint()
            .run();
    }

    // Comptroller configuration

    pub fn support_market(&mut self, pool: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .support_market(pool)
            .run();
    }

    pub fn support_market_error(&mut self, pool: &ManagedAddress<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .support_market(pool)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_collateral_factor(&mut self, pool: &ManagedAddress<StaticApi>, collateral_factor: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_collateral_factor(pool, BigUint::from(collateral_factor))
            .run();
    }

    pub fn set_collateral_factor_error(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        collateral_factor: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_collateral_factor(pool, BigUint::from(collateral_factor))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_borrow_cap(&mut self, pool: &ManagedAddress<StaticApi>, cap: BigUint<StaticApi>) {
        let mut pools = ManagedVec::new();
        pools.push(pool.clone());
        let mut caps = ManagedVec::new();
        caps.push(cap);

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_market_borrow_caps(pools, caps)
            .run();
    }

    pub fn set_max_price_age(&mut self, max_price_age: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_max_price_age(max_price_age)
            .run();
    }

    // Pool operations

    pub fn mint(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .mint()
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn mint_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .mint()
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        shares: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .redeem(shares)
            .run();
    }

    pub fn redeem_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .redeem(shares)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem_underlying(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .redeem_underlying(amount)
            .run();
    }

    pub fn redeem_underlying_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .redeem_underlying(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .borrow(amount)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .borrow(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .repay_borrow()
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .repay_borrow()
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_behalf(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .repay_borrow_behalf(borrower.to_managed_address())
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn liquidate(
        &mut self,
        liquidator: &TestAddress,
        borrowed_pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        repay_amount: BigUint<StaticApi>,
        borrower: &TestAddress,
        collateral_pool: &ManagedAddress<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(borrowed_pool)
            .typed(MoneyMarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_pool)
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                repay_amount,
            ))
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_error(
        &mut self,
        liquidator: &TestAddress,
        borrowed_pool: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        repay_amount: BigUint<StaticApi>,
        borrower: &TestAddress,
        collateral_pool: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(liquidator.to_managed_address())
            .to(borrowed_pool)
            .typed(MoneyMarketProxy)
            .liquidate_borrow(borrower.to_managed_address(), collateral_pool)
            .payment(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                repay_amount,
            ))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn transfer_shares(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        to: &TestAddress,
        shares: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .transfer(to.to_managed_address(), shares)
            .run();
    }

    pub fn transfer_shares_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        to: &TestAddress,
        shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(pool)
            .typed(MoneyMarketProxy)
            .transfer(to.to_managed_address(), shares)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self, pool: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pool)
            .typed(MoneyMarketProxy)
            .accrue_interest()
            .run();
    }

    // Membership

    pub fn enter_markets(&mut self, from: &TestAddress, pools: &[&ManagedAddress<StaticApi>]) {
        let mut markets = MultiValueEncoded::new();
        for pool in pools {
            markets.push((*pool).clone());
        }

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .enter_markets(markets)
            .run();
    }

    pub fn exit_market(&mut self, from: &TestAddress, pool: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .exit_market(pool)
            .run();
    }

    pub fn exit_market_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .exit_market(pool)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Pause controls

    pub fn set_pause_guardian(&mut self, guardian: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_pause_guardian(guardian.to_managed_address())
            .run();
    }

    pub fn set_mint_paused(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        paused: bool,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_mint_paused(pool, paused)
            .run();
    }

    pub fn set_mint_paused_error(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        paused: bool,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_mint_paused(pool, paused)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_borrow_paused(
        &mut self,
        from: &TestAddress,
        pool: &ManagedAddress<StaticApi>,
        paused: bool,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_borrow_paused(pool, paused)
            .run();
    }

    pub fn set_transfer_paused(&mut self, from: &TestAddress, paused: bool) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_transfer_paused(paused)
            .run();
    }

    pub fn set_seize_paused(&mut self, from: &TestAddress, paused: bool) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_seize_paused(paused)
            .run();
    }

    pub fn set_seize_paused_error(&mut self, from: &TestAddress, paused: bool, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_seize_paused(paused)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_max_assets(&mut self, max_assets: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .set_max_assets(max_assets)
            .run();
    }

    // Views

    pub fn seize_tokens(
        &mut self,
        borrowed_pool: &ManagedAddress<StaticApi>,
        collateral_pool: &ManagedAddress<StaticApi>,
        repay_amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .liquidate_calculate_seize_tokens(borrowed_pool, collateral_pool, repay_amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn assets_in(&mut self, account: &TestAddress) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .get_assets_in(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn total_borrows(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .total_borrows()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn total_reserves(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .total_reserves()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn total_cash(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .total_cash()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn total_supply(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn borrow_index(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .borrow_index()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn accrual_block(&mut self, pool: &ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .accrual_block()
            .returns(ReturnsResult)
            .run()
    }

    pub fn exchange_rate(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .exchange_rate_stored()
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn borrow_balance(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        account: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .borrow_balance_stored(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    pub fn account_shares(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        account: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(MoneyMarketProxy)
            .account_shares(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_raw_units()
            .clone()
    }

    /// `(liquidity, shortfall)` of an account, raw WAD units.
    pub fn account_liquidity(&mut self, account: &TestAddress) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let (liquidity, shortfall) = self
            .world
            .query()
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .get_account_liquidity(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        (
            liquidity.into_raw_units().clone(),
            shortfall.into_raw_units().clone(),
        )
    }

    pub fn check_membership(&mut self, account: &TestAddress, pool: &ManagedAddress<StaticApi>) -> bool {
        self.world
            .query()
            .to(&self.comptroller)
            .typed(ComptrollerProxy)
            .check_membership(account.to_managed_address(), pool)
            .returns(ReturnsResult)
            .run()
    }

}

pub fn setup_owner(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(TT1_TOKEN, units(INITIAL_BALANCE))
        .esdt_balance(TT2_TOKEN, units(INITIAL_BALANCE));
    world.account(GUARDIAN_ADDRESS).nonce(1);
}

pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let price_oracle = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(PriceOracleProxy)
        .init()
        .code(PRICE_ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&price_oracle)
        .typed(PriceOracleProxy)
        .unpause_endpoint()
        .run();

    price_oracle
}

pub fn setup_comptroller(
    world: &mut ScenarioWorld,
    pool_template: &ManagedAddress<StaticApi>,
    price_oracle: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(ComptrollerProxy)
        .init(
            pool_template,
            price_oracle,
            BigUint::from(CLOSE_FACTOR),
            BigUint::from(LIQUIDATION_INCENTIVE),
        )
        .code(COMPTROLLER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_pool(
    world: &mut ScenarioWorld,
    comptroller: &ManagedAddress<StaticApi>,
    token: TestTokenIdentifier,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(MoneyMarketProxy)
        .init(
            comptroller,
            EgldOrEsdtTokenIdentifier::<StaticApi>::esdt(token.to_token_identifier()),
            UNDERLYING_DECIMALS,
            SHARE_DECIMALS,
            BigUint::from(INITIAL_EXCHANGE_RATE),
            BigUint::from(BASE_RATE_PER_YEAR),
            BigUint::from(MULTIPLIER_PER_YEAR),
            BigUint::from(JUMP_MULTIPLIER_PER_YEAR),
            BigUint::from(KINK),
            BigUint::from(RESERVE_FACTOR),
        )
        .code(MONEY_MARKET_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
