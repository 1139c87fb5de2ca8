use crate::constants::*;

use collateral_swap::{
    proxy_collateral_swap, proxy_exchange, proxy_lending_market, proxy_loan_provider,
    SwapCallbackParams, SwapInstruction,
};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedVec,
        ReturnsNewManagedAddress, ReturnsResult, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(COLLATERAL_SWAP_PATH, collateral_swap::ContractBuilder);
    blockchain.register_contract(FLASH_MOCK_PATH, flash_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);
    blockchain.register_contract(MARKET_MOCK_PATH, market_mock::ContractBuilder);

    blockchain
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn amount(raw: u128) -> BigUint<StaticApi> {
    BigUint::from(raw)
}

pub struct CollateralSwapTestState {
    pub world: ScenarioWorld,
    pub engine: ManagedAddress<StaticApi>,
    pub loan_provider: ManagedAddress<StaticApi>,
    pub exchange: ManagedAddress<StaticApi>,
    pub lending_market: ManagedAddress<StaticApi>,
}

impl CollateralSwapTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_owner(&mut world);

        let loan_provider = setup_loan_provider(&mut world);
        let exchange = setup_exchange(&mut world);
        let lending_market = setup_lending_market(&mut world);
        let engine = setup_engine(&mut world, &loan_provider, &exchange, &lending_market);

        Self {
            world,
            engine,
            loan_provider,
            exchange,
            lending_market,
        }
    }

    // Engine

    pub fn swap_collateral(
        &mut self,
        from: &TestAddress,
        from_asset: TestTokenIdentifier,
        to_asset: TestTokenIdentifier,
        principal: u128,
        min_out: u128,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .swap_collateral(asset(from_asset), asset(to_asset), amount(principal), amount(min_out))
            .run();
    }

    pub fn swap_collateral_error(
        &mut self,
        from: &TestAddress,
        from_asset: TestTokenIdentifier,
        to_asset: TestTokenIdentifier,
        principal: u128,
        min_out: u128,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .swap_collateral(asset(from_asset), asset(to_asset), amount(principal), amount(min_out))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_swap_quote(
        &mut self,
        from_asset: TestTokenIdentifier,
        to_asset: TestTokenIdentifier,
        principal: u128,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .get_swap_quote(asset(from_asset), asset(to_asset), amount(principal))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_repayment_quote(&mut self, principal: u128) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .get_repayment_quote(amount(principal))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_repayment_quote_error(&mut self, principal: u128, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .get_repayment_quote(amount(principal))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .paused_status()
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_loan_provider_error(
        &mut self,
        from: &TestAddress,
        address: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .set_loan_provider(address)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_exchange(&mut self, address: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .set_exchange(address)
            .run();
    }

    pub fn get_exchange(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .exchange()
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute_operation_error(
        &mut self,
        from: ManagedAddress<StaticApi>,
        principal: u128,
        error_message: &[u8],
    ) {
        let mut assets = ManagedVec::<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>>::new();
        assets.push(asset(ASSET_A));
        let mut amounts = ManagedVec::<StaticApi, BigUint<StaticApi>>::new();
        amounts.push(amount(principal));
        let mut fees = ManagedVec::<StaticApi, BigUint<StaticApi>>::new();
        fees.push(amount(FLASH_LOAN_FEE));

        let params = SwapCallbackParams::<StaticApi> {
            holder: HOLDER_ADDRESS.to_managed_address(),
            instruction: SwapInstruction::new(
                asset(ASSET_A),
                asset(ASSET_B),
                amount(principal),
                amount(1),
            ),
        };

        self.world
            .tx()
            .from(from)
            .to(&self.engine)
            .typed(proxy_collateral_swap::CollateralSwapProxy)
            .execute_operation(assets, amounts, fees, self.engine.clone(), params)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Loan provider

    pub fn set_fee_bps(&mut self, fee_bps: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.loan_provider)
            .typed(proxy_loan_provider::LoanProviderProxy)
            .set_fee_bps(BigUint::from(fee_bps))
            .run();
    }

    pub fn set_fee_override(&mut self, fee: OptionalValue<BigUint<StaticApi>>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.loan_provider)
            .typed(proxy_loan_provider::LoanProviderProxy)
            .set_fee_override(fee)
            .run();
    }

    pub fn set_under_delivery(&mut self, shortfall: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.loan_provider)
            .typed(proxy_loan_provider::LoanProviderProxy)
            .set_under_delivery(amount(shortfall))
            .run();
    }

    pub fn set_skip_callback(&mut self, skip: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.loan_provider)
            .typed(proxy_loan_provider::LoanProviderProxy)
            .set_skip_callback(skip)
            .run();
    }

    // Exchange

    pub fn set_rate(
        &mut self,
        from_asset: TestTokenIdentifier,
        to_asset: TestTokenIdentifier,
        numerator: u64,
        denominator: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.exchange)
            .typed(proxy_exchange::ExchangeProxy)
            .set_rate(
                asset(from_asset),
                asset(to_asset),
                BigUint::from(numerator),
                BigUint::from(denominator),
            )
            .run();
    }

    // Lending market

    pub fn add_market_asset(
        &mut self,
        token: TestTokenIdentifier,
        price_wad: u128,
        ltv_bps: u64,
        decimals: usize,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .add_asset(asset(token), amount(price_wad), BigUint::from(ltv_bps), decimals)
            .run();
    }

    pub fn set_debt(&mut self, holder: &TestAddress, debt_wad: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .set_debt(holder.to_managed_address(), amount(debt_wad))
            .run();
    }

    pub fn deposit(&mut self, from: &TestAddress, token: TestTokenIdentifier, raw_amount: u128) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .deposit()
            .esdt(EsdtTokenPayment::new(
                token.to_token_identifier(),
                0,
                amount(raw_amount),
            ))
            .run();
    }

    pub fn withdraw(&mut self, from: &TestAddress, token: TestTokenIdentifier, raw_amount: u128) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .withdraw(asset(token), amount(raw_amount))
            .run();
    }

    pub fn approve_engine(
        &mut self,
        holder: &TestAddress,
        token: TestTokenIdentifier,
        allowance: u128,
    ) {
        let engine = self.engine.clone();
        self.world
            .tx()
            .from(holder.to_managed_address())
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .approve_delegation(engine, asset(token), amount(allowance))
            .run();
    }

    pub fn collateral(
        &mut self,
        holder: &TestAddress,
        token: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .collateral(holder.to_managed_address(), asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn engine_allowance(
        &mut self,
        holder: &TestAddress,
        token: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let engine = self.engine.clone();
        self.world
            .query()
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .withdrawal_allowance(holder.to_managed_address(), engine, asset(token))
            .returns(ReturnsResult)
            .run()
    }

    // Balances

    pub fn check_esdt_balance(
        &mut self,
        address: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        raw_amount: u128,
    ) {
        self.world
            .check_account(address.clone())
            .esdt_balance(token, amount(raw_amount));
    }

    pub fn check_egld_balance(&mut self, address: &ManagedAddress<StaticApi>, raw_amount: u128) {
        self.world
            .check_account(address.clone())
            .balance(amount(raw_amount));
    }

    /// Sets up a holder with `collateral_a` of A deposited in the market and the
    /// engine approved to withdraw `allowance_a` of it.
    pub fn setup_holder(
        &mut self,
        holder: TestAddress,
        collateral_a: u128,
        allowance_a: u128,
    ) {
        self.world
            .account(holder)
            .nonce(1)
            .esdt_balance(ASSET_A, amount(collateral_a));

        if collateral_a > 0 {
            self.deposit(&holder, ASSET_A, collateral_a);
        }
        if allowance_a > 0 {
            self.approve_engine(&holder, ASSET_A, allowance_a);
        }
    }
}

pub fn setup_owner(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
}

pub fn setup_loan_provider(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let loan_provider = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_loan_provider::LoanProviderProxy)
        .init(BigUint::from(FLASH_LOAN_FEE_BPS))
        .code(FLASH_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(
        loan_provider.clone(),
        &ASSET_A.as_bytes(),
        amount(PROVIDER_RESERVE),
    );

    loan_provider
}

pub fn setup_exchange(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let exchange = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_exchange::ExchangeProxy)
        .init()
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&exchange)
        .typed(proxy_exchange::ExchangeProxy)
        .set_rate(
            asset(ASSET_A),
            asset(ASSET_B),
            BigUint::from(RATE_A_TO_B_NUMERATOR),
            BigUint::from(RATE_A_TO_B_DENOMINATOR),
        )
        .run();

    world.set_esdt_balance(exchange.clone(), &ASSET_B.as_bytes(), amount(EXCHANGE_RESERVE));

    exchange
}

pub fn setup_lending_market(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let lending_market = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_lending_market::LendingMarketProxy)
        .init()
        .code(MARKET_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (token, price_wad, decimals) in [
        (ASSET_A, ASSET_A_PRICE_WAD, ASSET_A_DECIMALS),
        (ASSET_B, ASSET_B_PRICE_WAD, ASSET_B_DECIMALS),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&lending_market)
            .typed(proxy_lending_market::LendingMarketProxy)
            .add_asset(asset(token), amount(price_wad), BigUint::from(LTV_BPS), decimals)
            .run();
    }

    lending_market
}

pub fn setup_engine(
    world: &mut ScenarioWorld,
    loan_provider: &ManagedAddress<StaticApi>,
    exchange: &ManagedAddress<StaticApi>,
    lending_market: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_collateral_swap::CollateralSwapProxy)
        .init(loan_provider, exchange, lending_market)
        .code(COLLATERAL_SWAP_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
