#![no_std]

use common_constants::BPS;
use common_errors::*;

multiversx_sc::imports!();

/// Deterministic flash loan provider. Lends from its own reserves, calls the
/// receiver back with `(assets, amounts, fees, initiator, params...)` and checks
/// that every leg came back with its fee before returning.
#[multiversx_sc::contract]
pub trait FlashMock: common_events::EventsModule + common_math::SharedMathModule {
    #[init]
    fn init(&self, fee_bps: BigUint) {
        self.update_fee_bps(fee_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setFeeBps)]
    fn set_fee_bps(&self, fee_bps: BigUint) {
        self.update_fee_bps(fee_bps);
    }

    // Reports a fixed fee for every leg instead of the basis point fee
    #[only_owner]
    #[endpoint(setFeeOverride)]
    fn set_fee_override(&self, fee: OptionalValue<BigUint>) {
        match fee {
            OptionalValue::Some(fee) => self.fee_override().set(fee),
            OptionalValue::None => self.fee_override().clear(),
        }
    }

    // Sends `shortfall` less than each declared amount
    #[only_owner]
    #[endpoint(setUnderDelivery)]
    fn set_under_delivery(&self, shortfall: BigUint) {
        self.under_delivery().set(shortfall);
    }

    // Returns from `flashLoan` without lending or calling the receiver back
    #[only_owner]
    #[endpoint(setSkipCallback)]
    fn set_skip_callback(&self, skip: bool) {
        self.skip_callback().set(skip);
    }

    #[endpoint(flashLoan)]
    fn flash_loan(
        &self,
        receiver: ManagedAddress,
        endpoint: ManagedBuffer,
        assets: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        params: ManagedArgBuffer<Self::Api>,
    ) {
        require!(
            !endpoint.is_empty() && !receiver.is_zero(),
            ERROR_LOAN_PROVIDER_REJECTED
        );
        require!(
            !assets.is_empty() && assets.len() == amounts.len(),
            ERROR_LOAN_PROVIDER_REJECTED
        );

        if self.skip_callback().get() {
            return;
        }

        let initiator = self.blockchain().get_caller();
        let shortfall = self.under_delivery().get();

        let mut seen: ManagedVec<Self::Api, EgldOrEsdtTokenIdentifier<Self::Api>> =
            ManagedVec::new();
        let mut fees: ManagedVec<Self::Api, BigUint<Self::Api>> = ManagedVec::new();
        let mut balances_before: ManagedVec<Self::Api, BigUint<Self::Api>> = ManagedVec::new();
        let mut payments: ManagedVec<Self::Api, EgldOrEsdtTokenPayment<Self::Api>> =
            ManagedVec::new();

        for index in 0..assets.len() {
            let asset = EgldOrEsdtTokenIdentifier::clone(&assets.get(index));
            let amount = BigUint::clone(&amounts.get(index));

            require!(!seen.contains(&asset), ERROR_LOAN_PROVIDER_REJECTED);
            require!(amount > BigUint::zero(), ERROR_LOAN_PROVIDER_REJECTED);

            let balance = self.blockchain().get_sc_balance(&asset, 0);
            require!(balance >= amount, ERROR_LOAN_PROVIDER_REJECTED);

            let fee = self.flash_loan_fee(&amount);
            self.flash_loan_event(&receiver, &initiator, &asset, &amount, &fee);

            let delivered = self
                .checked_sub_amount(&amount, &shortfall)
                .unwrap_or_else(BigUint::zero);

            seen.push(asset.clone());
            fees.push(fee);
            balances_before.push(balance);
            payments.push(EgldOrEsdtTokenPayment::new(asset, 0, delivered));
        }

        let mut arguments = ManagedArgBuffer::new();
        arguments.push_arg(&assets);
        arguments.push_arg(&amounts);
        arguments.push_arg(&fees);
        arguments.push_arg(&initiator);

        self.tx()
            .to(&receiver)
            .raw_call(endpoint)
            .arguments_raw(arguments.concat(params))
            .payment(payments)
            .sync_call();

        for index in 0..assets.len() {
            let asset = EgldOrEsdtTokenIdentifier::clone(&assets.get(index));
            let required =
                BigUint::clone(&balances_before.get(index)) + BigUint::clone(&fees.get(index));

            require!(
                self.blockchain().get_sc_balance(&asset, 0) >= required,
                ERROR_INVALID_FLASHLOAN_REPAYMENT
            );
        }
    }

    /// Fee charged for borrowing `amount`.
    #[view(getFlashLoanFee)]
    fn flash_loan_fee(&self, amount: &BigUint) -> BigUint {
        let fee_override = self.fee_override();
        if !fee_override.is_empty() {
            return fee_override.get();
        }

        self.bps_fee(amount, &self.fee_bps().get())
    }

    fn update_fee_bps(&self, fee_bps: BigUint) {
        require!(fee_bps <= BigUint::from(BPS), ERROR_INVALID_FEE);
        self.fee_bps().set(fee_bps);
    }

    #[view(getFeeBps)]
    #[storage_mapper("fee_bps")]
    fn fee_bps(&self) -> SingleValueMapper<BigUint>;

    #[view(getFeeOverride)]
    #[storage_mapper("fee_override")]
    fn fee_override(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("under_delivery")]
    fn under_delivery(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("skip_callback")]
    fn skip_callback(&self) -> SingleValueMapper<bool>;
}
