#![no_std]

use common_errors::*;
use common_structs::ExchangeRate;

multiversx_sc::imports!();

/// Fixed rate exchange. Pays out of its own reserves and fails instead of
/// delivering less than the caller's minimum.
#[multiversx_sc::contract]
pub trait SwapMock: common_events::EventsModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setRate)]
    fn set_rate(
        &self,
        from_asset: EgldOrEsdtTokenIdentifier,
        to_asset: EgldOrEsdtTokenIdentifier,
        numerator: BigUint,
        denominator: BigUint,
    ) {
        require!(
            numerator > BigUint::zero() && denominator > BigUint::zero(),
            ERROR_INVALID_RATE
        );
        self.rate(&from_asset, &to_asset).set(ExchangeRate {
            numerator,
            denominator,
        });
    }

    #[payable]
    #[endpoint(swap)]
    fn swap(&self, wanted_token: EgldOrEsdtTokenIdentifier, min_amount_out: BigUint) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();

        let amount_out = self.amount_out(&payment.token_identifier, &wanted_token, &payment.amount);
        require!(amount_out >= min_amount_out, ERROR_SLIPPAGE_EXCEEDED);
        require!(
            self.blockchain().get_sc_balance(&wanted_token, 0) >= amount_out,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        self.swap_executed_event(
            &caller,
            &payment.token_identifier,
            &wanted_token,
            &payment.amount,
            &amount_out,
        );

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&wanted_token, 0, &amount_out)
            .transfer_if_not_empty();

        amount_out
    }

    #[view(getAmountOut)]
    fn amount_out(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
    ) -> BigUint {
        let rate = self.rate(from_asset, to_asset);
        require!(!rate.is_empty(), ERROR_PAIR_NOT_CONFIGURED);

        rate.get().amount_out(amount_in)
    }

    #[storage_mapper("rate")]
    fn rate(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ExchangeRate<Self::Api>>;
}
