multiversx_sc::imports!();

use common_errors::ERROR_ARITHMETIC_UNDERFLOW;

pub mod exchange;
pub mod market;

/// Every amount the engine receives from a service is measured on its own
/// balance rather than taken from the service's return value.
#[multiversx_sc::module]
pub trait BalanceTrackingModule: common_math::SharedMathModule {
    fn own_balance(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(asset, 0)
    }

    fn balance_increase(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        balance_before: &BigUint,
    ) -> BigUint {
        self.checked_sub_amount(&self.own_balance(asset), balance_before)
            .unwrap_or_else(|| sc_panic!(ERROR_ARITHMETIC_UNDERFLOW))
    }
}
