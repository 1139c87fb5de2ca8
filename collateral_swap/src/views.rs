multiversx_sc::imports!();

use common_errors::ERROR_ARITHMETIC_OVERFLOW;

use crate::{
    adapters::{self, exchange},
    loan, storage, validation,
};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + loan::LoanCoordinatorModule
    + adapters::BalanceTrackingModule
    + exchange::ExchangeAdapterModule
    + common_math::SharedMathModule
{
    /// Amount of `to_asset` the exchange would currently deliver for `amount` of `from_asset`.
    /// Useful for picking `min_out` before calling `swapCollateral`.
    #[view(getSwapQuote)]
    fn get_swap_quote(
        &self,
        from_asset: EgldOrEsdtTokenIdentifier,
        to_asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        self.require_distinct_assets(&from_asset, &to_asset);
        self.quote_swap(&from_asset, &to_asset, &amount)
    }

    /// Source collateral a swap of `amount` would withdraw from the holder: principal plus
    /// the provider's current fee. The holder's approval for the engine must cover it.
    #[view(getRepaymentQuote)]
    fn get_repayment_quote(&self, amount: BigUint) -> BigUint {
        let fee = self.quote_loan_fee(&amount);
        self.checked_add_amount(&amount, &fee)
            .unwrap_or_else(|| sc_panic!(ERROR_ARITHMETIC_OVERFLOW))
    }
}
