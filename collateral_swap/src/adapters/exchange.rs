multiversx_sc::imports!();

use common_proxies::proxy_exchange;

use crate::{adapters, storage};

#[multiversx_sc::module]
pub trait ExchangeAdapterModule:
    storage::Storage + adapters::BalanceTrackingModule + common_math::SharedMathModule
{
    /// Expected output of swapping `amount` of `from_asset` into `to_asset`, without executing it.
    fn quote_swap(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(self.exchange().get())
            .typed(proxy_exchange::ExchangeProxy)
            .amount_out(from_asset, to_asset, amount)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Swaps `amount` of `from_asset` into `to_asset` and returns what actually arrived.
    /// The exchange fails with `ERROR_SLIPPAGE_EXCEEDED` when it cannot meet `min_out`.
    fn swap_with_min_out(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        min_out: &BigUint,
    ) -> BigUint {
        let balance_before = self.own_balance(to_asset);

        self.tx()
            .to(self.exchange().get())
            .typed(proxy_exchange::ExchangeProxy)
            .swap(to_asset, min_out)
            .egld_or_single_esdt(from_asset, 0, amount)
            .sync_call();

        self.balance_increase(to_asset, &balance_before)
    }
}
