multiversx_sc::imports!();

use common_proxies::proxy_lending_market;

use crate::{adapters, storage};

#[multiversx_sc::module]
pub trait LendingMarketAdapterModule:
    storage::Storage + adapters::BalanceTrackingModule + common_math::SharedMathModule
{
    /// Credits `amount` of `asset` to `holder`'s collateral. The market fails with
    /// `ERROR_DEPOSIT_REJECTED` for unsupported assets.
    fn deposit_on_behalf(
        &self,
        holder: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(self.lending_market().get())
            .typed(proxy_lending_market::LendingMarketProxy)
            .deposit_on_behalf(holder)
            .egld_or_single_esdt(asset, 0, amount)
            .sync_call();
    }

    /// Withdraws `amount` of `holder`'s `asset` collateral to the engine and returns
    /// what actually arrived. The market enforces its own solvency rule.
    fn withdraw_on_behalf(
        &self,
        holder: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let balance_before = self.own_balance(asset);

        self.tx()
            .to(self.lending_market().get())
            .typed(proxy_lending_market::LendingMarketProxy)
            .withdraw_on_behalf(holder, asset, amount)
            .sync_call();

        self.balance_increase(asset, &balance_before)
    }

    fn collateral_balance(
        &self,
        holder: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.tx()
            .to(self.lending_market().get())
            .typed(proxy_lending_market::LendingMarketProxy)
            .collateral(holder, asset)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// How much of `holder`'s `asset` collateral the engine may still withdraw.
    fn engine_withdrawal_allowance(
        &self,
        holder: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.tx()
            .to(self.lending_market().get())
            .typed(proxy_lending_market::LendingMarketProxy)
            .withdrawal_allowance(holder, self.blockchain().get_sc_address(), asset)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
