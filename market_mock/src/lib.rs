#![no_std]

use common_constants::{BPS, WAD_PRECISION};
use common_errors::*;
use common_structs::MarketAssetConfig;

pub mod storage;

multiversx_sc::imports!();

/// Minimal lending market. Holds collateral per holder and asset, lets a holder
/// delegate withdrawals to another address, and refuses any withdrawal that
/// leaves the holder's weighted collateral below their debt.
#[multiversx_sc::contract]
pub trait MarketMock:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addAsset)]
    fn add_asset(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        price_wad: BigUint,
        ltv_bps: BigUint,
        decimals: usize,
    ) {
        require!(
            !self.assets().contains(&asset),
            ERROR_ASSET_ALREADY_SUPPORTED
        );
        require!(ltv_bps <= BigUint::from(BPS), ERROR_INVALID_LTV);

        self.asset_config(&asset).set(MarketAssetConfig {
            price_wad,
            ltv_bps,
            decimals,
        });
        self.assets().insert(asset);
    }

    #[only_owner]
    #[endpoint(setDebt)]
    fn set_debt(&self, holder: ManagedAddress, debt_wad: BigUint) {
        self.debt(&holder).set(debt_wad);
    }

    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        self.process_deposit(&caller, &caller);
    }

    #[payable]
    #[endpoint(depositOnBehalf)]
    fn deposit_on_behalf(&self, holder: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.process_deposit(&holder, &caller);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.process_withdraw(&caller, &caller, &asset, amount)
    }

    #[endpoint(withdrawOnBehalf)]
    fn withdraw_on_behalf(
        &self,
        holder: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        if caller != holder {
            self.spend_allowance(&holder, &caller, &asset, &amount);
        }

        self.process_withdraw(&holder, &caller, &asset, amount)
    }

    #[endpoint(approveDelegation)]
    fn approve_delegation(
        &self,
        delegate: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let holder = self.blockchain().get_caller();
        self.withdrawal_allowance(&holder, &delegate, &asset)
            .set(&amount);
        self.delegation_update_event(&holder, &delegate, &asset, &amount);
    }

    /// Whether the holder's collateral, weighted by loan-to-value, covers their debt.
    #[view(isSolvent)]
    fn is_solvent(&self, holder: &ManagedAddress) -> bool {
        let debt = self.to_decimal_wad(self.debt(holder).get());
        self.weighted_collateral(holder) >= debt
    }

    fn process_deposit(&self, holder: &ManagedAddress, caller: &ManagedAddress) {
        let payment = self.call_value().egld_or_single_esdt();
        let asset = &payment.token_identifier;

        require!(!holder.is_zero(), ERROR_DEPOSIT_REJECTED);
        require!(
            payment.amount > BigUint::zero(),
            ERROR_DEPOSIT_REJECTED
        );
        require!(self.assets().contains(asset), ERROR_DEPOSIT_REJECTED);
        require!(
            self.asset_config(asset).get().is_collateralizable(),
            ERROR_DEPOSIT_REJECTED
        );

        let new_balance = self.collateral(holder, asset).update(|balance| {
            *balance += &payment.amount;
            balance.clone()
        });

        self.market_deposit_event(holder, caller, asset, &payment.amount, &new_balance);
    }

    fn process_withdraw(
        &self,
        holder: &ManagedAddress,
        caller: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        require!(self.assets().contains(asset), ERROR_ASSET_NOT_SUPPORTED);

        let balance_mapper = self.collateral(holder, asset);
        let new_balance = self
            .checked_sub_amount(&balance_mapper.get(), &amount)
            .unwrap_or_else(|| sc_panic!(ERROR_INSUFFICIENT_COLLATERAL));
        balance_mapper.set(&new_balance);

        require!(self.is_solvent(holder), ERROR_INSUFFICIENT_COLLATERAL);

        self.market_withdraw_event(holder, caller, asset, &amount, &new_balance);

        self.tx()
            .to(caller)
            .egld_or_single_esdt(asset, 0, &amount)
            .transfer();

        amount
    }

    fn spend_allowance(
        &self,
        holder: &ManagedAddress,
        delegate: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        let allowance_mapper = self.withdrawal_allowance(holder, delegate, asset);
        let remaining = self
            .checked_sub_amount(&allowance_mapper.get(), amount)
            .unwrap_or_else(|| sc_panic!(ERROR_REPAYMENT_UNAUTHORIZED));

        allowance_mapper.set(&remaining);
        self.delegation_update_event(holder, delegate, asset, &remaining);
    }

    fn weighted_collateral(
        &self,
        holder: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = self.wad_zero();

        for asset in self.assets().iter() {
            let balance = self.collateral(holder, &asset).get();
            if balance == BigUint::zero() {
                continue;
            }

            let config = self.asset_config(&asset).get();
            let value = self.mul_half_up(
                &self.to_decimal(balance, config.decimals),
                &self.to_decimal_wad(config.price_wad),
                WAD_PRECISION,
            );
            let weighted = self.mul_half_up(
                &value,
                &self.to_decimal_bps(config.ltv_bps),
                WAD_PRECISION,
            );

            total = total + weighted;
        }

        total
    }
}
