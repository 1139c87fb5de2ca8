multiversx_sc::imports!();

use common_errors::{
    ERROR_ARITHMETIC_OVERFLOW, ERROR_DEPOSIT_REJECTED, ERROR_INSUFFICIENT_COLLATERAL,
    ERROR_INVALID_SWAP_PHASE, ERROR_REPAYMENT_UNAUTHORIZED, ERROR_SLIPPAGE_EXCEEDED,
};
use common_structs::{SwapPhase, SwapProgress};

use crate::{
    adapters::{self, exchange, market},
    storage,
};

#[multiversx_sc::module]
pub trait SwapOrchestratorModule:
    storage::Storage
    + adapters::BalanceTrackingModule
    + exchange::ExchangeAdapterModule
    + market::LendingMarketAdapterModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Runs a collateral swap from the moment the borrowed funds arrived until the
    /// provider is repaid.
    ///
    /// **Process**:
    /// 1. Swaps the borrowed source asset into the destination asset.
    /// 2. Deposits everything received on the holder's behalf.
    /// 3. Sizes the repayment as principal plus the provider's fee.
    /// 4. Withdraws that much of the holder's source collateral.
    /// 5. Transfers it back to the provider.
    ///
    /// Each step panics on failure, which reverts every step before it together with
    /// the loan itself.
    fn run_collateral_swap(&self, mut progress: SwapProgress<Self::Api>) {
        self.swap_borrowed_funds(&mut progress);
        self.deposit_for_holder(&mut progress);
        self.size_repayment(&mut progress);
        self.withdraw_repayment(&mut progress);
        self.repay_loan(&mut progress);
        require!(progress.is_repaid(), ERROR_INVALID_SWAP_PHASE);

        self.collateral_swap_event(
            &progress.holder,
            &progress.instruction.source_asset,
            &progress.instruction.dest_asset,
            &progress.obligation.principal,
            &progress.obligation.fee,
            &progress.dest_received,
            &progress.repay_amount,
        );
    }

    fn swap_borrowed_funds(&self, progress: &mut SwapProgress<Self::Api>) {
        let instruction = &progress.instruction;
        let received = self.swap_with_min_out(
            &instruction.source_asset,
            &instruction.dest_asset,
            &progress.obligation.principal,
            &instruction.min_dest_amount,
        );

        // Floor applies to the measured amount, not the exchange's reported one
        require!(
            received >= instruction.min_dest_amount,
            ERROR_SLIPPAGE_EXCEEDED
        );

        progress.dest_received = received;
        self.advance_phase(progress, SwapPhase::Swapped);
    }

    fn deposit_for_holder(&self, progress: &mut SwapProgress<Self::Api>) {
        require!(
            progress.dest_received > BigUint::zero(),
            ERROR_DEPOSIT_REJECTED
        );

        self.deposit_on_behalf(
            &progress.holder,
            &progress.instruction.dest_asset,
            &progress.dest_received,
        );
        self.advance_phase(progress, SwapPhase::Deposited);
    }

    fn size_repayment(&self, progress: &mut SwapProgress<Self::Api>) {
        progress.repay_amount = self
            .checked_add_amount(&progress.obligation.principal, &progress.obligation.fee)
            .unwrap_or_else(|| sc_panic!(ERROR_ARITHMETIC_OVERFLOW));

        self.advance_phase(progress, SwapPhase::Sized);
    }

    /// Pulls the repayment out of the holder's source collateral.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The holder's balance is below the repayment,
    ///   or the market released less than asked.
    /// - `ERROR_REPAYMENT_UNAUTHORIZED`: The holder's approval for the engine is below the repayment.
    fn withdraw_repayment(&self, progress: &mut SwapProgress<Self::Api>) {
        let source_asset = &progress.instruction.source_asset;

        let collateral = self.collateral_balance(&progress.holder, source_asset);
        require!(
            collateral >= progress.repay_amount,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        let allowance = self.engine_withdrawal_allowance(&progress.holder, source_asset);
        require!(
            allowance >= progress.repay_amount,
            ERROR_REPAYMENT_UNAUTHORIZED
        );

        let withdrawn =
            self.withdraw_on_behalf(&progress.holder, source_asset, &progress.repay_amount);
        require!(
            withdrawn == progress.repay_amount,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.advance_phase(progress, SwapPhase::Withdrawn);
    }

    fn repay_loan(&self, progress: &mut SwapProgress<Self::Api>) {
        self.tx()
            .to(self.loan_provider().get())
            .egld_or_single_esdt(
                &progress.instruction.source_asset,
                0,
                &progress.repay_amount,
            )
            .transfer();

        self.advance_phase(progress, SwapPhase::Repaid);
    }

    fn advance_phase(&self, progress: &mut SwapProgress<Self::Api>, next: SwapPhase) {
        require!(progress.try_advance(next), ERROR_INVALID_SWAP_PHASE);
    }
}
