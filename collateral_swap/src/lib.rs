#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod adapters;
pub mod config;
pub mod loan;
pub mod orchestrator;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait CollateralSwap:
    storage::Storage
    + config::ConfigModule
    + validation::ValidationModule
    + loan::LoanCoordinatorModule
    + orchestrator::SwapOrchestratorModule
    + adapters::BalanceTrackingModule
    + adapters::exchange::ExchangeAdapterModule
    + adapters::market::LendingMarketAdapterModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the engine with the three services it orchestrates.
    ///
    /// # Arguments
    /// - `loan_provider`: Contract lending the source asset for the duration of one swap.
    /// - `exchange`: Contract swapping the borrowed asset into the destination asset.
    /// - `lending_market`: Contract holding the holder's collateral.
    #[init]
    fn init(
        &self,
        loan_provider: &ManagedAddress,
        exchange: &ManagedAddress,
        lending_market: &ManagedAddress,
    ) {
        self.update_service_address(b"loan_provider", loan_provider, self.loan_provider());
        self.update_service_address(b"exchange", exchange, self.exchange());
        self.update_service_address(b"lending_market", lending_market, self.lending_market());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces `amount` worth of the caller's `from_asset` collateral with `to_asset`
    /// collateral, financed by a flash loan of `from_asset`.
    ///
    /// # Purpose and Scope
    /// - Borrows exactly `amount` of `from_asset` from the loan provider.
    /// - Swaps it into `to_asset` and deposits everything received on the caller's behalf.
    /// - Withdraws principal plus the provider's fee from the caller's `from_asset`
    ///   collateral and hands it back to the provider.
    ///
    /// The caller must have approved the engine, in the lending market, to withdraw
    /// at least `getRepaymentQuote(amount)` of `from_asset`.
    ///
    /// # Arguments
    /// - `from_asset`: Collateral asset to reduce.
    /// - `to_asset`: Collateral asset to add.
    /// - `amount`: Amount of `from_asset` to borrow and swap.
    /// - `min_out`: Minimum amount of `to_asset` the swap must deliver.
    ///
    /// # Errors
    /// Any failure reverts the whole transaction, including the swap and the deposit.
    /// - `ERROR_ASSETS_ARE_THE_SAME`, `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`
    /// - `ERROR_SWAP_ALREADY_IN_PROGRESS`
    /// - `ERROR_LOAN_PROVIDER_REJECTED`, `ERROR_FUNDS_NOT_RECEIVED`
    /// - `ERROR_SLIPPAGE_EXCEEDED`, `ERROR_DEPOSIT_REJECTED`, `ERROR_ARITHMETIC_OVERFLOW`
    /// - `ERROR_INSUFFICIENT_COLLATERAL`, `ERROR_REPAYMENT_UNAUTHORIZED`
    #[endpoint(swapCollateral)]
    fn swap_collateral(
        &self,
        from_asset: EgldOrEsdtTokenIdentifier,
        to_asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        min_out: BigUint,
    ) {
        self.require_not_paused();
        self.require_distinct_assets(&from_asset, &to_asset);
        self.require_amount_greater_than_zero(&amount);

        let swap_in_progress = self.swap_in_progress();
        require!(swap_in_progress.is_empty(), ERROR_SWAP_ALREADY_IN_PROGRESS);

        let holder = self.blockchain().get_caller();
        swap_in_progress.set(&holder);

        let instruction = SwapInstruction::new(from_asset, to_asset, amount, min_out);
        self.initiate_loan(
            instruction.loan_request(),
            SwapCallbackParams {
                holder,
                instruction,
            },
        );
    }

    /// Flash loan callback. Only the configured loan provider may call it, and only
    /// while `swapCollateral` is waiting on the loan it requested.
    #[payable]
    #[endpoint(executeOperation)]
    fn execute_operation(
        &self,
        assets: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        fees: ManagedVec<BigUint>,
        initiator: ManagedAddress,
        params: SwapCallbackParams<Self::Api>,
    ) {
        let obligation = self.accept_flash_loan(&assets, &amounts, &fees, &initiator, &params);

        self.run_collateral_swap(SwapProgress::borrowed(
            params.holder,
            params.instruction,
            obligation,
        ));

        self.swap_in_progress().clear();
    }
}
