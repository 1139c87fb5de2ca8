multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the loan provider address
    /// This storage mapper holds the address of the flash loan provider that funds every swap and calls `executeOperation` back.
    #[view(getLoanProvider)]
    #[storage_mapper("loan_provider")]
    fn loan_provider(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the exchange address
    /// This storage mapper holds the address of the exchange used for the single swap of each collateral swap.
    #[view(getExchange)]
    #[storage_mapper("exchange")]
    fn exchange(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the lending market address
    /// This storage mapper holds the address of the lending market where the holder's collateral lives.
    #[view(getLendingMarket)]
    #[storage_mapper("lending_market")]
    fn lending_market(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the holder of the swap in progress
    /// Set by `swapCollateral` right before the loan is requested and cleared by `executeOperation` once the swap completes, so it is always empty between transactions.
    #[view(getSwapInProgress)]
    #[storage_mapper("swap_in_progress")]
    fn swap_in_progress(&self) -> SingleValueMapper<ManagedAddress>;
}
