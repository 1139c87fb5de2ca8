multiversx_sc::imports!();

use common_constants::FLASH_LOAN_CALLBACK_ENDPOINT;
use common_errors::{
    ERROR_FUNDS_NOT_RECEIVED, ERROR_INVALID_LOAN_INITIATOR, ERROR_LOAN_PROVIDER_REJECTED,
    ERROR_NO_SWAP_IN_PROGRESS, ERROR_UNAUTHORIZED_LOAN_PROVIDER, ERROR_UNSUPPORTED_BATCH_LOAN,
};
use common_proxies::proxy_loan_provider;
use common_structs::{LoanObligation, LoanRequest, SwapCallbackParams};

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait LoanCoordinatorModule: storage::Storage + validation::ValidationModule {
    /// Requests a single-leg flash loan with the engine as receiver.
    ///
    /// The provider sends the funds and calls `executeOperation` back before this
    /// returns. It fails the whole transaction if principal plus fee is not back in
    /// its hands by then.
    ///
    /// The callback clears the in-flight marker once the swap is done, so a provider
    /// that returns without calling back fails with `ERROR_LOAN_PROVIDER_REJECTED`.
    ///
    /// Batched loans are not requested: the callback accepts sequences only so it
    /// stays compatible with batch-shaped provider APIs.
    fn initiate_loan(
        &self,
        request: LoanRequest<Self::Api>,
        params: SwapCallbackParams<Self::Api>,
    ) {
        self.require_amount_greater_than_zero(&request.principal);

        let mut assets = ManagedVec::new();
        assets.push(request.asset);
        let mut amounts = ManagedVec::new();
        amounts.push(request.principal);

        let mut arguments = ManagedArgBuffer::new();
        arguments.push_arg(&params);

        self.tx()
            .to(self.loan_provider().get())
            .typed(proxy_loan_provider::LoanProviderProxy)
            .flash_loan(
                self.blockchain().get_sc_address(),
                ManagedBuffer::new_from_bytes(FLASH_LOAN_CALLBACK_ENDPOINT),
                assets,
                amounts,
                arguments,
            )
            .sync_call();

        require!(
            self.swap_in_progress().is_empty(),
            ERROR_LOAN_PROVIDER_REJECTED
        );
    }

    /// Validates a flash loan callback and returns the obligation it carries.
    ///
    /// # Errors
    /// - `ERROR_UNAUTHORIZED_LOAN_PROVIDER`: Caller is not the configured provider.
    /// - `ERROR_INVALID_LOAN_INITIATOR`: The loan was requested by someone else.
    /// - `ERROR_NO_SWAP_IN_PROGRESS`: No `swapCollateral` is waiting on this holder.
    /// - `ERROR_UNSUPPORTED_BATCH_LOAN`: More than one leg.
    /// - `ERROR_FUNDS_NOT_RECEIVED`: The leg or the attached payment differs from the request.
    fn accept_flash_loan(
        &self,
        assets: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: &ManagedVec<BigUint>,
        fees: &ManagedVec<BigUint>,
        initiator: &ManagedAddress,
        params: &SwapCallbackParams<Self::Api>,
    ) -> LoanObligation<Self::Api> {
        require!(
            self.blockchain().get_caller() == self.loan_provider().get(),
            ERROR_UNAUTHORIZED_LOAN_PROVIDER
        );
        require!(
            *initiator == self.blockchain().get_sc_address(),
            ERROR_INVALID_LOAN_INITIATOR
        );

        let swap_in_progress = self.swap_in_progress();
        require!(
            !swap_in_progress.is_empty() && swap_in_progress.get() == params.holder,
            ERROR_NO_SWAP_IN_PROGRESS
        );

        require!(
            assets.len() == 1 && amounts.len() == 1 && fees.len() == 1,
            ERROR_UNSUPPORTED_BATCH_LOAN
        );

        let obligation = LoanObligation::new(
            EgldOrEsdtTokenIdentifier::clone(&assets.get(0)),
            BigUint::clone(&amounts.get(0)),
            BigUint::clone(&fees.get(0)),
        );
        require!(
            obligation.matches(&params.instruction.loan_request()),
            ERROR_FUNDS_NOT_RECEIVED
        );

        self.require_loan_received(&obligation);

        obligation
    }

    /// The provider must have attached exactly the principal, as a single payment.
    fn require_loan_received(&self, obligation: &LoanObligation<Self::Api>) {
        let payments = self.call_value().all_transfers();
        require!(payments.len() == 1, ERROR_FUNDS_NOT_RECEIVED);

        let payment = payments.get(0);
        require!(
            payment.token_identifier == obligation.asset
                && payment.token_nonce == 0
                && payment.amount == obligation.principal,
            ERROR_FUNDS_NOT_RECEIVED
        );

        require!(
            self.blockchain().get_sc_balance(&obligation.asset, 0) >= obligation.principal,
            ERROR_FUNDS_NOT_RECEIVED
        );
    }

    /// Fee the provider currently charges for borrowing `amount`.
    fn quote_loan_fee(&self, amount: &BigUint) -> BigUint {
        self.tx()
            .to(self.loan_provider().get())
            .typed(proxy_loan_provider::LoanProviderProxy)
            .flash_loan_fee(amount)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
