multiversx_sc::imports!();

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Sets the flash loan provider contract address.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SERVICE_ADDRESS`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setLoanProvider)]
    fn set_loan_provider(&self, address: ManagedAddress) {
        self.update_service_address(b"loan_provider", &address, self.loan_provider());
    }

    /// Sets the exchange contract address.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SERVICE_ADDRESS`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setExchange)]
    fn set_exchange(&self, address: ManagedAddress) {
        self.update_service_address(b"exchange", &address, self.exchange());
    }

    /// Sets the lending market contract address.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SERVICE_ADDRESS`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setLendingMarket)]
    fn set_lending_market(&self, address: ManagedAddress) {
        self.update_service_address(b"lending_market", &address, self.lending_market());
    }

    fn update_service_address(
        &self,
        service: &[u8],
        address: &ManagedAddress,
        mapper: SingleValueMapper<ManagedAddress>,
    ) {
        self.require_service_address(address);
        mapper.set(address);
        self.service_address_update_event(&ManagedBuffer::new_from_bytes(service), address);
    }
}
