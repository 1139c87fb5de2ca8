multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSETS_ARE_THE_SAME,
    ERROR_INVALID_SERVICE_ADDRESS,
};

#[multiversx_sc::module]
pub trait ValidationModule {
    /// Ensures an amount is greater than zero.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If the amount is zero.
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// Ensures a swap actually changes the collateral asset.
    ///
    /// # Errors
    /// - `ERROR_ASSETS_ARE_THE_SAME`: If both assets are identical.
    fn require_distinct_assets(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(from_asset != to_asset, ERROR_ASSETS_ARE_THE_SAME);
    }

    /// Ensures a service address is a deployed smart contract.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SERVICE_ADDRESS`: If the address is zero or not a smart contract.
    fn require_service_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_INVALID_SERVICE_ADDRESS);
        require!(
            self.blockchain().is_smart_contract(address),
            ERROR_INVALID_SERVICE_ADDRESS
        );
    }
}
