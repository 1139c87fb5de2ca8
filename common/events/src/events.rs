#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Emitted once per completed collateral swap. A reverted swap leaves no event behind.
    #[event("collateral_swap")]
    fn collateral_swap_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] source_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] dest_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] principal: &BigUint,
        #[indexed] fee: &BigUint,
        #[indexed] dest_received: &BigUint,
        #[indexed] repaid: &BigUint,
    );

    #[event("service_address_update")]
    fn service_address_update_event(
        &self,
        #[indexed] service: &ManagedBuffer,
        #[indexed] address: &ManagedAddress,
    );

    #[event("flash_loan")]
    fn flash_loan_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
    );

    #[event("swap_executed")]
    fn swap_executed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] from_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] to_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount_in: &BigUint,
        #[indexed] amount_out: &BigUint,
    );

    // `caller` differs from `holder` when the deposit is made on the holder's behalf
    #[event("market_deposit")]
    fn market_deposit_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] new_balance: &BigUint,
    );

    #[event("market_withdraw")]
    fn market_withdraw_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] new_balance: &BigUint,
    );

    #[event("delegation_update")]
    fn delegation_update_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] allowance: &BigUint,
    );
}
