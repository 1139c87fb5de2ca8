use common_structs::MarketAssetConfig;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Assets accepted as collateral, in listing order
    #[view(getAssets)]
    #[storage_mapper("assets")]
    fn assets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Price, loan-to-value and decimals of a listed asset
    #[view(getAssetConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketAssetConfig<Self::Api>>;

    /// Collateral-token balance of a holder for one asset
    #[view(collateralBalance)]
    #[storage_mapper("collateral")]
    fn collateral(
        &self,
        holder: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Amount of `asset` collateral that `delegate` may still withdraw on behalf of `holder`
    #[view(withdrawalAllowance)]
    #[storage_mapper("withdrawal_allowance")]
    fn withdrawal_allowance(
        &self,
        holder: &ManagedAddress,
        delegate: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Outstanding debt of a holder, in WAD
    #[view(getDebt)]
    #[storage_mapper("debt")]
    fn debt(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
