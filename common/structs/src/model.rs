#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A single uncollateralized loan leg requested from the loan provider.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct LoanRequest<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub principal: BigUint<M>,
}

/// What the loan provider expects back for one leg. The fee is the provider's,
/// never recomputed by the receiver.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct LoanObligation<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub principal: BigUint<M>,
    pub fee: BigUint<M>,
}

impl<M: ManagedTypeApi> LoanObligation<M> {
    pub fn new(asset: EgldOrEsdtTokenIdentifier<M>, principal: BigUint<M>, fee: BigUint<M>) -> Self {
        LoanObligation {
            asset,
            principal,
            fee,
        }
    }

    pub fn matches(&self, request: &LoanRequest<M>) -> bool {
        self.asset == request.asset && self.principal == request.principal
    }
}

/// Caller intent for one collateral swap. `min_dest_amount` is a floor, not a target.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct SwapInstruction<M: ManagedTypeApi> {
    pub source_asset: EgldOrEsdtTokenIdentifier<M>,
    pub dest_asset: EgldOrEsdtTokenIdentifier<M>,
    pub source_amount: BigUint<M>,
    pub min_dest_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> SwapInstruction<M> {
    pub fn new(
        source_asset: EgldOrEsdtTokenIdentifier<M>,
        dest_asset: EgldOrEsdtTokenIdentifier<M>,
        source_amount: BigUint<M>,
        min_dest_amount: BigUint<M>,
    ) -> Self {
        SwapInstruction {
            source_asset,
            dest_asset,
            source_amount,
            min_dest_amount,
        }
    }

    /// The loan is always for exactly the amount to be swapped.
    pub fn loan_request(&self) -> LoanRequest<M> {
        LoanRequest {
            asset: self.source_asset.clone(),
            principal: self.source_amount.clone(),
        }
    }
}

/// Opaque payload forwarded by the loan provider to the flash loan callback.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct SwapCallbackParams<M: ManagedTypeApi> {
    pub holder: ManagedAddress<M>,
    pub instruction: SwapInstruction<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapPhase {
    Borrowed,
    Swapped,
    Deposited,
    Sized,
    Withdrawn,
    Repaid,
}

impl SwapPhase {
    pub fn next(self) -> Option<SwapPhase> {
        match self {
            SwapPhase::Borrowed => Some(SwapPhase::Swapped),
            SwapPhase::Swapped => Some(SwapPhase::Deposited),
            SwapPhase::Deposited => Some(SwapPhase::Sized),
            SwapPhase::Sized => Some(SwapPhase::Withdrawn),
            SwapPhase::Withdrawn => Some(SwapPhase::Repaid),
            SwapPhase::Repaid => None,
        }
    }
}

/// In-memory state of one collateral swap. Created inside the flash loan
/// callback and dropped when it returns.
pub struct SwapProgress<M: ManagedTypeApi> {
    pub holder: ManagedAddress<M>,
    pub instruction: SwapInstruction<M>,
    pub obligation: LoanObligation<M>,
    pub phase: SwapPhase,
    pub dest_received: BigUint<M>,
    pub repay_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> SwapProgress<M> {
    pub fn borrowed(
        holder: ManagedAddress<M>,
        instruction: SwapInstruction<M>,
        obligation: LoanObligation<M>,
    ) -> Self {
        SwapProgress {
            holder,
            instruction,
            obligation,
            phase: SwapPhase::Borrowed,
            dest_received: BigUint::zero(),
            repay_amount: BigUint::zero(),
        }
    }

    /// Moves to `next` only when it is the immediate successor of the current phase.
    pub fn try_advance(&mut self, next: SwapPhase) -> bool {
        if self.phase.next() != Some(next) {
            return false;
        }

        self.phase = next;
        true
    }

    pub fn is_repaid(&self) -> bool {
        self.phase == SwapPhase::Repaid
    }
}

/// Listing of an asset inside the lending market.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct MarketAssetConfig<M: ManagedTypeApi> {
    pub price_wad: BigUint<M>,
    pub ltv_bps: BigUint<M>,
    pub decimals: usize,
}

impl<M: ManagedTypeApi> MarketAssetConfig<M> {
    pub fn is_collateralizable(&self) -> bool {
        self.ltv_bps > BigUint::zero()
    }
}

/// Fixed conversion rate of an exchange pair: `amount_out = amount_in * numerator / denominator`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct ExchangeRate<M: ManagedTypeApi> {
    pub numerator: BigUint<M>,
    pub denominator: BigUint<M>,
}

impl<M: ManagedTypeApi> ExchangeRate<M> {
    pub fn amount_out(&self, amount_in: &BigUint<M>) -> BigUint<M> {
        amount_in * &self.numerator / &self.denominator
    }
}
