#![no_std]

use core::cmp::Ordering;

use common_constants::{AMOUNT_BITS, BPS_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        // Half-up rounding at precision
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_bps(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }

    /// `amount * fee_bps / BPS`, rounded half up, in the amount's own units.
    fn bps_fee(&self, amount: &BigUint, fee_bps: &BigUint) -> BigUint {
        let fee = self.mul_half_up(
            &self.to_decimal(amount.clone(), 0),
            &self.to_decimal_bps(fee_bps.clone()),
            BPS_PRECISION,
        );

        self.rescale_half_up(&fee, 0).into_raw_units().clone()
    }

    /// Largest representable token amount, `2^AMOUNT_BITS - 1`.
    fn max_amount(&self) -> BigUint {
        BigUint::from(2u64).pow(AMOUNT_BITS) - BigUint::from(1u64)
    }

    fn is_within_amount_range(&self, value: &BigUint) -> bool {
        value <= &self.max_amount()
    }

    fn checked_add_amount(&self, a: &BigUint, b: &BigUint) -> Option<BigUint> {
        let sum = a + b;
        if !self.is_within_amount_range(&sum) {
            return None;
        }

        Some(sum)
    }

    fn checked_sub_amount(&self, a: &BigUint, b: &BigUint) -> Option<BigUint> {
        if b > a {
            return None;
        }

        Some(a - b)
    }

}
