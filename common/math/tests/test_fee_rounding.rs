// Basis point fees and half-up rounding

use common_constants::{BPS, WAD};
use common_math::SharedMathModule;
use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

#[derive(Clone, Copy)]
pub struct MathTester;
impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}
impl SharedMathModule for MathTester {}

#[test]
fn test_bps_fee_exact() {
    let tester = MathTester;

    // 10% of 1.0 token
    let fee = tester.bps_fee(&BigUint::from(WAD), &BigUint::from(1_000u64));
    assert_eq!(fee, BigUint::from(WAD / 10));

    // 0.5% of 100 tokens
    let fee = tester.bps_fee(
        &BigUint::from(100 * WAD),
        &BigUint::from(50u64),
    );
    assert_eq!(fee, BigUint::from(500_000_000_000_000_000u64));

    // Full amount at 100%
    let fee = tester.bps_fee(&BigUint::from(777u64), &BigUint::from(BPS as u64));
    assert_eq!(fee, BigUint::from(777u64));
}

#[test]
fn test_bps_fee_rounding() {
    let tester = MathTester;

    // 1 * 50 / 10_000 = 0.005 rounds to 0
    assert_eq!(
        tester.bps_fee(&BigUint::from(1u64), &BigUint::from(50u64)),
        BigUint::zero()
    );
    // 100 * 50 / 10_000 = 0.5 rounds up to 1
    assert_eq!(
        tester.bps_fee(&BigUint::from(100u64), &BigUint::from(50u64)),
        BigUint::from(1u64)
    );
    // 99 * 50 / 10_000 = 0.495 rounds down to 0
    assert_eq!(
        tester.bps_fee(&BigUint::from(99u64), &BigUint::from(50u64)),
        BigUint::zero()
    );
    // Zero fee
    assert_eq!(
        tester.bps_fee(&BigUint::from(WAD), &BigUint::zero()),
        BigUint::zero()
    );
}

#[test]
fn test_mul_half_up_values_collateral() {
    let tester = MathTester;

    // 2.0 tokens at a price of 1.5 WAD
    let amount = ManagedDecimal::<StaticApi, usize>::from_raw_units(BigUint::from(2 * WAD), 18);
    let price = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(1_500_000_000_000_000_000u64),
        18,
    );
    let value = tester.mul_half_up(&amount, &price, 18);
    assert_eq!(value.into_raw_units(), &BigUint::from(3 * WAD));

    // Weighted by a 75% loan-to-value
    let ltv = tester.to_decimal_bps(BigUint::from(7_500u64));
    let weighted = tester.mul_half_up(&value, &ltv, 18);
    assert_eq!(
        weighted.into_raw_units(),
        &BigUint::from(2_250_000_000_000_000_000u64)
    );
}

#[test]
fn test_rescale_half_up() {
    let tester = MathTester;

    // 1.234567890123456789 -> 1.2346
    let value = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(1_234_567_890_123_456_789u64),
        18,
    );
    let result = tester.rescale_half_up(&value, 4);
    assert_eq!(result.into_raw_units(), &BigUint::from(12_346u64));

    // 0.12345 exactly half rounds up
    let value = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(123_450_000_000_000_000u64),
        18,
    );
    let result = tester.rescale_half_up(&value, 4);
    assert_eq!(result.into_raw_units(), &BigUint::from(1_235u64));

    // Upscaling keeps the value
    let value = tester.to_decimal_bps(BigUint::from(5_000u64));
    let result = tester.rescale_half_up(&value, 18);
    assert_eq!(result.into_raw_units(), &BigUint::from(WAD / 2));
}

#[test]
fn test_constants_as_decimals() {
    let tester = MathTester;

    let wad = tester.to_decimal_wad(BigUint::from(WAD));
    assert_eq!(wad.scale(), 18);
    let bps = tester.to_decimal_bps(BigUint::from(BPS as u64));
    assert_eq!(bps.scale(), 4);
    assert_eq!(tester.wad_zero().into_raw_units(), &BigUint::<StaticApi>::zero());
    assert_eq!(tester.wad_zero().scale(), 18);
}
