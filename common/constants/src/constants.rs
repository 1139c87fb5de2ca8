#![no_std]

/// 1.0 in 18-decimal fixed point, the scale of market prices and debt
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Width of a token amount; every checked amount operation is bounded by 2^AMOUNT_BITS - 1.
pub const AMOUNT_BITS: u32 = 256;

/// Endpoint the loan provider calls back once the borrowed funds are sent.
pub const FLASH_LOAN_CALLBACK_ENDPOINT: &[u8] = b"executeOperation";
