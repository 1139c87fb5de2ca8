use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const ONE: u128 = 1_000_000_000_000_000_000; // 1 token with 18 decimals
pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const ASSET_A: TestTokenIdentifier = TestTokenIdentifier::new("ASSETA-123456");
pub const ASSET_A_DECIMALS: usize = 18;
pub const ASSET_A_PRICE_WAD: u128 = WAD; // 1.0

pub const ASSET_B: TestTokenIdentifier = TestTokenIdentifier::new("ASSETB-123456");
pub const ASSET_B_DECIMALS: usize = 18;
pub const ASSET_B_PRICE_WAD: u128 = WAD / 50; // 0.02, so 50 B are worth 1 A

pub const UNLISTED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("UNLISTED-123456");

pub const LTV_BPS: u64 = 7_500; // 75%
pub const FLASH_LOAN_FEE_BPS: u64 = 1_000; // 10%

// A -> B at 50 B per A
pub const RATE_A_TO_B_NUMERATOR: u64 = 50;
pub const RATE_A_TO_B_DENOMINATOR: u64 = 1;

pub const PRINCIPAL: u128 = ONE;
pub const FLASH_LOAN_FEE: u128 = ONE / 10;
pub const REPAYMENT: u128 = PRINCIPAL + FLASH_LOAN_FEE;
pub const SWAP_OUTPUT: u128 = 50 * ONE;

pub const PROVIDER_RESERVE: u128 = 1_000 * ONE;
pub const EXCHANGE_RESERVE: u128 = 100_000 * ONE;
pub const HOLDER_COLLATERAL: u128 = 10 * ONE;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const HOLDER_ADDRESS: TestAddress = TestAddress::new("holder");
pub const OTHER_ADDRESS: TestAddress = TestAddress::new("other");

pub const COLLATERAL_SWAP_PATH: MxscPath = MxscPath::new("output/collateral-swap.mxsc.json");
pub const FLASH_MOCK_PATH: MxscPath = MxscPath::new("../flash_mock/output/flash-mock.mxsc.json");
pub const SWAP_MOCK_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");
pub const MARKET_MOCK_PATH: MxscPath =
    MxscPath::new("../market_mock/output/market-mock.mxsc.json");
