#![no_std]

pub static ERROR_FUNDS_NOT_RECEIVED: &[u8] = b"Borrowed funds were not received.";

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Swap output is below the minimum amount.";

pub static ERROR_DEPOSIT_REJECTED: &[u8] = b"Deposit rejected by the lending market.";

pub static ERROR_ARITHMETIC_OVERFLOW: &[u8] = b"Arithmetic overflow.";

pub static ERROR_ARITHMETIC_UNDERFLOW: &[u8] = b"Arithmetic underflow.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_REPAYMENT_UNAUTHORIZED: &[u8] =
    b"Holder did not authorize the withdrawal needed for repayment.";

pub static ERROR_LOAN_PROVIDER_REJECTED: &[u8] = b"Loan provider rejected the request.";

pub static ERROR_INVALID_FLASHLOAN_REPAYMENT: &[u8] = b"Invalid flash loan repayment.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ASSETS_ARE_THE_SAME: &[u8] = b"The assets have to be different.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_INVALID_LTV: &[u8] = b"Loan-to-value has to be at most 100%.";

pub static ERROR_INVALID_SERVICE_ADDRESS: &[u8] = b"Address is zero or not a smart contract.";

pub static ERROR_UNAUTHORIZED_LOAN_PROVIDER: &[u8] = b"Caller is not the configured loan provider.";

pub static ERROR_INVALID_LOAN_INITIATOR: &[u8] = b"Flash loan was not initiated by this contract.";

pub static ERROR_NO_SWAP_IN_PROGRESS: &[u8] = b"No collateral swap in progress for this holder.";

pub static ERROR_SWAP_ALREADY_IN_PROGRESS: &[u8] = b"A collateral swap is already in progress.";

pub static ERROR_UNSUPPORTED_BATCH_LOAN: &[u8] = b"Only single asset flash loans are supported.";

pub static ERROR_INVALID_SWAP_PHASE: &[u8] = b"Invalid collateral swap phase transition.";

pub static ERROR_INVALID_FEE: &[u8] = b"Fee has to be at most 100%.";

pub static ERROR_PAIR_NOT_CONFIGURED: &[u8] = b"No rate configured for this pair.";

pub static ERROR_INVALID_RATE: &[u8] = b"Rate numerator and denominator have to be positive.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";
