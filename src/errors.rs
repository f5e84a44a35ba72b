use anchor_lang::prelude::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid payment amount")]
    InvalidAmount,
    #[msg("Insufficient payment amount")]
    InsufficientPayment,
    #[msg("Insufficient deposit amount")]
    InsufficientDeposit,
    #[msg("Insufficient supply amount")]
    InsufficientSupply,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
}
