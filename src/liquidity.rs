use crate::errors::ErrorCode;
use crate::utils::Amount;

/// Liquidity supply operations for a REX-style pool
///
/// This module provides mathematical functions for constant-ratio pool
/// operations including issuing and retiring liquidity supply.

/// Calculate the amount of liquidity supply to issue for a payment
///
/// # Arguments
/// * `payment` - Amount of base asset being added to the pool
/// * `deposit` - Current base asset balance held by the pool
/// * `supply` - Current liquidity supply outstanding
/// * `ratio` - Scaling factor applied only when initializing supply from zero
///
/// # Returns
/// The amount of liquidity supply to issue
///
/// Rounds down, so the issued amount never exceeds the exact proportional
/// share. Panics on division by zero if `deposit` is zero while `supply` is
/// nonzero; that pair represents a corrupted pool and is a caller contract
/// violation.
pub fn issue<T: Amount>(payment: T, deposit: T, supply: T, ratio: u16) -> Result<T, ErrorCode> {
    if payment <= T::ZERO {
        return Err(ErrorCode::InvalidAmount);
    }

    // initialize if no supply
    if supply == T::ZERO {
        return payment
            .checked_mul(T::from_ratio(ratio))
            .ok_or(ErrorCode::MathOverflow);
    }

    let s0 = deposit;
    let s1 = s0.checked_add(payment).ok_or(ErrorCode::MathOverflow)?;
    let r0 = supply;
    let r1 = s1.mul_div_floor(r0, s0).ok_or(ErrorCode::MathOverflow)?;

    r1.checked_sub(r0).ok_or(ErrorCode::MathUnderflow)
}

/// Calculate the amount of base asset to return for retired supply
///
/// # Arguments
/// * `payment` - Amount of liquidity supply being redeemed
/// * `deposit` - Current base asset balance held by the pool
/// * `supply` - Current liquidity supply outstanding
///
/// # Returns
/// The amount of base asset to return
///
/// Rounds down, so the redemption never returns more base asset than the
/// exact proportional share.
pub fn retire<T: Amount>(payment: T, deposit: T, supply: T) -> Result<T, ErrorCode> {
    if payment <= T::ZERO {
        return Err(ErrorCode::InsufficientPayment);
    }
    if deposit <= T::ZERO {
        return Err(ErrorCode::InsufficientDeposit);
    }
    if supply <= T::ZERO {
        return Err(ErrorCode::InsufficientSupply);
    }

    payment.mul_div_floor(deposit, supply).ok_or(ErrorCode::MathOverflow)
}
