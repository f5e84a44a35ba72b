use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::ErrorCode;
use crate::liquidity;
use crate::utils::Amount;

/// Snapshot of a pool's paired balances.
///
/// The calculator functions are stateless; this carries the
/// `(deposit, supply)` pair between calls and folds each operation's delta
/// back in for callers that want the bookkeeping done for them. The
/// snapshot is left untouched when an operation fails.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pool<T> {
    pub deposit: T,
    pub supply: T,
}

impl<T: Amount> Pool<T> {
    pub fn new(deposit: T, supply: T) -> Self {
        Self { deposit, supply }
    }

    /// Issue supply for a payment and apply the delta to the snapshot
    pub fn issue(&mut self, payment: T, ratio: u16) -> Result<T, ErrorCode> {
        let issued = liquidity::issue(payment, self.deposit, self.supply, ratio)?;
        let deposit = self
            .deposit
            .checked_add(payment)
            .ok_or(ErrorCode::MathOverflow)?;
        let supply = self
            .supply
            .checked_add(issued)
            .ok_or(ErrorCode::MathOverflow)?;
        self.deposit = deposit;
        self.supply = supply;
        Ok(issued)
    }

    /// Retire supply and apply the delta to the snapshot
    pub fn retire(&mut self, payment: T) -> Result<T, ErrorCode> {
        let returned = liquidity::retire(payment, self.deposit, self.supply)?;
        let deposit = self
            .deposit
            .checked_sub(returned)
            .ok_or(ErrorCode::MathUnderflow)?;
        let supply = self
            .supply
            .checked_sub(payment)
            .ok_or(ErrorCode::MathUnderflow)?;
        self.deposit = deposit;
        self.supply = supply;
        Ok(returned)
    }
}
