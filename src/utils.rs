/// Integer type usable as a pool amount.
///
/// Implemented for the 64-bit signed and unsigned integers so both carry
/// identical semantics. Amounts are expected to be non-negative; the
/// positivity checks live in the operations that consume them.
pub trait Amount: Copy + PartialEq + PartialOrd + Sized {
    const ZERO: Self;

    /// Widen a ratio into the amount type, losslessly.
    fn from_ratio(ratio: u16) -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Compute `floor(self * mul / div)` through a 128-bit intermediate.
    ///
    /// The full product of two 64-bit amounts always fits in 128 bits, so
    /// the only failure is the quotient not fitting back into the native
    /// width, which returns `None`. Panics if `div` is zero.
    fn mul_div_floor(self, mul: Self, div: Self) -> Option<Self>;
}

impl Amount for u64 {
    const ZERO: Self = 0;

    fn from_ratio(ratio: u16) -> Self {
        u64::from(ratio)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        u64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        u64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        u64::checked_mul(self, rhs)
    }

    fn mul_div_floor(self, mul: Self, div: Self) -> Option<Self> {
        let wide = u128::from(self) * u128::from(mul);
        u64::try_from(wide / u128::from(div)).ok()
    }
}

impl Amount for i64 {
    const ZERO: Self = 0;

    fn from_ratio(ratio: u16) -> Self {
        i64::from(ratio)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn mul_div_floor(self, mul: Self, div: Self) -> Option<Self> {
        let wide = i128::from(self) * i128::from(mul);
        i64::try_from(wide / i128::from(div)).ok()
    }
}
