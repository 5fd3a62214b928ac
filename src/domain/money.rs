use crate::error::VendingError;
use rust_decimal::Decimal;
use std::fmt;

/// Funds currently held by the machine on behalf of the customer.
///
/// Wraps `rust_decimal::Decimal` so price arithmetic stays exact. The only
/// ways to build one are `Balance::ZERO` and a validated `Amount`, and the
/// only subtraction is `checked_sub`, so a `Balance` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Balance(Decimal);

/// A validated, non-negative deposit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, VendingError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(VendingError::InvalidAmount(value))
        }
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `None` when the sum doesn't fit in a `Decimal`.
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Self)
    }

    /// `None` when `cost` exceeds the balance.
    pub fn checked_sub(self, cost: Decimal) -> Option<Self> {
        if cost < Decimal::ZERO || cost > self.0 {
            return None;
        }
        Some(Self(self.0 - cost))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
