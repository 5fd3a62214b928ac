use crate::domain::selection::Selection;
use crate::error::VendingError;
use std::str::FromStr;

/// A request to vend, written `selection[:quantity]` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub selection: Selection,
    pub quantity: u32,
}

impl FromStr for Order {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VendingError::InvalidOrder(s.to_string());
        let (name, quantity) = match s.split_once(':') {
            Some((name, quantity)) => (name, quantity.trim().parse().map_err(|_| invalid())?),
            None => (s, 1),
        };
        let selection = name.trim().parse().map_err(|_| invalid())?;
        Ok(Order {
            selection,
            quantity,
        })
    }
}
