use rust_decimal::Decimal;

/// Capability shared by anything the machine can stock.
pub trait VendingItem {
    fn price(&self) -> Decimal;
    fn quantity(&self) -> u32;
    fn set_quantity(&mut self, quantity: u32);
}

/// One stocked product line.
///
/// `price` is fixed at construction; only `quantity` changes, and only when
/// the ledger vends from this line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    price: Decimal,
    quantity: u32,
}

impl Item {
    /// Returns `None` for a negative price.
    pub fn new(price: Decimal, quantity: u32) -> Option<Self> {
        (price >= Decimal::ZERO).then_some(Self { price, quantity })
    }
}

impl VendingItem for Item {
    fn price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
