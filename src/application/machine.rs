use crate::domain::inventory::Inventory;
use crate::domain::item::{Item, VendingItem};
use crate::domain::money::{Amount, Balance};
use crate::domain::ports::Dispenser;
use crate::domain::selection::Selection;
use crate::error::{Result, VendingError};
use crate::infrastructure::dispenser::NoopDispenser;
use rust_decimal::Decimal;

/// What a successful vend released and charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vend {
    pub selection: Selection,
    pub quantity: u32,
    pub total: Decimal,
}

/// The vending ledger.
///
/// `VendingMachine` owns the inventory and the deposited balance and is the
/// only thing that mutates either. Every operation either applies all of its
/// changes or none of them.
#[derive(Debug, Clone)]
pub struct VendingMachine<D: Dispenser = NoopDispenser> {
    inventory: Inventory,
    amount_deposited: Balance,
    dispenser: D,
}

impl VendingMachine {
    /// Creates a machine with an empty balance.
    pub fn new(inventory: Inventory) -> Self {
        Self::with_dispenser(inventory, NoopDispenser)
    }

    /// Creates a machine that already holds `balance`.
    pub fn with_balance(inventory: Inventory, balance: Amount) -> Self {
        Self {
            inventory,
            amount_deposited: balance.into(),
            dispenser: NoopDispenser,
        }
    }
}

impl<D: Dispenser> VendingMachine<D> {
    /// Creates a machine with an empty balance that reports vends to `dispenser`.
    pub fn with_dispenser(inventory: Inventory, dispenser: D) -> Self {
        Self {
            inventory,
            amount_deposited: Balance::ZERO,
            dispenser,
        }
    }

    /// Keeps inventory and balance, reporting future vends to `dispenser`.
    pub fn dispensing_to<E: Dispenser>(self, dispenser: E) -> VendingMachine<E> {
        VendingMachine {
            inventory: self.inventory,
            amount_deposited: self.amount_deposited,
            dispenser,
        }
    }

    pub fn amount_deposited(&self) -> Balance {
        self.amount_deposited
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn item(&self, selection: Selection) -> Option<&Item> {
        self.inventory.get(selection)
    }

    /// The full catalog this machine understands, stocked or not.
    pub fn selections(&self) -> &'static [Selection] {
        &Selection::ALL
    }

    /// Adds `amount` to the deposited balance. Negative amounts, and amounts
    /// that would overflow the balance, are rejected.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        let validated = Amount::new(amount)?;
        self.amount_deposited = self
            .amount_deposited
            .checked_add(validated)
            .ok_or(VendingError::BalanceOverflow(amount))?;
        Ok(())
    }

    /// Sells `quantity` units of `selection`.
    ///
    /// Checks run in order: quantity, selection, stock, funds. The first failing
    /// check is returned and nothing is changed.
    pub fn vend(&mut self, quantity: u32, selection: Selection) -> Result<Vend> {
        if quantity == 0 {
            return Err(VendingError::InvalidQuantity);
        }

        let mut item = *self
            .inventory
            .get(selection)
            .ok_or(VendingError::InvalidSelection(selection))?;

        if item.quantity() < quantity {
            return Err(VendingError::OutOfStock {
                selection,
                requested: quantity,
                available: item.quantity(),
            });
        }

        let total = item
            .price()
            .checked_mul(Decimal::from(quantity))
            .ok_or(VendingError::PriceOverflow {
                selection,
                quantity,
            })?;

        let remaining =
            self.amount_deposited
                .checked_sub(total)
                .ok_or_else(|| VendingError::InsufficientFunds {
                    required: total - self.amount_deposited.value(),
                })?;

        self.amount_deposited = remaining;
        item.set_quantity(item.quantity() - quantity);
        self.inventory.insert(selection, item);
        self.dispenser.dispense(selection, quantity);

        Ok(Vend {
            selection,
            quantity,
            total,
        })
    }
}
