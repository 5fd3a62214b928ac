use super::selection::Selection;

/// Physical side of a vend: releases product once the ledger has committed.
///
/// Called only after balance and stock have both been updated, so an
/// implementation never observes a half-applied vend.
pub trait Dispenser: Send {
    fn dispense(&mut self, selection: Selection, quantity: u32);
}

pub type DispenserBox = Box<dyn Dispenser>;

impl Dispenser for DispenserBox {
    fn dispense(&mut self, selection: Selection, quantity: u32) {
        (**self).dispense(selection, quantity)
    }
}
