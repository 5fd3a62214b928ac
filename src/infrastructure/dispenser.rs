use crate::domain::ports::Dispenser;
use crate::domain::selection::Selection;
use std::sync::{Arc, Mutex};

/// Dispenser used when no hardware is attached. Vends are purely ledger
/// operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispenser;

impl Dispenser for NoopDispenser {
    fn dispense(&mut self, _selection: Selection, _quantity: u32) {}
}

/// A thread-safe dispenser that remembers every line it released.
///
/// Clones share the same log, so a handle kept outside the machine sees
/// what the machine dispensed.
#[derive(Debug, Default, Clone)]
pub struct RecordingDispenser {
    dispensed: Arc<Mutex<Vec<(Selection, u32)>>>,
}

impl RecordingDispenser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispensed lines, oldest first.
    pub fn dispensed(&self) -> Vec<(Selection, u32)> {
        self.dispensed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Dispenser for RecordingDispenser {
    fn dispense(&mut self, selection: Selection, quantity: u32) {
        self.dispensed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((selection, quantity));
    }
}
