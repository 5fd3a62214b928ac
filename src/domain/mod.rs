//! Domain model: selections, items, inventory, money and the ports the
//! ledger talks to.

pub mod inventory;
pub mod item;
pub mod money;
pub mod ports;
pub mod selection;
