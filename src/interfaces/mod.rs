//! Boundary adapters: catalog loading on the way in, CSV on the way out, and
//! command-line orders.

pub mod catalog;
pub mod csv;
pub mod order;
