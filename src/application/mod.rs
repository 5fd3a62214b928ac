//! Application layer: the vending ledger and its shared, lock-protected handle.
//!
//! `VendingMachine` is synchronous and single-owner. `SharedVendingMachine`
//! wraps it in a `tokio` mutex for embeddings that vend from several tasks.

pub mod machine;
pub mod shared;
