use super::machine::{Vend, VendingMachine};
use crate::domain::inventory::Inventory;
use crate::domain::money::Balance;
use crate::domain::ports::Dispenser;
use crate::domain::selection::Selection;
use crate::error::Result;
use crate::infrastructure::dispenser::NoopDispenser;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A machine shared between tasks.
///
/// Every call holds one exclusive lock across the whole check-then-write
/// sequence, so two concurrent vends can never both pass the stock or funds
/// check against the same state.
pub struct SharedVendingMachine<D: Dispenser = NoopDispenser> {
    inner: Arc<Mutex<VendingMachine<D>>>,
}

impl<D: Dispenser> Clone for SharedVendingMachine<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Dispenser> SharedVendingMachine<D> {
    pub fn new(machine: VendingMachine<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub async fn deposit(&self, amount: Decimal) -> Result<()> {
        self.inner.lock().await.deposit(amount)
    }

    pub async fn vend(&self, quantity: u32, selection: Selection) -> Result<Vend> {
        self.inner.lock().await.vend(quantity, selection)
    }

    /// A consistent copy of balance and inventory taken under the lock.
    pub async fn snapshot(&self) -> (Balance, Inventory) {
        let machine = self.inner.lock().await;
        (machine.amount_deposited(), machine.inventory().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{Item, VendingItem};
    use crate::domain::money::Amount;
    use crate::error::VendingError;
    use rust_decimal_macros::dec;

    fn machine(stock: u32, deposited: Decimal) -> SharedVendingMachine {
        let inventory: Inventory = [(Selection::Soda, Item::new(dec!(1.50), stock).unwrap())]
            .into_iter()
            .collect();
        SharedVendingMachine::new(VendingMachine::with_balance(
            inventory,
            Amount::new(deposited).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_concurrent_vends_never_overdraw_stock() {
        let shared = machine(1, dec!(100.0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.vend(1, Selection::Soda).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert!(matches!(e, VendingError::OutOfStock { .. })),
            }
        }

        assert_eq!(successes, 1);
        let (balance, inventory) = shared.snapshot().await;
        assert_eq!(balance.value(), dec!(98.50));
        assert_eq!(inventory.get(Selection::Soda).unwrap().quantity(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_vends_never_overdraw_balance() {
        let shared = machine(50, dec!(3.00));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.vend(1, Selection::Soda).await.is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 2);
        let (balance, inventory) = shared.snapshot().await;
        assert_eq!(balance, Balance::ZERO);
        assert_eq!(inventory.get(Selection::Soda).unwrap().quantity(), 48);
    }

    #[tokio::test]
    async fn test_shared_deposit() {
        let shared = machine(1, dec!(0));
        shared.deposit(dec!(2.00)).await.unwrap();
        assert!(shared.deposit(dec!(-1)).await.is_err());

        let (balance, _) = shared.snapshot().await;
        assert_eq!(balance.value(), dec!(2.00));
    }
}
