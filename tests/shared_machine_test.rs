use rust_decimal_macros::dec;
use vending_machine::application::machine::VendingMachine;
use vending_machine::application::shared::SharedVendingMachine;
use vending_machine::domain::inventory::Inventory;
use vending_machine::domain::item::{Item, VendingItem};
use vending_machine::domain::money::Balance;
use vending_machine::domain::ports::{Dispenser, DispenserBox};
use vending_machine::domain::selection::Selection;
use vending_machine::infrastructure::dispenser::RecordingDispenser;

#[tokio::test]
async fn test_dispensed_lines_match_stock_taken() {
    let inventory: Inventory = [
        (Selection::Water, Item::new(dec!(1.00), 10).unwrap()),
        (Selection::Gum, Item::new(dec!(0.50), 10).unwrap()),
    ]
    .into_iter()
    .collect();
    let recorder = RecordingDispenser::new();
    let shared = SharedVendingMachine::new(VendingMachine::with_dispenser(inventory, recorder.clone()));
    shared.deposit(dec!(6.00)).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..12 {
        let shared = shared.clone();
        let selection = if i % 2 == 0 { Selection::Water } else { Selection::Gum };
        handles.push(tokio::spawn(async move { shared.vend(1, selection).await }));
    }
    for handle in handles {
        let _ = handle.await.unwrap();
    }

    let (balance, inventory) = shared.snapshot().await;
    let dispensed = recorder.dispensed();
    let water = dispensed.iter().filter(|(s, _)| *s == Selection::Water).count() as u32;
    let gum = dispensed.iter().filter(|(s, _)| *s == Selection::Gum).count() as u32;

    assert_eq!(inventory.get(Selection::Water).unwrap().quantity(), 10 - water);
    assert_eq!(inventory.get(Selection::Gum).unwrap().quantity(), 10 - gum);
    let spent = dec!(1.00) * rust_decimal::Decimal::from(water) + dec!(0.50) * rust_decimal::Decimal::from(gum);
    assert_eq!(balance.value(), dec!(6.00) - spent);
    assert!(balance >= Balance::ZERO);
}

#[test]
fn test_boxed_dispenser() {
    let recorder = RecordingDispenser::new();
    let mut boxed: DispenserBox = Box::new(recorder.clone());
    boxed.dispense(Selection::Cookie, 2);

    let inventory: Inventory = [(Selection::Cookie, Item::new(dec!(0.75), 3).unwrap())]
        .into_iter()
        .collect();
    let mut machine = VendingMachine::with_dispenser(inventory, boxed);
    machine.deposit(dec!(0.75)).unwrap();
    machine.vend(1, Selection::Cookie).unwrap();

    assert_eq!(
        recorder.dispensed(),
        vec![(Selection::Cookie, 2), (Selection::Cookie, 1)]
    );
}
