use crate::domain::inventory::Inventory;
use crate::domain::item::VendingItem;
use crate::domain::money::Balance;
use std::io::Write;

/// Writes machine state as CSV.
///
/// One `selection,price,quantity` row per stocked item, in catalog order,
/// followed by a `balance,<amount>` row.
pub struct InventoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(sink);
        Self { writer }
    }

    pub fn write_state(&mut self, inventory: &Inventory, balance: Balance) -> csv::Result<()> {
        self.writer.write_record(["selection", "price", "quantity"])?;
        for (selection, item) in inventory.sorted() {
            self.writer.write_record([
                selection.key().to_string(),
                item.price().normalize().to_string(),
                item.quantity().to_string(),
            ])?;
        }
        self.writer
            .write_record(["balance".to_string(), balance.to_string()])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Item;
    use crate::domain::money::Amount;
    use crate::domain::selection::Selection;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_state() {
        let inventory: Inventory = [
            (Selection::Gum, Item::new(dec!(0.50), 7).unwrap()),
            (Selection::Soda, Item::new(dec!(1.50), 3).unwrap()),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        InventoryWriter::new(&mut out)
            .write_state(&inventory, Amount::new(dec!(7.00)).unwrap().into())
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "selection,price,quantity\nsoda,1.5,3\ngum,0.5,7\nbalance,7\n"
        );
    }
}
