use super::item::Item;
use super::selection::Selection;
use std::collections::HashMap;
use std::collections::hash_map;

/// Stocked items keyed by selection. Keys are unique; iteration order is not
/// meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: HashMap<Selection, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stocks `item` under `selection`, returning the record it replaced.
    pub fn insert(&mut self, selection: Selection, item: Item) -> Option<Item> {
        self.items.insert(selection, item)
    }

    pub fn get(&self, selection: Selection) -> Option<&Item> {
        self.items.get(&selection)
    }

    pub fn contains(&self, selection: Selection) -> bool {
        self.items.contains_key(&selection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Selection, Item> {
        self.items.iter()
    }

    /// Entries sorted in catalog order.
    pub fn sorted(&self) -> Vec<(Selection, Item)> {
        let mut entries: Vec<_> = self.items.iter().map(|(s, i)| (*s, *i)).collect();
        entries.sort_by_key(|(selection, _)| *selection);
        entries
    }
}

impl FromIterator<(Selection, Item)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (Selection, Item)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<Selection, Item>> for Inventory {
    fn from(items: HashMap<Selection, Item>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::VendingItem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insert_replaces_existing_record() {
        let mut inventory = Inventory::new();
        inventory.insert(Selection::Soda, Item::new(dec!(1.5), 5).unwrap());
        let old = inventory.insert(Selection::Soda, Item::new(dec!(1.5), 3).unwrap());

        assert_eq!(old.map(|i| i.quantity()), Some(5));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(Selection::Soda).unwrap().quantity(), 3);
    }

    #[test]
    fn test_sorted_follows_catalog_order() {
        let inventory: Inventory = [
            (Selection::Gum, Item::new(dec!(0.5), 1).unwrap()),
            (Selection::Soda, Item::new(dec!(1.5), 1).unwrap()),
            (Selection::Chips, Item::new(dec!(1.0), 1).unwrap()),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = inventory.sorted().into_iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Selection::Soda, Selection::Chips, Selection::Gum]);
    }
}
