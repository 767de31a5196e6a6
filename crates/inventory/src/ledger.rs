//! Inventory ledger: ordered list of item rows.

use serde::{Deserialize, Serialize};

use almacen_core::{Entity, ItemId};

use crate::category::CategoryName;
use crate::item::{InventoryItem, ItemName, StockDirection};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryLedger {
    items: Vec<InventoryItem>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| *item.id() == id)
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Items of one category, in ledger order.
    ///
    /// Lazy and borrow-only; call again after any change to see fresh rows.
    pub fn items_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a InventoryItem> + 'a {
        self.items.iter().filter(move |item| item.category().as_str() == category)
    }

    /// Ids of every row matching `(category, name)`, in ledger order.
    pub fn ids_matching(&self, category: &CategoryName, name: &ItemName) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.matches(category, name))
            .map(InventoryItem::id_typed)
            .collect()
    }

    pub(crate) fn push(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Adjust the listed rows; rows not listed are left untouched.
    pub(crate) fn adjust(&mut self, ids: &[ItemId], delta: u64, direction: StockDirection) {
        for item in self.items.iter_mut().filter(|item| ids.contains(&item.id_typed())) {
            item.adjust(delta, direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Quantity;
    use proptest::prelude::*;

    fn item(id: u64, category: &str, name: &str, quantity: u64) -> InventoryItem {
        InventoryItem::new(
            ItemId::from_raw(id),
            CategoryName::parse(category).unwrap(),
            ItemName::parse(name).unwrap(),
            Quantity::new(quantity),
        )
    }

    fn ledger(items: Vec<InventoryItem>) -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        for i in items {
            ledger.push(i);
        }
        ledger
    }

    #[test]
    fn filter_keeps_ledger_order() {
        let ledger = ledger(vec![
            item(1, "Inversores", "Huawei 5kW", 2),
            item(2, "Baterías", "Pylontech", 4),
            item(3, "Inversores", "Fronius 3kW", 1),
        ]);
        let inverters = "Inversores";

        let ids: Vec<u64> = ledger
            .items_in_category(inverters)
            .map(|i| i.id_typed().as_u64())
            .collect();
        assert_eq!(ids, vec![1, 3]);

        // Restartable: a second pass sees the same rows.
        assert_eq!(ledger.items_in_category(inverters).count(), 2);
    }

    #[test]
    fn filter_for_unused_category_is_empty() {
        let ledger = ledger(vec![item(1, "Inversores", "Huawei 5kW", 2)]);
        assert_eq!(ledger.items_in_category("Cables").count(), 0);
    }

    #[test]
    fn adjust_touches_only_listed_rows() {
        let mut ledger = ledger(vec![
            item(1, "Cables", "Cable 10m", 5),
            item(2, "Cables", "Cable 10m", 1),
            item(3, "Cables", "Cable 5m", 9),
        ]);
        let ids = ledger.ids_matching(
            &CategoryName::parse("Cables").unwrap(),
            &ItemName::parse("Cable 10m").unwrap(),
        );
        assert_eq!(ids.len(), 2);

        ledger.adjust(&ids, 3, StockDirection::Increase);

        let quantities: Vec<u64> = ledger.iter().map(|i| i.quantity().units()).collect();
        assert_eq!(quantities, vec![8, 4, 9]);
    }

    proptest! {
        /// Property: filtering by a category yields exactly that category's rows, in order.
        #[test]
        fn filter_is_exact_subset(categories in prop::collection::vec(0usize..3, 0..30)) {
            const NAMES: [&str; 3] = ["Paneles solares", "Inversores", "Baterías"];
            let items: Vec<InventoryItem> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| item(i as u64, NAMES[*c], "X", 1))
                .collect();
            let ledger = ledger(items.clone());

            for name in NAMES {
                let filtered: Vec<&InventoryItem> = ledger.items_in_category(name).collect();
                let expected: Vec<&InventoryItem> =
                    items.iter().filter(|i| i.category().as_str() == name).collect();
                prop_assert_eq!(filtered, expected);
            }
        }
    }
}
