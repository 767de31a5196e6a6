//! Read-only rendering of the ledger ("Inventario Actual").

use core::fmt;

use crate::item::InventoryItem;

/// Spanish UI labels.
pub mod labels {
    pub const TITLE: &str = "Inventario de Materiales Fotovoltaicos";
    pub const ADD_CATEGORY: &str = "Agregar Nueva Familia";
    pub const ADD_ITEM: &str = "Agregar Nuevo Material";
    pub const UPDATE_STOCK: &str = "Actualizar Inventario";
    pub const CURRENT_STOCK: &str = "Inventario Actual";
    pub const ADD_TO_STOCK: &str = "Agregar al Stock";
    pub const REMOVE_FROM_STOCK: &str = "Sacar del Stock";

    pub const COL_CATEGORY: &str = "Familia";
    pub const COL_ITEM: &str = "Material";
    pub const COL_QUANTITY: &str = "Cantidad";
}

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub category: &'a str,
    pub name: &'a str,
    pub quantity: u64,
}

/// Plain-text table over the ledger, one row per item in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct InventoryTable<'a> {
    items: &'a [InventoryItem],
}

impl<'a> InventoryTable<'a> {
    pub fn new(items: &'a [InventoryItem]) -> Self {
        Self { items }
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'a>> + 'a {
        self.items.iter().map(|item| TableRow {
            category: item.category().as_str(),
            name: item.name().as_str(),
            quantity: item.quantity().units(),
        })
    }
}

impl fmt::Display for InventoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Width in chars so accented names line up.
        let mut w0 = labels::COL_CATEGORY.chars().count();
        let mut w1 = labels::COL_ITEM.chars().count();
        for row in self.rows() {
            w0 = w0.max(row.category.chars().count());
            w1 = w1.max(row.name.chars().count());
        }
        let w2 = labels::COL_QUANTITY.chars().count();

        writeln!(
            f,
            "{:<w0$} | {:<w1$} | {}",
            labels::COL_CATEGORY,
            labels::COL_ITEM,
            labels::COL_QUANTITY
        )?;
        write!(f, "{}-+-{}-+-{}", "-".repeat(w0), "-".repeat(w1), "-".repeat(w2))?;
        for row in self.rows() {
            write!(f, "\n{:<w0$} | {:<w1$} | {}", row.category, row.name, row.quantity)?;
        }
        Ok(())
    }
}
