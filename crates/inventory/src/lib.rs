//! Inventory domain module.
//!
//! This crate contains the business rules for the photovoltaic stock ledger,
//! implemented purely as deterministic domain logic plus the form state that
//! drives it (no IO, no terminal handling).

pub mod category;
pub mod form;
pub mod item;
pub mod ledger;
pub mod state;
pub mod view;

pub use category::{CategoryName, CategoryRegistry, DEFAULT_CATEGORIES};
pub use form::{InventoryForm, ItemDraft, StockUpdateDraft, Submission, parse_quantity};
pub use item::{InventoryItem, ItemName, Quantity, StockDirection};
pub use ledger::InventoryLedger;
pub use state::{
    AddCategory, AddItem, AdjustItem, AdjustStock, CategoryAdded, InventoryCommand,
    InventoryEvent, InventorySnapshot, InventoryState, ItemAdded, StockAdjusted,
};
pub use view::{InventoryTable, TableRow};
