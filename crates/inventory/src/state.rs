//! Inventory state container: category registry + ledger, evolved through
//! validated commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use almacen_core::{Aggregate, DomainError, IdGenerator, ItemId};
use almacen_events::Event;

use crate::category::{CategoryName, CategoryRegistry};
use crate::item::{InventoryItem, ItemName, Quantity, StockDirection};
use crate::ledger::InventoryLedger;

/// Aggregate: the whole inventory held by one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryState {
    categories: CategoryRegistry,
    ledger: InventoryLedger,
    ids: IdGenerator,
    version: u64,
}

impl InventoryState {
    pub fn new(categories: CategoryRegistry) -> Self {
        Self {
            categories,
            ledger: InventoryLedger::new(),
            ids: IdGenerator::new(),
            version: 0,
        }
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    /// Identifier the next `AddItem` should carry.
    pub fn next_item_id(&self) -> ItemId {
        self.ids.peek()
    }

    pub fn snapshot(&self) -> InventorySnapshot<'_> {
        InventorySnapshot {
            categories: self.categories.names(),
            items: self.ledger.items(),
        }
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(CategoryRegistry::with_defaults())
    }
}

/// Read-only export shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot<'a> {
    pub categories: &'a [CategoryName],
    pub items: &'a [InventoryItem],
}

/// Command: AddCategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCategory {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item_id: ItemId,
    pub category: String,
    pub name: String,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustStock (every row matching `(category, name)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustStock {
    pub category: String,
    pub name: String,
    pub delta: u64,
    pub direction: StockDirection,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustItem (exactly one row, by id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustItem {
    pub item_id: ItemId,
    pub delta: u64,
    pub direction: StockDirection,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddCategory(AddCategory),
    AddItem(AddItem),
    AdjustStock(AdjustStock),
    AdjustItem(AdjustItem),
}

/// Event: CategoryAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAdded {
    pub name: CategoryName,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: InventoryItem,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockAdjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjusted {
    pub item_ids: Vec<ItemId>,
    pub delta: u64,
    pub direction: StockDirection,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    CategoryAdded(CategoryAdded),
    ItemAdded(ItemAdded),
    StockAdjusted(StockAdjusted),
}

impl InventoryEvent {
    /// Number of registry entries or ledger rows this event touches.
    pub fn affected(&self) -> usize {
        match self {
            InventoryEvent::CategoryAdded(_) | InventoryEvent::ItemAdded(_) => 1,
            InventoryEvent::StockAdjusted(e) => e.item_ids.len(),
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::CategoryAdded(_) => "inventory.category.added",
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::StockAdjusted(_) => "inventory.item.stock_adjusted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::CategoryAdded(e) => e.occurred_at,
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::StockAdjusted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for InventoryState {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::CategoryAdded(e) => {
                self.categories.push(e.name.clone());
            }
            InventoryEvent::ItemAdded(e) => {
                self.ids.observe(e.item.id_typed());
                self.ledger.push(e.item.clone());
            }
            InventoryEvent::StockAdjusted(e) => {
                self.ledger.adjust(&e.item_ids, e.delta, e.direction);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddCategory(cmd) => self.handle_add_category(cmd),
            InventoryCommand::AddItem(cmd) => self.handle_add_item(cmd),
            InventoryCommand::AdjustStock(cmd) => self.handle_adjust_stock(cmd),
            InventoryCommand::AdjustItem(cmd) => self.handle_adjust_item(cmd),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl InventoryState {
    fn ensure_positive_delta(delta: u64) -> Result<(), DomainError> {
        if delta == 0 {
            return Err(DomainError::validation("delta must be greater than zero"));
        }
        Ok(())
    }

    fn handle_add_category(&self, cmd: &AddCategory) -> Result<Vec<InventoryEvent>, DomainError> {
        let name = CategoryName::parse(cmd.name.as_str())?;
        self.categories.ensure_addable(&name)?;

        Ok(vec![InventoryEvent::CategoryAdded(CategoryAdded {
            name,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<InventoryEvent>, DomainError> {
        let category = CategoryName::parse(cmd.category.as_str())?;
        let name = ItemName::parse(cmd.name.as_str())?;
        let quantity = Quantity::new(cmd.quantity);
        if !quantity.is_positive() {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        if !self.categories.contains(&category) {
            return Err(DomainError::not_found(format!("category '{category}'")));
        }
        if self.ledger.contains_id(cmd.item_id) {
            return Err(DomainError::conflict(format!("item {} already exists", cmd.item_id)));
        }
        if self.ids.last().is_some_and(|last| cmd.item_id <= last) {
            return Err(DomainError::invariant("item ids must increase"));
        }

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            item: InventoryItem::new(cmd.item_id, category, name, quantity),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_adjust_stock(&self, cmd: &AdjustStock) -> Result<Vec<InventoryEvent>, DomainError> {
        let category = CategoryName::parse(cmd.category.as_str())?;
        let name = ItemName::parse(cmd.name.as_str())?;
        Self::ensure_positive_delta(cmd.delta)?;

        // Every row with this (category, name) moves together.
        let item_ids = self.ledger.ids_matching(&category, &name);
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![InventoryEvent::StockAdjusted(StockAdjusted {
            item_ids,
            delta: cmd.delta,
            direction: cmd.direction,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_adjust_item(&self, cmd: &AdjustItem) -> Result<Vec<InventoryEvent>, DomainError> {
        Self::ensure_positive_delta(cmd.delta)?;
        if !self.ledger.contains_id(cmd.item_id) {
            return Err(DomainError::not_found(format!("item {}", cmd.item_id)));
        }

        Ok(vec![InventoryEvent::StockAdjusted(StockAdjusted {
            item_ids: vec![cmd.item_id],
            delta: cmd.delta,
            direction: cmd.direction,
            occurred_at: cmd.occurred_at,
        })])
    }
}
