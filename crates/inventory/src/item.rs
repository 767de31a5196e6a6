use serde::{Deserialize, Serialize};

use almacen_core::{DomainError, DomainResult, Entity, ItemId, ValueObject};

use crate::category::CategoryName;

/// Material name ("material"). Not unique within a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Units on hand. Never negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Saturates at `u64::MAX`.
    pub fn increased_by(self, delta: u64) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Floors at zero.
    pub fn decreased_by(self, delta: u64) -> Self {
        Self(self.0.saturating_sub(delta))
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Which stock button was pressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    /// "Agregar al Stock"
    Increase,
    /// "Sacar del Stock"
    Decrease,
}

impl StockDirection {
    pub fn apply(self, quantity: Quantity, delta: u64) -> Quantity {
        match self {
            StockDirection::Increase => quantity.increased_by(delta),
            StockDirection::Decrease => quantity.decreased_by(delta),
        }
    }
}

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    category: CategoryName,
    name: ItemName,
    quantity: Quantity,
}

impl InventoryItem {
    pub fn new(id: ItemId, category: CategoryName, name: ItemName, quantity: Quantity) -> Self {
        Self {
            id,
            category,
            name,
            quantity,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Exact `(category, name)` value match.
    pub fn matches(&self, category: &CategoryName, name: &ItemName) -> bool {
        &self.category == category && &self.name == name
    }

    pub(crate) fn adjust(&mut self, delta: u64, direction: StockDirection) {
        self.quantity = direction.apply(self.quantity, delta);
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
