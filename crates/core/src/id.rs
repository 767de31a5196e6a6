//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item (ledger row).
///
/// Derived from the creation time in milliseconds, bumped when needed so that
/// identifiers are strictly increasing within one process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(raw))
    }
}

/// Monotonic item-id source.
///
/// `peek` is side-effect free; the generator only advances when an issued id
/// is `observe`d. Two ids minted within the same clock tick therefore never
/// collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id given the current wall clock.
    pub fn peek(&self) -> ItemId {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.peek_at(now_ms)
    }

    /// Next id given an explicit clock reading (milliseconds).
    pub fn peek_at(&self, now_ms: u64) -> ItemId {
        match self.last {
            Some(last) => ItemId(now_ms.max(last.saturating_add(1))),
            None => ItemId(now_ms),
        }
    }

    /// Record an id as issued. Older ids are ignored.
    pub fn observe(&mut self, id: ItemId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    pub fn last(&self) -> Option<ItemId> {
        self.last.map(ItemId)
    }
}
