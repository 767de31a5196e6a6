//! Category registry ("familias").

use serde::{Deserialize, Serialize};

use almacen_core::{DomainError, DomainResult, ValueObject};

/// Categories every fresh registry starts with.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Paneles solares", "Inversores", "Baterías"];

/// Category display name. Equality is exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CategoryName {}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of distinct category names. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    names: Vec<CategoryName>,
}

impl CategoryRegistry {
    /// Registry with no categories at all.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Registry seeded with [`DEFAULT_CATEGORIES`].
    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }

    /// Build a registry from raw names, keeping first occurrences and
    /// skipping empty ones.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::empty();
        for raw in names {
            if let Ok(name) = CategoryName::parse(raw) {
                if !registry.contains(&name) {
                    registry.names.push(name);
                }
            }
        }
        registry
    }

    pub fn contains(&self, name: &CategoryName) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Fails with `Conflict` when `name` is already registered.
    pub fn ensure_addable(&self, name: &CategoryName) -> DomainResult<()> {
        if self.contains(name) {
            return Err(DomainError::conflict(format!("category '{name}' already exists")));
        }
        Ok(())
    }

    pub fn names(&self) -> &[CategoryName] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn push(&mut self, name: CategoryName) {
        self.names.push(name);
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
