//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: a category name is equal to every other
/// category name with the same text. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Quantity(u64);
///
/// impl ValueObject for Quantity {}
///
/// assert_eq!(Quantity(5), Quantity(5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
