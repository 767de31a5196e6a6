use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **named** (stable `event_type` for logs)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.category.added").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (wall-clock time of the submission).
    fn occurred_at(&self) -> DateTime<Utc>;
}
