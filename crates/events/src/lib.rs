//! Domain events.
//!
//! Events describe a state change that already passed validation. They are
//! applied once and then dropped; nothing here persists them.

pub mod event;

pub use event::Event;
