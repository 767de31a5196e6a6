//! `almacen-cli`
//!
//! Line-oriented terminal front end for the stock form: each input line sets
//! the fields of one form and presses its button, then the view re-renders.

pub mod config;
pub mod shell;

pub use config::Settings;
pub use shell::{Action, Flow, Shell, ShellError};
