//! P/F ratio calculator.
//!
//! Looks up an SpO2 value and an O2 flow value in two remote reference
//! tables and divides them. The lookup and calculation rules live here as
//! plain functions over [`state::AppState`], so they run and test without a
//! browser; `main.rs` only wires them to Yew.

pub mod calc;
pub mod config;
pub mod form;
pub mod loader;
pub mod logging;
pub mod reference;
pub mod state;
pub mod utils;

pub use calc::{calculate, ratio};
pub use form::{FormState, Slot, SlotParseError, ValidationError};
pub use loader::{load, HttpSource, LoadError, ReferenceSource};
pub use reference::{KeyRange, ReferenceEntry, ReferenceTable, ReferenceTables, Table};
pub use state::{AppAction, AppState};
