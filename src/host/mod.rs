//! Seams to the hosting application.
//!
//! The core never talks to a network or a database. The host supplies a
//! catalog of playable items and a store for finished rounds; the
//! [`RoundPlanner`] wires them to the adapter, the curve, and the engine.

mod catalog;
mod history;
mod planner;

pub use catalog::{CatalogQuery, ItemCatalog, StaticCatalog};
pub use history::{HistoryStore, InMemoryHistory};
pub use planner::{PlannedRound, RoundPlanner, RoundResult};
