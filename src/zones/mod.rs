//! Shared play area.
//!
//! The `Table` holds the face-up cards of the comparison step in progress
//! and a snapshot of the step before it.

pub mod table;

pub use table::{Placement, Table, TableSlot};
