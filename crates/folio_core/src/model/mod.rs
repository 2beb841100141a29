//! Domain model for portfolio catalog records.
//!
//! # Responsibility
//! - Define the typed records rendered by list and detail views.
//! - Expose the capability subset shared by every record kind.
//!
//! # Invariants
//! - Every record carries an authoring-time `EntryId`.
//! - Records never mutate after catalog construction.

pub mod entry;
