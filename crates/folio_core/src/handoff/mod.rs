//! Cross-page navigation handoff.
//!
//! # Responsibility
//! - Move one selected record across a full-page navigation boundary via
//!   ephemeral storage plus an id query parameter.
//!
//! # Invariants
//! - Exactly one writer (source page) and one reader (destination page) per
//!   navigation.
//! - The reader never trusts storage: id verification and a fallback lookup
//!   guard every read.

pub mod channel;
