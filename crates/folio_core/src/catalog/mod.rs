//! Immutable catalog collections.
//!
//! # Responsibility
//! - Hold the page-lifetime record collections behind read-only lookups.
//! - Reject invalid or duplicate authored data at construction.
//!
//! # Invariants
//! - A catalog never changes after construction.
//! - An empty catalog is a valid, renderable state.

pub mod seed;
pub mod store;
