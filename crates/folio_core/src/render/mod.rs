//! View rendering pipeline.
//!
//! # Responsibility
//! - Build display markup for cards, detail views and error states.
//! - Memoize list renders per filter key and install markup into a mount
//!   point.
//!
//! # Invariants
//! - Untrusted text fields are HTML-escaped before insertion; only the
//!   authored blog body is inserted verbatim.
//! - Re-rendering the same filter key yields byte-identical output.

pub mod cache;
pub mod markup;
pub mod view;
