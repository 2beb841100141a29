//! Contact form validation and submission.
//!
//! # Responsibility
//! - Validate form fields and surface per-field issues.
//! - Submit through a pluggable transport and shape user-visible notices.

pub mod form;
