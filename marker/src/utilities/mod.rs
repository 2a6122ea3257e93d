//! # Utilities
//!
//! Helpers shared across the grading core.
//!
//! - [`normalization`]: case and whitespace folding, naive comma splitting and
//!   order-independent answer keys.

pub mod normalization;
