//!
//! Traits Module
//!
//! Core traits used throughout the grading core for extensibility.
//!
//! - [`comparator`]: the per-question-type correctness strategy.
//! - [`feedback`]: the feedback generation strategy.

pub mod comparator;
pub mod feedback;
