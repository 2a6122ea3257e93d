//! # Feedback Strategies Module
//!
//! Pluggable feedback strategies for graded answers. Each strategy implements the
//! [`crate::traits::feedback::Feedback`] trait and produces one message per graded question.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: Generated from the resolved selections (missing and unexpected options).
//! - [`manual_feedback`]: Uses the quiz author's explanation for questions that were not fully correct.

pub mod auto_feedback;
pub mod manual_feedback;
