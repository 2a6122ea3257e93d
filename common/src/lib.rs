//! Shared configuration and logging setup for the quiz grading binaries.

pub mod config;
pub mod logger;
