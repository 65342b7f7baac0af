//! Backend test support utilities
//!
//! Shared helpers for the memory-match backend test suites: unified logging
//! initialization, problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
