//! Error handling for the memory-match backend.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, ValidationKind};
pub use error_code::ErrorCode;
