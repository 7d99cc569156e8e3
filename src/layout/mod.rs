//! Storage-location layout engine.
//!
//! Turns a declarative [`LayoutConfiguration`](crate::types::LayoutConfiguration)
//! into an ordered batch of location names (Cartesian product of 0-3 letter or
//! number ranges, joined with a prefix and separators) and validates the batch
//! against business limits before anything is persisted.
//!
//! - `generator`: range expansion and name generation
//! - `validator`: limit, duplicate, and parent checks

pub mod generator;
pub mod validator;

pub use generator::{expand_range, generate_names, range_cardinality, total_count};
pub use validator::{validate_layout, ValidationReport};

use thiserror::Error;

/// Errors raised while expanding or validating a layout configuration.
///
/// These are domain errors: they describe an invalid configuration, not an
/// infrastructure failure, and map to client-side HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("range start '{start}' must not be greater than end '{end}'")]
    InvertedRange { start: String, end: String },

    #[error("letter range endpoints must be single letters a-z, got '{0}'")]
    InvalidLetter(String),

    #[error("number range endpoints must be between 0 and 999, got {0}")]
    NumberOutOfBounds(i64),

    #[error("range endpoint does not match range type '{expected}'")]
    EndpointTypeMismatch { expected: &'static str },

    #[error("'{flag}' is not valid for {range_type} ranges")]
    InvalidFlag { flag: &'static str, range_type: &'static str },

    #[error("layout type '{layout}' requires exactly {expected} range(s), got {actual}")]
    RangeCountMismatch { layout: &'static str, expected: usize, actual: usize },

    #[error("expected {expected} separator(s) for {ranges} range(s), got {actual}")]
    SeparatorCountMismatch { expected: usize, ranges: usize, actual: usize },
}
