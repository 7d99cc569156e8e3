//! Integration and unit tests for the PartsHub backend.
//!
//! - **layout_tests**: range expansion, name generation, and validation
//! - **api_tests**: HTTP endpoint tests against an in-memory database
//! - **error_tests**: error mapping and response statuses
//! - **config_tests**: configuration defaults and helpers
//! - **db_tests**: schema initialization and constraint behavior

pub mod config_tests;
pub mod error_tests;
pub mod layout_tests;
