//! HTTP route handlers for the PartsHub API.
//!
//! - `health`: health check, metrics, and version endpoints
//! - `locations`: storage-location CRUD plus the layout preview and
//!   bulk-create endpoints

pub mod health;
pub mod locations;
