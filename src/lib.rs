//! # PartsHub Backend Library
//!
//! Core library for PartsHub, a backend for tracking electronic-component
//! inventory. This crate covers the storage-location subsystem: a
//! combinatorial layout generator that expands declarative layout
//! configurations into batches of storage-location names, validates them
//! against business limits, and persists them transactionally.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`layout`]: Layout generation and validation engine
//! - [`metrics`]: Application usage metrics
//! - [`middleware`]: HTTP middleware for auth and security headers
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Data transfer objects and shared type definitions
//!
//! ## Features
//!
//! - Declarative layout configurations (prefix, letter/number ranges,
//!   separators) expanded into ordered batches of location names
//! - Read-only previews with in-band warnings and errors
//! - All-or-nothing bulk creation with an audit-trail JSON snapshot per row
//! - Storage-location CRUD with materialized hierarchy paths
//! - Comprehensive error handling and logging

pub mod config;
pub mod db;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
