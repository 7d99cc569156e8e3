//! Middleware components for HTTP request processing.
//!
//! Cross-cutting concerns layered with Axum's routing system: bearer-token
//! authentication for mutating endpoints and security headers on every
//! response.

pub mod auth;
pub mod security_headers;
