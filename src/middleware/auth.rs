use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::config::AppConfig;

/// Middleware that checks for a Bearer token in the Authorization header.
///
/// The expected token comes from `security.api_token` in the configuration,
/// falling back to the `PARTSHUB_AUTH_TOKEN` environment variable. If neither
/// is set, the middleware is a no-op (authentication disabled).
pub async fn auth_middleware(
    State(cfg): State<Arc<AppConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let configured = cfg.security.as_ref().and_then(|s| s.api_token.clone());
    let expected_token = match configured {
        Some(t) if !t.is_empty() => t,
        _ => match std::env::var("PARTSHUB_AUTH_TOKEN") {
            Ok(t) if !t.is_empty() => t,
            _ => return Ok(next.run(req).await),
        },
    };

    let auth_header = req.headers().get(header::AUTHORIZATION).and_then(|h| h.to_str().ok());

    match auth_header {
        Some(auth_val) if auth_val.starts_with("Bearer ") => {
            let provided_token = &auth_val[7..];
            // Constant-time comparison to prevent timing attacks
            let provided_bytes = provided_token.as_bytes();
            let expected_bytes = expected_token.as_bytes();
            if provided_bytes.len() != expected_bytes.len() {
                return Err(StatusCode::UNAUTHORIZED);
            }
            let mut diff = 0u8;
            for (i, &b) in provided_bytes.iter().enumerate() {
                diff |= b ^ expected_bytes[i];
            }
            if diff == 0 {
                Ok(next.run(req).await)
            } else {
                Err(StatusCode::UNAUTHORIZED)
            }
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
