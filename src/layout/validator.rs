//! Business-rule validation for layout configurations.
//!
//! Checks run in a fixed order: shape/range invariants, the hard count cap,
//! the soft count warning, duplicate names against persisted locations, and
//! (at creation time only) parent existence. The count cap short-circuits so
//! an oversized request never triggers the database lookups.

use sqlx::{Row, SqlitePool};

use crate::config::LayoutLimitsConfig;
use crate::error::AppResult;
use crate::layout::generator::{generate_names, total_count};
use crate::types::LayoutConfiguration;

/// SQLite's default variable limit is 999; stay well below it when building
/// IN-clauses for the duplicate check.
const DUPLICATE_QUERY_CHUNK: usize = 400;

/// How many colliding names an error message lists before eliding.
const DUPLICATE_EXAMPLES: usize = 5;

/// Outcome of validating a configuration. Errors block creation; warnings
/// are advisory and returned in-band alongside a successful result.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub total_count: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a configuration against the configured limits and the persisted
/// storage locations.
///
/// `check_parent` is enabled on the create path only; the preview endpoint
/// deliberately skips parent resolution.
pub async fn validate_layout(
    pool: &SqlitePool,
    limits: &LayoutLimitsConfig,
    cfg: &LayoutConfiguration,
    check_parent: bool,
) -> AppResult<ValidationReport> {
    let mut report = ValidationReport::default();

    // Shape and per-range invariants
    let total = match total_count(cfg) {
        Ok(total) => total,
        Err(e) => {
            report.errors.push(e.to_string());
            return Ok(report);
        }
    };
    report.total_count = total;

    // Hard cap: skip the database checks entirely for oversized requests
    if total > limits.max_locations {
        report.errors.push(format!(
            "Configuration would create {} locations, exceeding the maximum of {}",
            total, limits.max_locations
        ));
        return Ok(report);
    }

    if total > limits.warn_threshold {
        report.warnings.push(format!(
            "Creating {} locations. Bulk-created locations are permanent and cannot be undone",
            total
        ));
    }

    // Duplicate check against persisted names
    let names = generate_names(cfg).map_err(crate::error::AppError::from)?;
    let mut existing: Vec<String> = Vec::new();
    for chunk in names.chunks(DUPLICATE_QUERY_CHUNK) {
        let placeholders =
            (1..=chunk.len()).map(|i| format!("?{}", i)).collect::<Vec<_>>().join(", ");
        let sql = format!("SELECT name FROM storage_locations WHERE name IN ({})", placeholders);
        let mut query = sqlx::query(&sql);
        for name in chunk {
            query = query.bind(name);
        }
        let rows = query.fetch_all(pool).await?;
        existing.extend(rows.into_iter().map(|r| r.get::<String, _>("name")));
    }
    if !existing.is_empty() {
        let mut examples =
            existing.iter().take(DUPLICATE_EXAMPLES).cloned().collect::<Vec<_>>().join(", ");
        if existing.len() > DUPLICATE_EXAMPLES {
            examples.push_str(", ...");
        }
        report.errors.push(format!("Locations already exist with names: {}", examples));
    }

    // Parent existence, creation time only
    if check_parent {
        if let Some(parent_id) = cfg.parent_id {
            let row = sqlx::query("SELECT id FROM storage_locations WHERE id = ?1")
                .bind(parent_id.to_string())
                .fetch_optional(pool)
                .await?;
            if row.is_none() {
                report.errors.push(format!("Parent location {} does not exist", parent_id));
            }
        }
    }

    Ok(report)
}
