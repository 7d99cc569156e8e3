use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, OptionExt},
    layout::{generate_names, validate_layout},
    state::AppState,
    types::{
        BulkCreateResponse, CreateLocationRequest, LayoutConfiguration, LayoutPreviewResponse,
        StorageLocationDto,
    },
};

const LOCATION_COLUMNS: &str = "id, name, description, location_type, single_part_only, \
     parent_id, location_path, layout_config, created_at, updated_at";

fn location_from_row(r: &SqliteRow) -> AppResult<StorageLocationDto> {
    let id = Uuid::parse_str(r.get::<String, _>("id").as_str())
        .map_err(|e| AppError::Database(format!("invalid location id in database: {}", e)))?;
    let parent_id = match r.get::<Option<String>, _>("parent_id") {
        Some(s) => Some(
            Uuid::parse_str(&s)
                .map_err(|e| AppError::Database(format!("invalid parent id in database: {}", e)))?,
        ),
        None => None,
    };
    let layout_config = r
        .get::<Option<String>, _>("layout_config")
        .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok());
    Ok(StorageLocationDto {
        id,
        name: r.get::<String, _>("name"),
        description: r.get::<Option<String>, _>("description"),
        location_type: r.get::<String, _>("location_type"),
        single_part_only: r.get::<i64, _>("single_part_only") != 0,
        parent_id,
        location_path: r.get::<String, _>("location_path"),
        layout_config,
        created_at: r.get::<String, _>("created_at"),
        updated_at: r.get::<String, _>("updated_at"),
    })
}

pub async fn list_locations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sql = format!("SELECT {} FROM storage_locations ORDER BY location_path ASC", LOCATION_COLUMNS);
    let rows = sqlx::query(&sql).fetch_all(&state.db).await?;
    let items = rows.iter().map(location_from_row).collect::<AppResult<Vec<_>>>()?;
    Ok(Json(items))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let sql = format!("SELECT {} FROM storage_locations WHERE id = ?1", LOCATION_COLUMNS);
    let row = sqlx::query(&sql)
        .bind(id.to_string())
        .fetch_optional(&state.db)
        .await?
        .ok_or_not_found("storage location")?;
    Ok(Json(location_from_row(&row)?))
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(req): Json<CreateLocationRequest>,
) -> AppResult<impl IntoResponse> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::ValidationError {
            field: "name".to_string(),
            message: "Name must not be empty".to_string(),
        });
    }
    if name.contains('/') {
        return Err(AppError::ValidationError {
            field: "name".to_string(),
            message: "Name must not contain '/'".to_string(),
        });
    }

    // Resolve the parent's materialized path before inserting
    let location_path = match req.parent_id {
        Some(parent_id) => {
            let row = sqlx::query("SELECT location_path FROM storage_locations WHERE id = ?1")
                .bind(parent_id.to_string())
                .fetch_optional(&state.db)
                .await?
                .ok_or_not_found("parent location")?;
            format!("{}/{}", row.get::<String, _>("location_path"), name)
        }
        None => name.to_string(),
    };

    let id = Uuid::new_v4();
    let insert = sqlx::query(
        r#"INSERT INTO storage_locations
               (id, name, description, location_type, single_part_only, parent_id, location_path)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
    )
    .bind(id.to_string())
    .bind(name)
    .bind(&req.description)
    .bind(req.location_type.as_deref().unwrap_or("bin"))
    .bind(req.single_part_only.unwrap_or(false))
    .bind(req.parent_id.map(|u| u.to_string()))
    .bind(&location_path)
    .execute(&state.db)
    .await;

    if let Err(e) = insert {
        if is_unique_violation(&e) {
            return Err(AppError::Conflict(format!("Location '{}' already exists", name)));
        }
        return Err(e.into());
    }

    state.metrics.add_locations_created(1);

    let sql = format!("SELECT {} FROM storage_locations WHERE id = ?1", LOCATION_COLUMNS);
    let row = sqlx::query(&sql)
        .bind(id.to_string())
        .fetch_one(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(location_from_row(&row)?)))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    // Cascades to children via the parent_id foreign key; idempotent
    sqlx::query("DELETE FROM storage_locations WHERE id = ?1")
        .bind(id.to_string())
        .execute(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Read-only preview of a layout configuration.
///
/// Never touches the database beyond the duplicate-name lookup and always
/// answers 200; validation problems are reported in-band. The parent
/// reference is deliberately not resolved here, only at creation time.
pub async fn generate_preview(
    State(state): State<AppState>,
    Json(cfg): Json<LayoutConfiguration>,
) -> AppResult<impl IntoResponse> {
    let report = validate_layout(&state.db, &state.config.layout, &cfg, false).await?;
    state.metrics.inc_previews_served();

    if !report.is_valid() {
        state.metrics.inc_validation_failures();
        return Ok(Json(LayoutPreviewResponse {
            sample_names: vec![],
            last_name: String::new(),
            total_count: report.total_count,
            warnings: report.warnings,
            errors: report.errors,
            is_valid: false,
        }));
    }

    let names = generate_names(&cfg).map_err(AppError::from)?;
    let sample_count = state.config.layout.preview_sample_count;
    Ok(Json(LayoutPreviewResponse {
        sample_names: names.iter().take(sample_count).cloned().collect(),
        last_name: names.last().cloned().unwrap_or_default(),
        total_count: report.total_count,
        warnings: report.warnings,
        errors: vec![],
        is_valid: true,
    }))
}

/// Transactional bulk creation of a generated layout.
///
/// All-or-nothing: any hard validation error or insert failure leaves the
/// table untouched. Every created row carries the serialized configuration
/// as its audit trail.
pub async fn bulk_create_layout(
    State(state): State<AppState>,
    Json(cfg): Json<LayoutConfiguration>,
) -> AppResult<Response> {
    let report = validate_layout(&state.db, &state.config.layout, &cfg, true).await?;
    if !report.is_valid() {
        state.metrics.inc_validation_failures();
        let status = status_for_errors(&report.errors);
        return Ok((status, Json(failure_response(report.errors))).into_response());
    }

    let names = generate_names(&cfg).map_err(AppError::from)?;
    let layout_json =
        serde_json::to_string(&cfg).map_err(|e| AppError::Internal(anyhow::Error::from(e)))?;

    // Parent existence was validated above; a concurrent delete between the
    // check and this lookup surfaces as a 404 failure with zero rows created.
    let parent_path = match cfg.parent_id {
        Some(parent_id) => {
            let row = sqlx::query("SELECT location_path FROM storage_locations WHERE id = ?1")
                .bind(parent_id.to_string())
                .fetch_optional(&state.db)
                .await?;
            match row {
                Some(r) => Some(r.get::<String, _>("location_path")),
                None => {
                    return Ok((
                        StatusCode::NOT_FOUND,
                        Json(failure_response(vec![format!(
                            "Parent location {} does not exist",
                            parent_id
                        )])),
                    )
                        .into_response());
                }
            }
        }
        None => None,
    };

    let mut tx = state.db.begin().await?;
    let mut created_ids: Vec<Uuid> = Vec::with_capacity(names.len());
    let mut failure: Option<(StatusCode, String)> = None;

    for name in &names {
        let id = Uuid::new_v4();
        let location_path = match &parent_path {
            Some(p) => format!("{}/{}", p, name),
            None => name.clone(),
        };
        let res = sqlx::query(
            r#"INSERT INTO storage_locations
                   (id, name, location_type, single_part_only, parent_id, location_path, layout_config)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
        )
        .bind(id.to_string())
        .bind(name)
        .bind(&cfg.location_type)
        .bind(cfg.single_part_only)
        .bind(cfg.parent_id.map(|u| u.to_string()))
        .bind(&location_path)
        .bind(&layout_json)
        .execute(&mut *tx)
        .await;

        match res {
            Ok(_) => created_ids.push(id),
            Err(e) => {
                // Most likely a lost race against a concurrent insert of the
                // same name; the unique constraint aborts the whole batch.
                failure = Some(if is_unique_violation(&e) {
                    (StatusCode::CONFLICT, format!("Location '{}' already exists", name))
                } else {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Database error during bulk create: {}", e),
                    )
                });
                break;
            }
        }
    }

    if let Some((status, message)) = failure {
        if let Err(e) = tx.rollback().await {
            tracing::warn!("Rollback after failed bulk create returned an error: {}", e);
        }
        state.metrics.inc_validation_failures();
        return Ok((status, Json(failure_response(vec![message]))).into_response());
    }

    tx.commit().await?;

    state.metrics.inc_layouts_created();
    state.metrics.add_locations_created(created_ids.len());
    tracing::info!(
        count = created_ids.len(),
        prefix = %cfg.prefix,
        "bulk-created storage locations"
    );

    let created_count = created_ids.len();
    Ok((
        StatusCode::CREATED,
        Json(BulkCreateResponse { created_ids, created_count, success: true, errors: vec![] }),
    )
        .into_response())
}

fn failure_response(errors: Vec<String>) -> BulkCreateResponse {
    BulkCreateResponse { created_ids: vec![], created_count: 0, success: false, errors }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err)
        if db_err.message().to_lowercase().contains("unique"))
}

/// Maps in-band validation error text to the HTTP status of the failure
/// response: duplicates conflict, a missing parent is not-found, everything
/// else is a plain bad request.
fn status_for_errors(errors: &[String]) -> StatusCode {
    if errors.iter().any(|e| e.contains("already exist")) {
        StatusCode::CONFLICT
    } else if errors.iter().any(|e| e.contains("does not exist")) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}
