#[cfg(test)]
mod tests {
    use crate::error::{AppError, AppResult, OptionExt};
    use crate::layout::LayoutError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_display() {
        let error = AppError::BadRequest("Invalid input".to_string());
        assert_eq!(format!("{}", error), "Bad request: Invalid input");

        let error = AppError::NotFound("Resource not found".to_string());
        assert_eq!(format!("{}", error), "Not found: Resource not found");

        let error = AppError::Conflict("Name taken".to_string());
        assert_eq!(format!("{}", error), "Conflict: Name taken");
    }

    #[test]
    fn test_app_error_into_response() {
        let error = AppError::BadRequest("Test error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = AppError::NotFound("Not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = AppError::Conflict("Conflict".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let error = AppError::ServiceUnavailable("Service down".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let error = AppError::Unauthorized("No access".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let error = AppError::ValidationError {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = AppError::Internal(anyhow::anyhow!("boom"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let app_error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(app_error, AppError::NotFound(_)));
    }

    #[test]
    fn test_from_layout_error_is_invalid_input() {
        let layout_error =
            LayoutError::InvertedRange { start: "f".to_string(), end: "a".to_string() };
        let app_error: AppError = layout_error.into();
        match app_error {
            AppError::InvalidInput(msg) => {
                assert!(msg.contains("'f'"));
                assert!(msg.contains("'a'"));
            }
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_option_ext_ok_or_not_found() {
        let present: AppResult<i32> = Some(7).ok_or_not_found("storage location");
        assert_eq!(present.unwrap(), 7);

        let missing: AppResult<i32> = None.ok_or_not_found("storage location");
        match missing.unwrap_err() {
            AppError::NotFound(msg) => assert_eq!(msg, "storage location not found"),
            _ => panic!("Expected NotFound variant"),
        }
    }
}
