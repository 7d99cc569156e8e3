#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig, LayoutLimitsConfig};

    #[test]
    fn test_embedded_defaults_parse() {
        let cfg = AppConfig::default();
        assert!(!cfg.server.host.is_empty());
        assert!(cfg.server.port > 0);
        assert!(cfg.database.url.starts_with("sqlite://"));
    }

    #[test]
    fn test_embedded_defaults_match_business_limits() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.layout.max_locations, 500);
        assert_eq!(cfg.layout.warn_threshold, 100);
        assert_eq!(cfg.layout.preview_sample_count, 5);
        // Struct-level defaults mirror the embedded TOML
        let limits = LayoutLimitsConfig::default();
        assert_eq!(limits.max_locations, cfg.layout.max_locations);
        assert_eq!(limits.warn_threshold, cfg.layout.warn_threshold);
        assert_eq!(limits.preview_sample_count, cfg.layout.preview_sample_count);
    }

    #[test]
    fn test_default_has_no_api_token() {
        let cfg = AppConfig::default();
        let token = cfg.security.and_then(|s| s.api_token);
        assert!(token.is_none());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_creates_missing_dirs() {
        let base = tempfile::tempdir().unwrap();
        let db_path = base.path().join("nested").join("partshub.db");
        let url = format!("sqlite://{}", db_path.to_string_lossy());

        assert!(!db_path.parent().unwrap().exists());
        config::ensure_sqlite_parent_dir(&url).unwrap();
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_ignores_non_sqlite_urls() {
        config::ensure_sqlite_parent_dir("postgres://localhost/partshub").unwrap();
    }
}
