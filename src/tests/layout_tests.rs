#[cfg(test)]
mod tests {
    use crate::config::LayoutLimitsConfig;
    use crate::layout::{
        expand_range, generate_names, range_cardinality, total_count, validate_layout, LayoutError,
    };
    use crate::types::{
        LayoutConfiguration, LayoutType, RangeEndpoint, RangeSpecification, RangeType,
    };
    use sqlx::sqlite::SqlitePoolOptions;

    fn letters(start: &str, end: &str) -> RangeSpecification {
        RangeSpecification {
            range_type: RangeType::Letters,
            start: RangeEndpoint::Letter(start.to_string()),
            end: RangeEndpoint::Letter(end.to_string()),
            capitalize: false,
            zero_pad: false,
        }
    }

    fn numbers(start: i64, end: i64) -> RangeSpecification {
        RangeSpecification {
            range_type: RangeType::Numbers,
            start: RangeEndpoint::Number(start),
            end: RangeEndpoint::Number(end),
            capitalize: false,
            zero_pad: false,
        }
    }

    fn row_config(prefix: &str, range: RangeSpecification) -> LayoutConfiguration {
        LayoutConfiguration {
            layout_type: LayoutType::Row,
            prefix: prefix.to_string(),
            ranges: vec![range],
            separators: vec![],
            parent_id: None,
            location_type: "bin".to_string(),
            single_part_only: false,
        }
    }

    #[test]
    fn expand_letters_basic() {
        let tokens = expand_range(&letters("a", "f")).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn expand_letters_capitalize() {
        let mut spec = letters("x", "z");
        spec.capitalize = true;
        assert_eq!(expand_range(&spec).unwrap(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn expand_letters_case_insensitive_bounds() {
        let tokens = expand_range(&letters("A", "c")).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn expand_letters_inverted_range_fails() {
        let err = expand_range(&letters("f", "a")).unwrap_err();
        assert!(matches!(err, LayoutError::InvertedRange { .. }));
    }

    #[test]
    fn expand_letters_rejects_multi_char() {
        let err = expand_range(&letters("ab", "c")).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLetter(_)));
    }

    #[test]
    fn expand_numbers_basic() {
        let tokens = expand_range(&numbers(1, 5)).unwrap();
        assert_eq!(tokens, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn expand_numbers_zero_pad_to_end_width() {
        let mut spec = numbers(8, 12);
        spec.zero_pad = true;
        assert_eq!(expand_range(&spec).unwrap(), vec!["08", "09", "10", "11", "12"]);
    }

    #[test]
    fn expand_numbers_out_of_bounds_fails() {
        assert!(matches!(
            expand_range(&numbers(0, 1000)).unwrap_err(),
            LayoutError::NumberOutOfBounds(1000)
        ));
        assert!(matches!(
            expand_range(&numbers(-1, 5)).unwrap_err(),
            LayoutError::NumberOutOfBounds(-1)
        ));
    }

    #[test]
    fn expand_numbers_inverted_range_fails() {
        assert!(matches!(
            expand_range(&numbers(9, 3)).unwrap_err(),
            LayoutError::InvertedRange { .. }
        ));
    }

    #[test]
    fn zero_pad_invalid_for_letters() {
        let mut spec = letters("a", "c");
        spec.zero_pad = true;
        assert!(matches!(expand_range(&spec).unwrap_err(), LayoutError::InvalidFlag { .. }));
    }

    #[test]
    fn capitalize_invalid_for_numbers() {
        let mut spec = numbers(1, 3);
        spec.capitalize = true;
        assert!(matches!(expand_range(&spec).unwrap_err(), LayoutError::InvalidFlag { .. }));
    }

    #[test]
    fn endpoint_kind_must_match_range_type() {
        let spec = RangeSpecification {
            range_type: RangeType::Letters,
            start: RangeEndpoint::Number(1),
            end: RangeEndpoint::Letter("c".to_string()),
            capitalize: false,
            zero_pad: false,
        };
        assert!(matches!(
            expand_range(&spec).unwrap_err(),
            LayoutError::EndpointTypeMismatch { .. }
        ));
    }

    #[test]
    fn cardinality_matches_expansion_length() {
        for spec in [letters("a", "z"), numbers(0, 999), numbers(7, 7)] {
            assert_eq!(range_cardinality(&spec).unwrap(), expand_range(&spec).unwrap().len());
        }
    }

    #[test]
    fn single_layout_generates_prefix_only() {
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Single,
            prefix: "main-shelf".to_string(),
            ranges: vec![],
            separators: vec![],
            parent_id: None,
            location_type: "shelf".to_string(),
            single_part_only: false,
        };
        assert_eq!(generate_names(&cfg).unwrap(), vec!["main-shelf"]);
        assert_eq!(total_count(&cfg).unwrap(), 1);
    }

    #[test]
    fn row_layout_generates_ordered_names() {
        let cfg = row_config("box1-", letters("a", "f"));
        let names = generate_names(&cfg).unwrap();
        assert_eq!(names.len(), 6);
        assert_eq!(names.first().unwrap(), "box1-a");
        assert_eq!(names.last().unwrap(), "box1-f");
        assert_eq!(total_count(&cfg).unwrap(), 6);
    }

    #[test]
    fn grid_layout_generates_cartesian_product() {
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Grid,
            prefix: "drawer-".to_string(),
            ranges: vec![letters("a", "f"), numbers(1, 5)],
            separators: vec!["-".to_string()],
            parent_id: None,
            location_type: "drawer".to_string(),
            single_part_only: false,
        };
        let names = generate_names(&cfg).unwrap();
        assert_eq!(names.len(), 30);
        assert_eq!(names.first().unwrap(), "drawer-a-1");
        assert_eq!(names[1], "drawer-a-2");
        assert_eq!(names.last().unwrap(), "drawer-f-5");
        // Product of distinct tokens, so no duplicates by construction
        let mut dedup = names.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), names.len());
    }

    #[test]
    fn grid_3d_layout_uses_both_separators() {
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Grid3d,
            prefix: "rack".to_string(),
            ranges: vec![numbers(1, 2), letters("a", "b"), numbers(1, 3)],
            separators: vec![".".to_string(), "-".to_string()],
            parent_id: None,
            location_type: "bin".to_string(),
            single_part_only: false,
        };
        let names = generate_names(&cfg).unwrap();
        assert_eq!(names.len(), 12);
        assert_eq!(names.first().unwrap(), "rack1.a-1");
        assert_eq!(names.last().unwrap(), "rack2.b-3");
    }

    #[test]
    fn range_count_must_match_layout_type() {
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Grid,
            prefix: "g-".to_string(),
            ranges: vec![letters("a", "c")],
            separators: vec![],
            parent_id: None,
            location_type: "bin".to_string(),
            single_part_only: false,
        };
        assert!(matches!(
            generate_names(&cfg).unwrap_err(),
            LayoutError::RangeCountMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn separator_count_must_match_ranges() {
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Grid,
            prefix: "g-".to_string(),
            ranges: vec![letters("a", "c"), numbers(1, 3)],
            separators: vec![],
            parent_id: None,
            location_type: "bin".to_string(),
            single_part_only: false,
        };
        assert!(matches!(
            generate_names(&cfg).unwrap_err(),
            LayoutError::SeparatorCountMismatch { expected: 1, actual: 0, .. }
        ));
    }

    // ---------------- Validator tests ----------------

    async fn mk_pool() -> sqlx::SqlitePool {
        let pool =
            SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
        crate::db::init_db(&pool).await.unwrap();
        pool
    }

    fn limits() -> LayoutLimitsConfig {
        LayoutLimitsConfig::default()
    }

    async fn insert_location(pool: &sqlx::SqlitePool, name: &str) {
        sqlx::query(
            r#"INSERT INTO storage_locations (id, name, location_type, location_path)
               VALUES (?1, ?2, 'bin', ?2)"#,
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn validator_accepts_exactly_max_locations() {
        let pool = mk_pool().await;
        let cfg = row_config("slot-", numbers(1, 500));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(report.is_valid());
        assert_eq!(report.total_count, 500);
        // Above the warn threshold, so the permanence warning is present
        assert_eq!(report.warnings.len(), 1);
    }

    #[tokio::test]
    async fn validator_rejects_over_max_without_warnings() {
        let pool = mk_pool().await;
        let cfg = row_config("slot-", numbers(1, 501));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.total_count, 501);
        assert!(report.errors[0].contains("500"));
        // Short-circuits before the warning and duplicate checks
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn validator_warns_above_threshold_only() {
        let pool = mk_pool().await;

        let cfg = row_config("slot-", numbers(1, 101));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("cannot be undone"));

        let cfg = row_config("slot-", numbers(1, 100));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn validator_reports_duplicate_names() {
        let pool = mk_pool().await;
        insert_location(&pool, "box1-c").await;

        let cfg = row_config("box1-", letters("a", "f"));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("box1-c"));
    }

    #[tokio::test]
    async fn validator_elides_duplicates_beyond_five_examples() {
        let pool = mk_pool().await;
        for c in ["a", "b", "c", "d", "e", "f"] {
            insert_location(&pool, &format!("box1-{}", c)).await;
        }

        let cfg = row_config("box1-", letters("a", "f"));
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains(", ..."));
    }

    #[tokio::test]
    async fn validator_checks_parent_only_when_asked() {
        let pool = mk_pool().await;
        let mut cfg = row_config("box1-", letters("a", "c"));
        cfg.parent_id = Some(uuid::Uuid::new_v4());

        // Preview path: missing parent is ignored
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(report.is_valid());

        // Create path: missing parent is a hard error
        let report = validate_layout(&pool, &limits(), &cfg, true).await.unwrap();
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("does not exist"));
    }

    #[tokio::test]
    async fn validator_reports_shape_errors_in_band() {
        let pool = mk_pool().await;
        let cfg = LayoutConfiguration {
            layout_type: LayoutType::Row,
            prefix: "r-".to_string(),
            ranges: vec![],
            separators: vec![],
            parent_id: None,
            location_type: "bin".to_string(),
            single_part_only: false,
        };
        let report = validate_layout(&pool, &limits(), &cfg, false).await.unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.total_count, 0);
    }
}
