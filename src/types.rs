use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which kind of tokens a range contributes to generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    Letters,
    Numbers,
}

/// One endpoint of a range: a letter for letter ranges, an integer for
/// number ranges. Untagged so JSON bodies can say `"a"` or `5` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeEndpoint {
    Number(i64),
    Letter(String),
}

/// One dimension of a layout: an inclusive letter or number range with
/// optional capitalization (letters) or zero-padding (numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSpecification {
    pub range_type: RangeType,
    pub start: RangeEndpoint,
    pub end: RangeEndpoint,
    #[serde(default)]
    pub capitalize: bool,
    #[serde(default)]
    pub zero_pad: bool,
}

/// Layout shape; mandates how many ranges the configuration carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    Single,
    Row,
    Grid,
    #[serde(rename = "grid_3d")]
    Grid3d,
}

impl LayoutType {
    /// Number of ranges this layout shape requires.
    pub fn expected_ranges(&self) -> usize {
        match self {
            LayoutType::Single => 0,
            LayoutType::Row => 1,
            LayoutType::Grid => 2,
            LayoutType::Grid3d => 3,
        }
    }
}

fn default_location_type() -> String {
    "bin".to_string()
}

/// Declarative description of a batch of storage locations to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    pub layout_type: LayoutType,
    pub prefix: String,
    #[serde(default)]
    pub ranges: Vec<RangeSpecification>,
    #[serde(default)]
    pub separators: Vec<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default = "default_location_type")]
    pub location_type: String,
    #[serde(default)]
    pub single_part_only: bool,
}

/// Response of the read-only preview endpoint. Errors are in-band; the
/// endpoint itself always answers 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPreviewResponse {
    pub sample_names: Vec<String>,
    pub last_name: String,
    pub total_count: usize,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

/// Response of the transactional bulk-create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateResponse {
    pub created_ids: Vec<Uuid>,
    pub created_count: usize,
    pub success: bool,
    pub errors: Vec<String>,
}

/// A persisted storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageLocationDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location_type: String,
    pub single_part_only: bool,
    pub parent_id: Option<Uuid>,
    pub location_path: String,
    /// Snapshot of the layout configuration that produced this row, if any.
    pub layout_config: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for creating a single storage location outside of a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub description: Option<String>,
    pub location_type: Option<String>,
    pub single_part_only: Option<bool>,
    pub parent_id: Option<Uuid>,
}
