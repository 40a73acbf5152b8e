use serde::{Deserialize, Serialize};

/// Ward model representing Vietnamese wards, communes and special zones (phường/xã/đặc khu)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name_with_type: String,
    pub path: String,
    pub path_with_type: String,
    pub parent_code: String,
}
