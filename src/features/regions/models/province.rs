use serde::{Deserialize, Serialize};

/// Province model representing Vietnamese provinces and centrally-run cities (tỉnh/thành phố)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub name_with_type: String,
}
