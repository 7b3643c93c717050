use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One managed property, as configured in the catalog. `external_id` is the
/// key of the combined dataset; catalog order defines processing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub label: String,
    pub catalog_name: String,
    pub external_id: String,
    pub source_url: String,
}

/// Extraction output for one listing on one run.
///
/// Scalar facts hold the empty string when the page carries no recognizable
/// marker for them; consumers never see null. `local_photos` is the
/// order-preserving subsequence of `photos` that downloaded successfully.
/// Field names serialize camelCase to keep the dataset format stable for
/// the downstream catalog sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub label: String,
    pub catalog_name: String,
    pub external_id: String,
    pub source_url: String,
    pub title: String,
    pub rating: String,
    pub review_count: String,
    pub guest_capacity: String,
    pub bedroom_count: String,
    pub bed_count: String,
    pub bathroom_count: String,
    pub property_type: String,
    pub check_in_rule: String,
    pub check_out_rule: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub local_photos: Vec<String>,
    pub scraped_at: DateTime<Utc>,
}
