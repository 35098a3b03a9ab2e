//! Recommendation result types.

use mediswitch_store::ItemRecord;
use serde::Serialize;

pub const UNKNOWN_COMPANY: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description";

/// One recommended item, with optional catalog fields resolved to defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub image_url: String,
    pub company: String,
    pub excellent_review: f64,
    pub average_review: f64,
    pub poor_review: f64,
    pub description: String,
}

impl From<&ItemRecord> for Recommendation {
    fn from(item: &ItemRecord) -> Self {
        Self {
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            company: item
                .company
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            excellent_review: item.excellent_review.unwrap_or(0.0),
            average_review: item.average_review.unwrap_or(0.0),
            poor_review: item.poor_review.unwrap_or(0.0),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}
