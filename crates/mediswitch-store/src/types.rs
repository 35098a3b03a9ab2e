//! Data types for catalog items and catalog statistics.

use mediswitch_ingest::{FeatureSource, FormTag};
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog column holding the item name.
pub const NAME_COLUMN: &str = "Medicine Name";

/// Columns every catalog file must carry. Without them no combined text can
/// be built for the similarity index.
pub const REQUIRED_COLUMNS: &[&str] = &[NAME_COLUMN, "Composition", "Uses", "Side_effects"];

/// One catalog entry.
///
/// Serializes with snake_case field names. Optional columns stay `None`
/// here; defaults are only applied when a recommendation is built from the
/// record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemRecord {
    pub name: String,
    pub composition: String,
    pub uses: String,
    pub side_effects: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excellent_review: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_review: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poor_review: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One catalog CSV row, keyed by the catalog's column headers.
///
/// `Company` and `Manufacturer` are read independently so a file carrying
/// both still loads; `Company` wins when both are set.
#[derive(Debug, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Medicine Name")]
    name: String,
    #[serde(rename = "Composition")]
    composition: String,
    #[serde(rename = "Uses")]
    uses: String,
    #[serde(rename = "Side_effects")]
    side_effects: String,
    #[serde(rename = "Dosage", default)]
    dosage: Option<String>,
    #[serde(rename = "Company", default)]
    company: Option<String>,
    #[serde(rename = "Manufacturer", default)]
    manufacturer: Option<String>,
    #[serde(rename = "Image URL", default)]
    image_url: String,
    #[serde(rename = "Excellent Review %", default, deserialize_with = "percentage")]
    excellent_review: Option<f64>,
    #[serde(rename = "Average Review %", default, deserialize_with = "percentage")]
    average_review: Option<f64>,
    #[serde(rename = "Poor Review %", default, deserialize_with = "percentage")]
    poor_review: Option<f64>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
}

/// Review percentage cell. Blank, unparseable and non-finite values
/// (`nan`, `inf`) are all absent.
fn percentage<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = csv::invalid_option(deserializer)?;
    Ok(value.filter(|v| v.is_finite()))
}

impl From<CatalogRow> for ItemRecord {
    fn from(row: CatalogRow) -> Self {
        Self {
            name: row.name,
            composition: row.composition,
            uses: row.uses,
            side_effects: row.side_effects,
            dosage: row.dosage,
            company: row.company.or(row.manufacturer),
            image_url: row.image_url,
            excellent_review: row.excellent_review,
            average_review: row.average_review,
            poor_review: row.poor_review,
            description: row.description,
        }
    }
}

impl ItemRecord {
    /// Minimal record with the four required text fields.
    pub fn new(
        name: impl Into<String>,
        composition: impl Into<String>,
        uses: impl Into<String>,
        side_effects: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            composition: composition.into(),
            uses: uses.into(),
            side_effects: side_effects.into(),
            ..Default::default()
        }
    }

    /// Mean of whichever review percentages are present.
    pub fn mean_review(&self) -> Option<f64> {
        let present: Vec<f64> = [self.excellent_review, self.average_review, self.poor_review]
            .into_iter()
            .flatten()
            .collect();
        if present.is_empty() {
            None
        } else {
            Some(present.iter().sum::<f64>() / present.len() as f64)
        }
    }
}

impl FeatureSource for ItemRecord {
    fn composition(&self) -> &str {
        &self.composition
    }

    fn uses(&self) -> &str {
        &self.uses
    }

    fn side_effects(&self) -> &str {
        &self.side_effects
    }
}

/// Catalog-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub num_medicines: usize,
    pub total_companies: usize,
    pub avg_rating: f64,
    pub medicine_types: Vec<FormTag>,
}
