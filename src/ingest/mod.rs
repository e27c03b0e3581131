//! Ingestion of bank and book feeds into normalized transactions

pub mod csv_import;

pub use csv_import::*;

use serde::{Deserialize, Serialize};

/// Header keywords used to locate columns in an uploaded file
///
/// A column is selected when its lowercased, trimmed header contains any of
/// the keywords; the first such column wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Keywords marking the date column
    pub date_keywords: Vec<String>,
    /// Keywords marking the description column
    pub description_keywords: Vec<String>,
    /// Keywords marking the amount column
    pub amount_keywords: Vec<String>,
    /// Description used when the file has no description column
    pub default_description: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        let words = |list: &[&str]| -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        };
        Self {
            date_keywords: words(&["date", "วันที่"]),
            description_keywords: words(&["desc", "detail", "รายการ"]),
            amount_keywords: words(&["amount", "total", "ยอด", "จำนวน"]),
            default_description: "No Description".to_string(),
        }
    }
}
