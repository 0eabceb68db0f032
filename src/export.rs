//! Plain-text report assembly for the download affordance.
//!
//! A straight concatenation of the caller's location metadata and the
//! cleaned response text; no structuring logic is involved.

use serde::{Deserialize, Serialize};

/// Location and season inputs echoed into the report header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    pub state: String,
    pub district: String,
    pub block: String,
    pub season: String,
    pub soil_type: String,
}

/// Build the downloadable text artifact from the report header and the
/// cleaned response.
pub fn plain_text_report(context: &ReportContext, cleaned_text: &str) -> String {
    format!(
        "Smart Farming Recommendations\n\nLocation: {}, {}, {}\nSeason: {}\nSoil Type: {}\n\n{}",
        context.state, context.district, context.block, context.season, context.soil_type, cleaned_text
    )
}
