//! Inline crop lists: `Name: description` runs without bullets.
//!
//! Capitalized `<phrase>:` anchors delimit crops; everything between one
//! anchor and the next is that crop's combined description-plus-varieties
//! text, and a secondary case-insensitive scan of the same pattern splits
//! trailing varieties from the leading description.
//!
//! The anchor pattern is a heuristic: any capitalized phrase followed by
//! a colon counts as a crop boundary, so a label inside the text (a
//! trailing `Prioritization:`, for example) mis-splits into a spurious
//! record. That matches the shape of the generator's output and is kept
//! as a known limitation rather than corrected.

use std::sync::LazyLock;

use regex::Regex;

use super::{CropItem, VarietyItem};
use crate::error::EngineError;

static CROP_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][A-Za-z\s()]+):").unwrap());
static VARIETY_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-z][a-z\s()\-]+):").unwrap());

/// Parse an inline crop run in document order.
pub fn parse(body: &str) -> Result<Vec<CropItem>, EngineError> {
    let anchors: Vec<regex::Captures> = CROP_ANCHOR_RE.captures_iter(body).collect();
    let mut crops = Vec::with_capacity(anchors.len());

    for (index, caps) in anchors.iter().enumerate() {
        let whole = caps.get(0).ok_or_else(|| slice_error("crop anchor"))?;
        let name = caps.get(1).ok_or_else(|| slice_error("crop name"))?;

        let end = match anchors.get(index + 1) {
            Some(next) => next.get(0).ok_or_else(|| slice_error("next anchor"))?.start(),
            None => body.len(),
        };
        let combined = body
            .get(whole.end()..end)
            .ok_or_else(|| slice_error("crop text"))?
            .trim();

        crops.push(split_varieties(name.as_str().trim(), combined)?);
    }

    Ok(crops)
}

/// Split a crop's combined text into its description and any trailing
/// variety entries.
fn split_varieties(name: &str, combined: &str) -> Result<CropItem, EngineError> {
    let anchors: Vec<regex::Captures> = VARIETY_ANCHOR_RE.captures_iter(combined).collect();

    if anchors.is_empty() {
        return Ok(CropItem {
            name: name.to_string(),
            description: combined.to_string(),
            varieties: Vec::new(),
        });
    }

    let first = anchors[0].get(0).ok_or_else(|| slice_error("variety anchor"))?;
    let description = combined
        .get(..first.start())
        .ok_or_else(|| slice_error("crop description"))?
        .trim()
        .to_string();

    let mut varieties = Vec::with_capacity(anchors.len());
    for (index, caps) in anchors.iter().enumerate() {
        let whole = caps.get(0).ok_or_else(|| slice_error("variety anchor"))?;
        let variety_name = caps.get(1).ok_or_else(|| slice_error("variety name"))?;

        let end = match anchors.get(index + 1) {
            Some(next) => next.get(0).ok_or_else(|| slice_error("next variety"))?.start(),
            None => combined.len(),
        };
        let text = combined
            .get(whole.end()..end)
            .ok_or_else(|| slice_error("variety text"))?
            .trim();

        varieties.push(VarietyItem {
            name: variety_name.as_str().trim().to_string(),
            description: text.to_string(),
        });
    }

    Ok(CropItem {
        name: name.to_string(),
        description,
        varieties,
    })
}

fn slice_error(what: &str) -> EngineError {
    EngineError::Extraction(format!("{what} out of range"))
}
