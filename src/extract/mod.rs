//! Crop-recommendation extraction from section bodies.
//!
//! A body qualifies ("crop-shaped") only when it mentions a known staple
//! crop and contains at least one colon. Two parsing strategies cover the
//! shapes the generator actually produces — bullet lines and inline
//! `Name: description` runs — picked once per body by a pure predicate.
//! Both keep source order and never raise; an unparseable body yields no
//! crops, which sends the renderer down its generic paragraph path.

pub mod bullets;
pub mod inline;

use serde::Serialize;
use tracing::warn;

/// One recommended crop with its varieties in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropItem {
    pub name: String,
    pub description: String,
    pub varieties: Vec<VarietyItem>,
}

/// A named variety under a crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarietyItem {
    pub name: String,
    pub description: String,
}

/// Which parsing strategy applies to a crop-shaped body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// Lines introduced by `* ` bullets.
    Bulleted,
    /// Inline `Name: description` runs without bullets.
    Inline,
}

/// Pick the strategy for a body. Bullets win whenever any line carries one.
pub fn detect_style(body: &str) -> ListStyle {
    if body.contains("\n* ") || body.trim_start().starts_with("* ") {
        ListStyle::Bulleted
    } else {
        ListStyle::Inline
    }
}

/// True when the body looks like a crop-recommendation list. Keyword
/// matching is case-sensitive substring, the way the generator
/// capitalizes crop names.
pub fn is_crop_shaped(body: &str, keywords: &[String]) -> bool {
    body.contains(':') && keywords.iter().any(|keyword| body.contains(keyword.as_str()))
}

/// Extract crop records from a section body. Returns an empty list when
/// the body is not crop-shaped or parsing fails.
pub fn crop_items(body: &str, keywords: &[String]) -> Vec<CropItem> {
    if !is_crop_shaped(body, keywords) {
        return Vec::new();
    }

    match detect_style(body) {
        ListStyle::Bulleted => bullets::parse(body),
        ListStyle::Inline => match inline::parse(body) {
            Ok(crops) => crops,
            Err(err) => {
                warn!(%err, "crop extraction fell back to generic rendering");
                Vec::new()
            }
        },
    }
}
