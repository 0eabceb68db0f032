//! Structures AI-generated farming advice into a navigable, sectioned
//! document.
//!
//! The upstream generator returns one opaque block of natural-language
//! text with no reliable shape. This crate recovers a cleaned canonical
//! text, an ordered list of titled sections, and structured crop/variety
//! records wherever the text follows a recognizable list pattern. Four
//! passes run in order: cleanup ([`normalize`]), heading segmentation
//! ([`segment`]), crop extraction ([`extract`]), block rendering
//! ([`render`]).
//!
//! Segmentation and extraction are pattern heuristics, not language
//! understanding: atypical input mis-segments, but the pipeline always
//! degrades to some displayable content instead of failing. The only
//! error a caller ever sees is [`EngineError::MissingInput`].
//!
//! ```
//! use agritext::structure;
//!
//! let advice = "Hello farmer.\n1. Crops: grow rice";
//! let response = structure(advice).unwrap();
//! assert_eq!(response.sections.len(), 2);
//! assert_eq!(response.sections[0].id, "introduction");
//! assert_eq!(response.sections[1].title, "Crops");
//! ```

pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod render;
pub mod segment;

use serde::{Deserialize, Serialize};

pub use error::EngineError;
pub use export::ReportContext;
pub use extract::{CropItem, VarietyItem};
pub use render::RenderNode;

/// Tunables exposed to the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Staple-crop vocabulary for the crop-shape gate. Matching is
    /// case-sensitive substring, the way the generator capitalizes crop
    /// names in its prose.
    pub crop_keywords: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crop_keywords: vec!["Rice".to_string(), "Maize".to_string(), "Wheat".to_string()],
        }
    }
}

/// A titled, ordered chunk of the structured response; the unit of
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Stable within one response: `introduction`, `recommendations`, or
    /// `section-<n>` (1-based).
    pub id: String,
    pub title: String,
    pub content: Vec<RenderNode>,
}

/// The engine's terminal artifact: cleaned canonical text plus sections
/// in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredResponse {
    /// Canonical text after cleanup, kept for the download affordance.
    pub cleaned_text: String,
    pub sections: Vec<Section>,
}

impl StructuredResponse {
    /// `(id, title)` pairs in document order, for navigation chrome.
    pub fn outline(&self) -> Vec<(&str, &str)> {
        self.sections
            .iter()
            .map(|section| (section.id.as_str(), section.title.as_str()))
            .collect()
    }

    /// Look up a section by its stable id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Structure a raw response with the default crop vocabulary.
pub fn structure(raw: &str) -> Result<StructuredResponse, EngineError> {
    structure_with(raw, &EngineConfig::default())
}

/// Structure a raw response, gating crop extraction on the caller's
/// vocabulary.
///
/// Accepts any UTF-8 string; fails only when no text was supplied at all.
/// Input that cleans down to nothing yields an empty section list, the
/// accepted empty state.
pub fn structure_with(raw: &str, config: &EngineConfig) -> Result<StructuredResponse, EngineError> {
    if raw.trim().is_empty() {
        return Err(EngineError::MissingInput);
    }

    let cleaned_text = normalize::clean(raw);
    let sections = segment::split_sections(&cleaned_text)
        .into_iter()
        .map(|draft| {
            let crops = extract::crop_items(&draft.body, &config.crop_keywords);
            Section {
                id: draft.id,
                title: draft.title,
                content: render::render_body(&draft.body, crops),
            }
        })
        .collect();

    Ok(StructuredResponse {
        cleaned_text,
        sections,
    })
}
