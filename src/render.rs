//! Per-section presentation: decide a displayable shape for each block.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::error::EngineError;
use crate::extract::CropItem;

/// Longest `Label:` prefix still rendered as a labeled subsection.
const MAX_LABEL_CHARS: usize = 50;

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static LEAD_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][A-Za-z\s()]+:").unwrap());
static PRIORITIZATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+prioritization:").unwrap());

/// One displayable block of section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// Plain prose paragraph.
    Paragraph { text: String },
    /// Ordered list items with their bullet markers stripped.
    BulletList { items: Vec<String> },
    /// `Label: body` pair rendered as a small heading over its text.
    Subsection { label: String, body: String },
    /// Structured crop recommendations, with the text preceding the first
    /// crop anchor as an opening paragraph and any trailing
    /// `Prioritization:` text as a highlighted callout.
    CropList {
        lead: Option<String>,
        crops: Vec<CropItem>,
        prioritization: Option<String>,
    },
}

/// Render a section body into ordered blocks.
///
/// A non-empty crop list takes the structured path; anything else, and any
/// crop-render failure, falls through to paragraph classification. Every
/// non-blank paragraph yields exactly one block, in paragraph order.
pub fn render_body(body: &str, crops: Vec<CropItem>) -> Vec<RenderNode> {
    if !crops.is_empty() {
        match crop_block(body, crops) {
            Ok(node) => return vec![node],
            Err(err) => warn!(%err, "crop rendering fell back to paragraphs"),
        }
    }

    paragraph_blocks(body)
}

fn crop_block(body: &str, crops: Vec<CropItem>) -> Result<RenderNode, EngineError> {
    let lead = match LEAD_ANCHOR_RE.find(body) {
        Some(anchor) => body
            .get(..anchor.start())
            .ok_or_else(|| EngineError::Render("lead slice out of range".to_string()))?
            .trim(),
        None => "",
    };

    let prioritization = match PRIORITIZATION_RE.find(body) {
        Some(marker) => body
            .get(marker.end()..)
            .ok_or_else(|| EngineError::Render("prioritization slice out of range".to_string()))?
            .trim(),
        None => "",
    };

    Ok(RenderNode::CropList {
        lead: (!lead.is_empty()).then(|| lead.to_string()),
        crops,
        prioritization: (!prioritization.is_empty()).then(|| prioritization.to_string()),
    })
}

fn paragraph_blocks(body: &str) -> Vec<RenderNode> {
    PARAGRAPH_RE
        .split(body)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(classify_paragraph)
        .collect()
}

fn classify_paragraph(paragraph: &str) -> RenderNode {
    if paragraph.contains("\n* ") || paragraph.trim_start().starts_with("* ") {
        return RenderNode::BulletList {
            items: bullet_items(paragraph),
        };
    }

    if !paragraph.contains('\n') {
        if let Some((label, rest)) = paragraph.split_once(':') {
            if label.trim().chars().count() <= MAX_LABEL_CHARS {
                return RenderNode::Subsection {
                    label: label.trim().to_string(),
                    body: rest.trim().to_string(),
                };
            }
        }
    }

    RenderNode::Paragraph {
        text: paragraph.trim().to_string(),
    }
}

fn bullet_items(paragraph: &str) -> Vec<String> {
    paragraph
        .split("\n* ")
        .map(|item| {
            let item = item.trim();
            item.strip_prefix("* ").unwrap_or(item).trim()
        })
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
