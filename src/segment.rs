//! Numbered-heading detection and section splitting.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::EngineError;

/// Heading marker: `<integer>. <text>` at line start, optionally ending
/// with a colon. A numbered sentence inside a paragraph also matches;
/// that ambiguity is accepted rather than corrected.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\d+\.\s+[^:\n]+):?").unwrap());

static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// A titled slice of the response, before any content rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDraft {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Split cleaned text into ordered section drafts.
///
/// Leading unheaded text becomes an `introduction` draft and text with no
/// headings at all becomes a single `recommendations` draft, so non-blank
/// input always yields at least one draft. Blank input yields none. Any
/// internal segmentation error degrades to the single-section fallback.
pub fn split_sections(text: &str) -> Vec<SectionDraft> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    match split_at_headings(text) {
        Ok(drafts) => drafts,
        Err(err) => {
            warn!(%err, "segmentation fell back to a single section");
            vec![fallback_draft(text)]
        }
    }
}

fn split_at_headings(text: &str) -> Result<Vec<SectionDraft>, EngineError> {
    let headings: Vec<regex::Captures> = HEADING_RE.captures_iter(text).collect();
    if headings.is_empty() {
        return Ok(vec![fallback_draft(text)]);
    }

    let mut drafts = Vec::with_capacity(headings.len() + 1);

    let first = whole_match(&headings[0])?;
    let intro = text
        .get(..first.start())
        .ok_or_else(|| bounds_error("introduction"))?
        .trim();
    if !intro.is_empty() {
        drafts.push(SectionDraft {
            id: "introduction".to_string(),
            title: "Introduction".to_string(),
            body: intro.to_string(),
        });
    }

    for (index, caps) in headings.iter().enumerate() {
        let whole = whole_match(caps)?;
        let heading = caps
            .get(1)
            .ok_or_else(|| bounds_error("heading title"))?
            .as_str()
            .trim();

        let end = match headings.get(index + 1) {
            Some(next) => whole_match(next)?.start(),
            None => text.len(),
        };
        let body = text
            .get(whole.end()..end)
            .ok_or_else(|| bounds_error("section body"))?
            .trim();

        drafts.push(SectionDraft {
            id: format!("section-{}", index + 1),
            title: NUMBER_PREFIX_RE.replace(heading, "").into_owned(),
            body: body.to_string(),
        });
    }

    Ok(drafts)
}

fn whole_match<'t>(caps: &regex::Captures<'t>) -> Result<regex::Match<'t>, EngineError> {
    caps.get(0).ok_or_else(|| bounds_error("heading match"))
}

fn bounds_error(what: &str) -> EngineError {
    EngineError::Segmentation(format!("{what} out of range"))
}

fn fallback_draft(text: &str) -> SectionDraft {
    SectionDraft {
        id: "recommendations".to_string(),
        title: "Recommendations".to_string(),
        body: text.to_string(),
    }
}
