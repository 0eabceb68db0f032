use thiserror::Error;

/// Failure taxonomy for the structuring pipeline.
///
/// Only [`EngineError::MissingInput`] ever reaches the caller. The other
/// variants exist for the internal recovery paths: each one is caught at
/// its component boundary, logged, and replaced by a simpler rendering of
/// the same text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No response text was supplied at all.
    #[error("no response text was supplied")]
    MissingInput,
    /// Heading detection produced an inconsistent match set.
    #[error("section segmentation failed: {0}")]
    Segmentation(String),
    /// Crop-list parsing hit text it could not slice cleanly.
    #[error("crop extraction failed: {0}")]
    Extraction(String),
    /// A block could not be formatted with the chosen strategy.
    #[error("block rendering failed: {0}")]
    Render(String),
}
