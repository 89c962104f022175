//! Source attributions for generated content

use crate::date::CivilDate;

/// A source attribution for a span of generated content
///
/// `start_index` and `end_index` are always sent, even when zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    /// End of the attributed span, exclusive
    pub end_index: i32,
    /// License of the source
    pub license: String,
    /// Publication date of the source; may be year-only
    pub publication_date: CivilDate,
    /// Start of the attributed span
    pub start_index: i32,
    /// Title of the source
    pub title: String,
    /// URI of the source
    pub uri: String,
}

/// The citations attached to a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationMetadata {
    /// Citations, in the order the service returned them
    pub citations: Vec<Citation>,
}
