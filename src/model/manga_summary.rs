use serde::Serialize;

/// One entry of a listing or search result page.
///
/// Absent fields are empty strings, not options; the host contract has no
/// null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangaSummary {
    pub title: String,
    /// Absolute url of the series page, or empty when the item carried no
    /// link.
    pub url: String,
    /// Taken from the cover `src` attribute verbatim.
    pub cover: String,
}
