use serde::Serialize;

use super::MangaSummary;

/// Entries in document order; duplicates are kept as the site sent them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangaListResult {
    pub list: Vec<MangaSummary>,
}
