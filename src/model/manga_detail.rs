use serde::Serialize;

use super::ChapterRef;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangaDetail {
    pub title: String,
    pub description: String,
    pub cover: String,
    /// Chapters in document order.
    pub chapters: Vec<ChapterRef>,
}
