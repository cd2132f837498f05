use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterRef {
    pub title: String,
    /// Absolute url of the chapter page.
    pub url: String,
}
