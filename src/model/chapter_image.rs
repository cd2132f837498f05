use serde::Serialize;

/// A single page image of a chapter.
///
/// The site does not expose dimensions; `width` and `height` stay at the
/// placeholder `1` until the host resolves them on image load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterImage {
    pub url: String,
    pub width: i32,
    pub height: i32,
}

impl ChapterImage {
    pub fn placeholder(url: String) -> Self {
        ChapterImage {
            url,
            width: 1,
            height: 1,
        }
    }
}
