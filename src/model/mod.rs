mod chapter;
mod chapter_image;
mod envelope;
mod manga_detail;
mod manga_list;
mod manga_summary;

pub use chapter::ChapterRef;
pub use chapter_image::ChapterImage;
pub use envelope::{PageEnvelope, PageFragment};
pub use manga_detail::MangaDetail;
pub use manga_list::MangaListResult;
pub use manga_summary::MangaSummary;
