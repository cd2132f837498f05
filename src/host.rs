//! Boundary between the dispatchers and the host runtime. Every entry
//! point takes the host's string-typed arguments, runs one operation, and
//! fires exactly one of the two host channels.

use crate::model::{ChapterImage, MangaDetail, MangaListResult};
use crate::source::Source;
use crate::util;

/// The result shapes the host contract can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum HostPayload {
    MangaList(MangaListResult),
    MangaDetail(MangaDetail),
    ChapterImages(Vec<ChapterImage>),
    ImageUrl(String),
}

/// Result and exception channels of the host runtime.
pub trait HostChannel: Send + Sync {
    fn end_with_result(&self, result: HostPayload);
    fn end_with_exception(&self, message: &str);
}

pub struct HostAdapter<S> {
    source: S,
}

impl<S: Source> HostAdapter<S> {
    pub fn new(source: S) -> Self {
        HostAdapter { source }
    }

    /// `page_size` is fixed by the site and `filter_options` is not
    /// supported; both stay in the signature because the host always
    /// passes them.
    pub async fn get_manga_list(
        &self,
        host: &dyn HostChannel,
        page: &str,
        _page_size: &str,
        keyword: Option<&str>,
        _filter_options: Option<&str>,
    ) {
        let page = util::parse_page(page);
        match self.source.manga_list(page, keyword).await {
            Ok(result) => host.end_with_result(HostPayload::MangaList(result)),
            Err(e) => {
                error!("manga list failed: {e}");
                host.end_with_exception(&e.to_string());
            }
        }
    }

    pub async fn get_manga_data(&self, host: &dyn HostChannel, url: &str) {
        match self.source.manga(url).await {
            Ok(detail) => host.end_with_result(HostPayload::MangaDetail(detail)),
            Err(e) => {
                error!("manga data failed for {url}: {e}");
                host.end_with_exception(&e.to_string());
            }
        }
    }

    pub async fn get_chapter_image_list(&self, host: &dyn HostChannel, chapter_url: &str) {
        match self.source.images(chapter_url).await {
            Ok(images) => host.end_with_result(HostPayload::ChapterImages(images)),
            Err(e) => {
                error!("chapter image list failed for {chapter_url}: {e}");
                host.end_with_exception(&e.to_string());
            }
        }
    }

    /// Never fails; the identity today, a signing hook for other sites.
    pub async fn get_image_url(&self, host: &dyn HostChannel, path: &str) {
        host.end_with_result(HostPayload::ImageUrl(self.source.image_url(path)));
    }
}
