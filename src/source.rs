use async_trait::async_trait;

use crate::document::Html;
use crate::extract;
use crate::http::{HttpClient, ReqwestClient, SourceConfig};
use crate::model::{ChapterImage, MangaDetail, MangaListResult, PageEnvelope};
use crate::parse_error::Result;

const LIST_PATH: &str = "/latest";
const SEARCH_PATH: &str = "/search";

/// The operations a source exposes to the host application.
#[async_trait]
pub trait Source: Send + Sync {
    /// A non-empty `keyword` switches the whole operation over to the
    /// search pipeline.
    async fn manga_list(&self, page: i32, keyword: Option<&str>) -> Result<MangaListResult>;

    async fn manga(&self, url: &str) -> Result<MangaDetail>;

    async fn images(&self, chapter_url: &str) -> Result<Vec<ChapterImage>>;

    /// Identity for this site; sites that sign their image urls override
    /// this.
    fn image_url(&self, path: &str) -> String {
        path.to_owned()
    }
}

pub struct BatoTo {
    config: SourceConfig,
    client: Box<dyn HttpClient>,
}

impl BatoTo {
    pub fn new(config: SourceConfig) -> Self {
        let client = Box::new(ReqwestClient::new(&config));
        BatoTo { config, client }
    }

    /// Swap the transport; tests script it, callers may pool or proxy it.
    pub fn with_client(config: SourceConfig, client: Box<dyn HttpClient>) -> Self {
        BatoTo { config, client }
    }

    fn origin(&self) -> String {
        self.config.origin()
    }

    async fn search(&self, page: i32, keyword: &str) -> Result<MangaListResult> {
        let url = format!(
            "{}{}?word={}&page={}",
            self.origin(),
            SEARCH_PATH,
            urlencoding::encode(keyword),
            page
        );
        // search responses are always full documents, no envelope
        let body = self.client.get(&url).await?;
        let doc = Html::parse(&body)?;
        Ok(extract::manga_list(&doc, &self.origin()))
    }
}

#[async_trait]
impl Source for BatoTo {
    async fn manga_list(&self, page: i32, keyword: Option<&str>) -> Result<MangaListResult> {
        if let Some(keyword) = keyword.filter(|keyword| !keyword.is_empty()) {
            return self.search(page, keyword).await;
        }

        let origin = self.origin();
        let url = if page <= 1 {
            format!("{origin}{LIST_PATH}")
        } else {
            format!("{origin}{LIST_PATH}?page={page}")
        };
        let body = self.client.get(&url).await?;

        // page 1 is a full document; later pages arrive wrapped in a JSON
        // envelope carrying a partial document
        let html = if page <= 1 {
            body
        } else {
            let envelope: PageEnvelope = serde_json::from_str(&body)?;
            envelope.res.html
        };

        let doc = Html::parse(&html)?;
        Ok(extract::manga_list(&doc, &origin))
    }

    async fn manga(&self, url: &str) -> Result<MangaDetail> {
        let body = self.client.get(url).await?;
        let doc = Html::parse(&body)?;
        Ok(extract::manga_detail(&doc, &self.origin()))
    }

    async fn images(&self, chapter_url: &str) -> Result<Vec<ChapterImage>> {
        let body = self.client.get(chapter_url).await?;
        let doc = Html::parse(&body)?;
        extract::chapter_images(&doc)
    }
}
