//! Selector-extraction rules: pure functions from a parsed page to an
//! entity, driven by a fixed selector table. A selector miss degrades to
//! the field's empty default; only the image rule can fail, because its
//! payload lives in script text rather than markup.

use crate::document::Html;
use crate::model::{ChapterImage, ChapterRef, MangaDetail, MangaListResult, MangaSummary};
use crate::parse_error::{ParseError, Result};
use crate::util;

const LIST_ITEM: &str = "#series-list > .item";
const LIST_TITLE: &str = ".item-title";
const LIST_COVER: &str = ".item-cover img";

const DETAIL_TITLE: &str = ".item-title";
const DETAIL_DESCRIPTION: &str = "#limit-height-body-summary .limit-html";
const DETAIL_COVER: &str = ".attr-cover > img";
const CHAPTER_ITEM: &str = ".episode-list .main > .item";
const CHAPTER_LINK: &str = ".chapt";

const IMAGE_LIST_CONSTANT: &str = "imgHttps";

/// Site-relative `href`s become `origin + href`; an empty href stays
/// empty. `src`-sourced urls never go through this.
pub fn absolute(origin: &str, href: &str) -> String {
    if href.is_empty() {
        String::new()
    } else {
        format!("{origin}{href}")
    }
}

/// List rule, shared by the main listing and search results.
pub fn manga_list(doc: &Html, origin: &str) -> MangaListResult {
    let mut list = vec![];
    for item in doc.select(LIST_ITEM) {
        let link = util::select_first(&item, LIST_TITLE);
        let title = link.as_ref().map(util::text_of).unwrap_or_default();
        let href = link
            .as_ref()
            .map(|el| util::attr_of(el, "href"))
            .unwrap_or_default();
        let cover = util::select_first(&item, LIST_COVER)
            .map(|el| util::attr_of(&el, "src"))
            .unwrap_or_default();
        list.push(MangaSummary {
            title,
            url: absolute(origin, &href),
            cover,
        });
    }
    MangaListResult { list }
}

pub fn manga_detail(doc: &Html, origin: &str) -> MangaDetail {
    let title = doc
        .select_first(DETAIL_TITLE)
        .map(|el| util::text_of(&el))
        .unwrap_or_default();
    let description = doc
        .select_first(DETAIL_DESCRIPTION)
        .map(|el| util::text_of(&el))
        .unwrap_or_default();
    let cover = doc
        .select_first(DETAIL_COVER)
        .map(|el| util::attr_of(&el, "src"))
        .unwrap_or_default();

    let mut chapters = vec![];
    for item in doc.select(CHAPTER_ITEM) {
        let Some(link) = util::select_first(&item, CHAPTER_LINK) else {
            continue;
        };
        let href = util::attr_of(&link, "href");
        chapters.push(ChapterRef {
            title: util::text_of(&link),
            url: absolute(origin, &href),
        });
    }

    MangaDetail {
        title,
        description,
        cover,
        chapters,
    }
}

/// Image rule: the page embeds its image urls as a script array constant,
/// not as markup.
pub fn chapter_images(doc: &Html) -> Result<Vec<ChapterImage>> {
    let value = doc.script_constant(IMAGE_LIST_CONSTANT)?;
    let urls = value.as_array().ok_or_else(|| {
        ParseError::ScriptEvaluationError(format!("`{IMAGE_LIST_CONSTANT}` is not an array"))
    })?;

    let mut images = Vec::with_capacity(urls.len());
    for url in urls {
        let url = url.as_str().ok_or_else(|| {
            ParseError::ScriptEvaluationError(format!(
                "`{IMAGE_LIST_CONSTANT}` holds a non-string entry"
            ))
        })?;
        images.push(ChapterImage::placeholder(url.to_owned()));
    }
    Ok(images)
}
