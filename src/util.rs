use crabquery::{Document, Element};
use once_cell::sync::Lazy;
use regex::Regex;

static QUERY_SPLITTER: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

/// Abstraction over the crabquery roots that expose a CSS `select`.
///
/// Both [`Document`] and [`Element`] carry an inherent
/// `select(&self, &str) -> Vec<Element>`; this trait lets [`select`] and
/// [`select_first`] accept either one.
pub trait Selectable {
    fn select(&self, selector: &str) -> Vec<Element>;
}

impl Selectable for Document {
    fn select(&self, selector: &str) -> Vec<Element> {
        Document::select(self, selector)
    }
}

impl Selectable for Element {
    fn select(&self, selector: &str) -> Vec<Element> {
        Element::select(self, selector)
    }
}

/// Return the result of the first selector in a comma-separated list that
/// matches anything.
///
/// # Example
/// query = "a, p[example], p";
/// where body is
/// <div>
///     <p example>hello</p>
/// </div>
/// will only return 1 p
/// instead of 2
pub fn select<T>(root: &T, query: &str) -> Vec<Element>
where
    T: Selectable,
{
    for query in QUERY_SPLITTER.split(query) {
        let elements = root.select(query);
        if !elements.is_empty() {
            return elements;
        }
    }
    vec![]
}

pub fn select_first<T>(root: &T, query: &str) -> Option<Element>
where
    T: Selectable,
{
    select(root, query).into_iter().next()
}

/// Trimmed text content of an element, empty when the element has none.
pub fn text_of(element: &Element) -> String {
    element
        .text()
        .map(|text| text.trim().to_owned())
        .unwrap_or_default()
}

/// Attribute value passed through verbatim, empty when absent.
pub fn attr_of(element: &Element, name: &str) -> String {
    element.attr(name).unwrap_or_default()
}

/// Host page arguments arrive as strings; anything that is not an integer
/// falls back to the first page.
pub fn parse_page(page: &str) -> i32 {
    page.trim().parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use crabquery::Document;

    use super::*;

    #[test]
    fn page_arguments_are_lenient() {
        assert_eq!(parse_page("3"), 3);
        assert_eq!(parse_page(" 12 "), 12);
        assert_eq!(parse_page("abc"), 1);
        assert_eq!(parse_page(""), 1);
        assert_eq!(parse_page("2.5"), 1);
    }

    #[test]
    fn select_falls_back_over_comma_separated_queries() {
        let doc = Document::from("<div><p class=\"hit\">hello</p></div>");
        let elements = select(&doc, "span.missing, p.hit");
        assert_eq!(elements.len(), 1);
        assert_eq!(text_of(&elements[0]), "hello");
    }

    #[test]
    fn missing_attributes_become_empty_strings() {
        let doc = Document::from("<a class=\"x\">label</a>");
        let element = select_first(&doc, "a.x").unwrap();
        assert_eq!(attr_of(&element, "href"), "");
        assert_eq!(text_of(&element), "label");
    }
}
