use std::panic;

use crabquery::{Document, Element};
use serde_json::Value;

use crate::parse_error::{ParseError, Result};
use crate::{script, util};

/// A parsed page. Wraps the HTML engine so callers only see selector
/// queries and script-constant lookup.
pub struct Html {
    doc: Document,
}

impl Html {
    /// Lenient parse; partial fragments (as carried by pagination
    /// envelopes) are fine. A parser panic surfaces as [`ParseError::BadHTML`].
    pub fn parse(raw: &str) -> Result<Html> {
        panic::catch_unwind(|| Document::from(raw))
            .map(|doc| Html { doc })
            .map_err(|_| ParseError::BadHTML)
    }

    pub fn select(&self, query: &str) -> Vec<Element> {
        util::select(&self.doc, query)
    }

    pub fn select_first(&self, query: &str) -> Option<Element> {
        util::select_first(&self.doc, query)
    }

    /// Looks up `name` in the page's data payload script.
    ///
    /// The payload script is taken to be the longest inline `<script>`,
    /// ties going to the first in document order.
    pub fn script_constant(&self, name: &str) -> Result<Value> {
        let mut payload: Option<String> = None;
        for element in self.doc.select("script") {
            if element.attr("src").is_some() {
                continue;
            }
            let Some(text) = element.text() else {
                continue;
            };
            if payload.as_ref().map_or(true, |best| text.len() > best.len()) {
                payload = Some(text);
            }
        }
        let payload =
            payload.ok_or_else(|| ParseError::ScriptConstantNotFound(name.to_owned()))?;
        script::constant(&payload, name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn longest_inline_script_carries_the_payload() {
        let html = r#"
            <html><body>
            <script>var tiny = 1;</script>
            <script src="/app.js"></script>
            <script>
                var filler = "padding padding padding padding";
                const imgHttps = ["u1","u2"];
            </script>
            </body></html>
        "#;
        let doc = Html::parse(html).unwrap();
        assert_eq!(
            doc.script_constant("imgHttps").unwrap(),
            json!(["u1", "u2"])
        );
    }

    #[test]
    fn script_tie_goes_to_the_first_in_document_order() {
        let html = concat!(
            "<body>",
            "<script>const which = 'first';</script>",
            "<script>const which = 'other';</script>",
            "</body>",
        );
        let doc = Html::parse(html).unwrap();
        assert_eq!(doc.script_constant("which").unwrap(), json!("first"));
    }

    #[test]
    fn page_without_scripts_reports_constant_not_found() {
        let doc = Html::parse("<p>plain</p>").unwrap();
        let err = doc.script_constant("imgHttps").unwrap_err();
        assert!(matches!(err, ParseError::ScriptConstantNotFound(_)));
    }

    #[test]
    fn fragments_parse_without_raising() {
        let doc = Html::parse("<div class=\"item\"><a href=\"/x\">x</a>").unwrap();
        assert!(doc.select_first("div.item a").is_some());
    }
}
