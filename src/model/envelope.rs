use serde::Deserialize;

/// JSON wrapper the site returns for listing pages past the first.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    pub eno: i64,
    pub err: Option<String>,
    pub res: PageFragment,
}

#[derive(Debug, Deserialize)]
pub struct PageFragment {
    /// Partial document; must go through the HTML parser before querying.
    pub html: String,
    pub more: bool,
}
