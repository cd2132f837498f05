pub mod document;
pub mod extract;
pub mod host;
pub mod http;
pub mod model;
pub mod parse_error;
pub mod script;
pub mod source;
pub mod util;
pub use reqwest::Url;

#[macro_use]
extern crate log;
