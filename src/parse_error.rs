use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Network error, status = {0}")]
    NetworkError(reqwest::StatusCode),
    #[error(transparent)]
    NetworkErrorUnknown(#[from] reqwest::Error),
    #[error("Cloudflare's I'm Under Attack Mode")]
    CloudflareIUAM,
    #[error("HTML could not be parsed")]
    BadHTML,
    #[error("Malformed pagination envelope: {0}")]
    BadEnvelope(#[from] serde_json::Error),
    #[error("Script constant '{0}' was never assigned")]
    ScriptConstantNotFound(String),
    #[error("Script evaluation failed: {0}")]
    ScriptEvaluationError(String),
}

pub type Result<T> = core::result::Result<T, ParseError>;
