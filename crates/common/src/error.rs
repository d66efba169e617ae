use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unsupported report mode: {0}")]
    BadReportMode(String),

    #[error("malformed percent-encoding in query value: {0}")]
    PercentEncoding(String),

    #[error("lexicon table error: {0}")]
    Lexicon(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type FingerResult<T> = Result<T, FingerError>;
