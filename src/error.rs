use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum SfiError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("no formulation files found under: {0}")]
    NoEvidence(String),

    #[error("unsupported evidence format '{extension}': {path}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid override '{0}': expected name=true|false")]
    InvalidOverride(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SfiError>;
