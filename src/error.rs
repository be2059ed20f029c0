use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("missing type name")]
    MissingTypeName,

    #[error("invalid type name '{0}'")]
    InvalidTypeName(String),

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("generated code is out of date in {0}")]
    Drift(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for GenError {
    fn from(e: toml::de::Error) -> Self {
        GenError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
