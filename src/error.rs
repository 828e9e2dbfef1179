use thiserror::Error;

#[derive(Error, Debug)]
pub enum WttError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("query is empty: enter some text to estimate")]
    EmptyQuery,

    #[error("model not found: {id}")]
    ModelNotFound { id: String },

    #[error("invalid catalog entry {id}: {detail}")]
    InvalidCatalog { id: String, detail: String },

    #[error("invalid energy amount: {value} Wh (must be finite and non-negative)")]
    InvalidEnergy { value: f64 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WttError>;
