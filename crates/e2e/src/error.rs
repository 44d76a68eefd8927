//! Error types for the suite runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Failed to load config {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: lds_sync_api::Error,
    },

    #[error("Unknown test: {0}")]
    TestNotFound(String),

    #[error(transparent)]
    Api(#[from] lds_sync_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
