use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Unknown {kind}: '{value}'")]
    InvalidOption { kind: String, value: String },

    #[error("Invalid import data: {0}")]
    InvalidImport(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
