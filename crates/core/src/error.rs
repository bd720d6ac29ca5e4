use recipe_types::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{}", crate::constants::NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write recipe file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read recipe file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove recipe directory: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize recipe: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize recipe: {0}")]
    Deserialization(serde_json::Error),

    #[cfg(feature = "mongodb")]
    #[error("document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[cfg(feature = "mongodb")]
    #[error("document store returned a record without an ObjectId")]
    MissingObjectId,
}

/// How a [`RecipeError`] is reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something invalid.
    ClientFault,
    /// The identifier addresses no record.
    NotFound,
    /// The service or its store failed.
    ServerFault,
}

impl RecipeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecipeError::Validation(_) => ErrorKind::ClientFault,
            RecipeError::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::ServerFault,
        }
    }
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;
