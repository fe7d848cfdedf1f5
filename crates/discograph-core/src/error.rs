use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown platform key: {0}")]
    UnknownPlatform(String),

    #[error("unknown catalog filter: {0}")]
    UnknownFilter(String),

    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
