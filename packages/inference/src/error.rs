use thiserror::Error;

/// Errors that can occur while aggregating a resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Entry id '{id}' is declared more than once")]
    NameCollision { id: String },
}

pub type InferenceResult<T> = Result<T, InferenceError>;
