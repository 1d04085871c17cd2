use thiserror::Error;

use super::conformation::ConformationError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("conformation rejected a mutation: {source}")]
    Conformation {
        #[from]
        source: ConformationError,
    },

    #[error("internal logic error: {0}")]
    Internal(String),
}
