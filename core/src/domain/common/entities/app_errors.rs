use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("not found")]
    NotFound,
}
