use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown role code: {0}")]
    UnknownRole(u8),
}
