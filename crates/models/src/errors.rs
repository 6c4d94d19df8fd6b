use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
}
