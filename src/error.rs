use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown trade direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown session name: {0}")]
    UnknownSession(String),
}
