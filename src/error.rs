use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output failed: {0}")]
    Output(std::io::Error),

    #[error("Controller has no model bound")]
    ModelUnbound,
}

pub type Result<T> = std::result::Result<T, Error>;
