use miette::Diagnostic;
use std::fmt::Display;
use thiserror::Error;

pub use wellops_core::JobError;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("store error: {0}")]
    StoreError(String),

    #[error("job rejected: {0}")]
    #[diagnostic(help("the store was not modified"))]
    JobError(#[from] JobError),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn config(text: impl Display) -> Error {
        Error::ConfigError(text.to_string())
    }

    pub fn parse(error: impl Display) -> Error {
        Error::ParseError(error.to_string())
    }

    pub fn store(error: impl Display) -> Error {
        Error::StoreError(error.to_string())
    }

    pub fn message(text: impl Into<String>) -> Error {
        Error::Message(text.into())
    }
}

impl From<wellops_core::StoreError> for Error {
    fn from(err: wellops_core::StoreError) -> Self {
        Error::store(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse(err)
    }
}
