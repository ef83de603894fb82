use thiserror::Error;

use crate::parser::ParserError;

#[derive(Error, Debug)]
pub enum VarError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Invalid query arguments")]
    InvalidArguments,
}

pub type Result<T> = std::result::Result<T, VarError>;
