use thiserror::Error;

#[derive(Error, Debug)]
pub enum JavaSourceError {
    #[error("failed to load Java grammar: {0}")]
    Grammar(String),
    #[error("failed to parse Java source: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, JavaSourceError>;
