use thiserror::Error;

/// Structural failures during emission. These abort the generation run
/// for the whole file: generated code is committed and reviewed, so a
/// partially emitted file is worse than a stopped build.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("method '{method}' has no receiver parameter")]
    MissingReceiver { method: String },
    #[error("type parameter '{name}' on method '{method}' has no bound")]
    MissingTypeBound { method: String, name: String },
    #[error("unsupported type shape: {0}")]
    UnsupportedType(String),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
