use std::path::PathBuf;
use thiserror::Error;

/// Input problems detected before any archive or source file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("path({}) does not exist", .0.display())]
    MissingPath(PathBuf),

    #[error("path({}) is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("class name is empty")]
    EmptyClassName,
}
