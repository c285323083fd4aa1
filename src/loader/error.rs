use std::path::PathBuf;
use thiserror::Error;

/// Fatal loader failures. Anything recoverable lands in the skip list
/// instead.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("source directory does not exist: {0}")]
    RootMissing(PathBuf),

    #[error("source path is not a directory: {0}")]
    NotADirectory(PathBuf),
}
