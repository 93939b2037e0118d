use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing, unreadable and directory paths all land here.
    #[error("File {} not found.", .0.display())]
    FileNotAccessible(PathBuf, #[source] io::Error),
    #[error("{} is not valid UTF-8 text", .0.display())]
    InvalidText(PathBuf),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
