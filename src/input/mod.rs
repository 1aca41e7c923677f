use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Raw text plus a short description of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;

pub use file::load_file_safe;
