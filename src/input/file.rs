use super::{LoadError, LoadedText};
use std::path::Path;

/// Reads a UTF-8 text file, rejecting files with no readable content.
pub fn load_file_safe(path: impl AsRef<Path>) -> Result<LoadedText, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}
