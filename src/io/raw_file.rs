use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RawFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },
}

/// A user-selected file as handed over by the file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFile {
    name: String,
    byte_size: u64,
    extension: String,
    contents: Option<String>,
}

impl RawFile {
    pub fn new(name: impl Into<String>, byte_size: u64, contents: Option<String>) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            byte_size,
            extension,
            contents,
        }
    }

    /// Reads and decodes a file from disk. A UTF-8 BOM is dropped from the
    /// contents but still counts toward the byte size.
    pub fn from_path(path: &Path) -> Result<Self, RawFileError> {
        let bytes = fs::read(path).map_err(|source| RawFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let byte_size = bytes.len() as u64;
        let mut text = String::from_utf8(bytes).map_err(|_| RawFileError::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        if text.starts_with('\u{feff}') {
            text.replace_range(..'\u{feff}'.len_utf8(), "");
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, byte_size, Some(text)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

/// Lowercased text after the last '.', empty when the name has none.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_uses_last_dot_and_lowercases() {
        assert_eq!(extension_of("DATA.CSV"), "csv");
        assert_eq!(extension_of("archive.tar.Gz"), "gz");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of("trailing."), "");
    }
}
