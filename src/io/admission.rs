use thiserror::Error;

use crate::io::config::IngestConfig;
use crate::io::raw_file::RawFile;
use crate::state::status::MessageId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("unsupported file extension '{extension}'")]
    UnsupportedExtension { extension: String },
    #[error("file is {size} bytes, limit is below {ceiling}")]
    TooLarge { size: u64, ceiling: u64 },
}

impl AdmissionError {
    pub fn message_id(&self) -> MessageId {
        match self {
            Self::UnsupportedExtension { .. } => MessageId::Msg1,
            Self::TooLarge { .. } => MessageId::Msg2,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AdmissionResult<'a> {
    /// No file was given; the current table should be dropped.
    Cleared,
    Rejected(AdmissionError),
    Accepted(&'a RawFile),
}

/// Extension allow-list plus byte-size ceiling, checked in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdmissionController {
    allowed_extensions: Vec<String>,
    size_ceiling: u64,
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

impl AdmissionController {
    pub fn new(allowed_extensions: Vec<String>, size_ceiling: u64) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            size_ceiling,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.allowed_extensions.clone(), config.size_ceiling)
    }

    pub fn size_ceiling(&self) -> u64 {
        self.size_ceiling
    }

    pub fn admit<'a>(&self, file: Option<&'a RawFile>) -> AdmissionResult<'a> {
        let Some(file) = file else {
            return AdmissionResult::Cleared;
        };

        let extension = file.extension();
        if !self.allowed_extensions.iter().any(|ext| ext == extension) {
            return AdmissionResult::Rejected(AdmissionError::UnsupportedExtension {
                extension: extension.to_string(),
            });
        }

        if file.byte_size() >= self.size_ceiling {
            return AdmissionResult::Rejected(AdmissionError::TooLarge {
                size: file.byte_size(),
                ceiling: self.size_ceiling,
            });
        }

        AdmissionResult::Accepted(file)
    }
}
