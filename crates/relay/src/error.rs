use std::fmt::{Display, Formatter};
use table::TableError;

/// Failure of a whole batch, naming the record that caused it.
#[derive(Debug)]
pub enum RelayError {
    Decode {
        record_id: String,
        reason: DecodeError,
    },
    Write {
        record_id: String,
        source: TableError,
    },
}

/// Why a record's data could not be turned into an item.
#[derive(Debug)]
pub enum DecodeError {
    // The data was not valid base64
    Base64(base64::DecodeError),
    // The decoded bytes were not a JSON object
    Json(serde_json::Error),
}

impl RelayError {
    pub fn record_id(&self) -> &str {
        match self {
            RelayError::Decode { record_id, .. } => record_id,
            RelayError::Write { record_id, .. } => record_id,
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Base64(err) => write!(f, "invalid base64: {err}"),
            DecodeError::Json(err) => write!(f, "invalid JSON object: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Base64(err) => Some(err),
            DecodeError::Json(err) => Some(err),
        }
    }
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::Decode { record_id, reason } => {
                write!(f, "Failed to decode record {record_id}: {reason}")
            }
            RelayError::Write { record_id, source } => {
                write!(f, "Failed to write record {record_id}: {source}")
            }
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Decode { reason, .. } => Some(reason),
            RelayError::Write { source, .. } => Some(source),
        }
    }
}
