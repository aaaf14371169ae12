use crate::error::{DecodeError, RelayError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use model::FirehoseRecord;
use table::Item;

/// A record's data after base64 and JSON decoding.
pub(crate) struct DecodedRecord {
    pub(crate) bytes: Vec<u8>,
    pub(crate) item: Item,
}

impl DecodedRecord {
    pub(crate) fn decode(record: &FirehoseRecord) -> Result<Self, RelayError> {
        let decode_err = |reason: DecodeError| RelayError::Decode {
            record_id: record.record_id.clone(),
            reason,
        };

        let bytes: Vec<u8> = STANDARD
            .decode(&record.data)
            .map_err(|err| decode_err(DecodeError::Base64(err)))?;

        let item: Item =
            serde_json::from_slice(&bytes).map_err(|err| decode_err(DecodeError::Json(err)))?;

        Ok(DecodedRecord { bytes, item })
    }

    /// Printable form of the raw bytes for logging.
    pub(crate) fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Encode bytes back into the transport encoding they arrived in.
pub(crate) fn encode_data(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
