//! Cursor encoding/decoding
//!
//! Cursors cross the wire as opaque string-comparable tokens. Clients must
//! never inspect them; they only hand the last one back as `after`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cursor encoding/decoding
pub struct CursorCodec;

impl CursorCodec {
    /// Encode cursor to base64
    pub fn encode(value: &str) -> String {
        BASE64.encode(value.as_bytes())
    }

    /// Decode cursor from base64
    pub fn decode(cursor: &str) -> crate::Result<String> {
        let bytes = BASE64
            .decode(cursor.as_bytes())
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))
    }

    /// Encode structured cursor (e.g., timestamp + ID)
    pub fn encode_structured<T: Serialize>(value: &T) -> crate::Result<String> {
        let json = serde_json::to_string(value)
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))?;
        Ok(BASE64.encode(json.as_bytes()))
    }

    /// Decode structured cursor
    pub fn decode_structured<T: for<'de> Deserialize<'de>>(cursor: &str) -> crate::Result<T> {
        let bytes = BASE64
            .decode(cursor.as_bytes())
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))?;
        let json = String::from_utf8(bytes)
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))?;
        serde_json::from_str(&json)
            .map_err(|e| crate::PaginationError::InvalidCursor(e.to_string()))
    }

    /// Derive a cursor from an event timestamp (unix seconds).
    ///
    /// Timestamps are the usual order-inducing key for feed-style
    /// collections; any totally-ordered value works as long as it is
    /// unique per item.
    pub fn from_timestamp(timestamp: &DateTime<Utc>) -> String {
        timestamp.timestamp().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cursor_codec_round_trip() {
        let original = "1581951955";
        let encoded = CursorCodec::encode(original);
        let decoded = CursorCodec::decode(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            CursorCodec::decode("not base64!!"),
            Err(crate::PaginationError::InvalidCursor(_))
        ));
    }

    #[test]
    fn test_structured_cursor_round_trip() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Position {
            timestamp: i64,
            id: String,
        }

        let pos = Position {
            timestamp: 1_581_951_955,
            id: "109".to_string(),
        };
        let encoded = CursorCodec::encode_structured(&pos).unwrap();
        let decoded: Position = CursorCodec::decode_structured(&encoded).unwrap();
        assert_eq!(pos, decoded);
    }

    #[test]
    fn test_timestamp_cursor_is_unix_seconds() {
        let ts = Utc.with_ymd_and_hms(2020, 2, 17, 15, 5, 55).unwrap();
        assert_eq!(CursorCodec::from_timestamp(&ts), "1581951955");
    }
}
