//! Cursor pagination types
//!
//! A page is an ordered slice of records plus an opaque continuation token.
//! The token encodes a storage-defined position marker (the key after which
//! iteration resumes), not an offset, so it stays valid for backends that
//! iterate by key range. An empty token means there are no further pages.

use crate::core::error::HogeError;
use crate::core::record::Hoge;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Default page size applied when the client passes `limit=0`
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of records in key order.
///
/// Wire shape: `{"list": [...], "cursor": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HogePage {
    pub list: Vec<Hoge>,
    pub cursor: String,
}

impl HogePage {
    /// A page with no continuation (the iteration is exhausted).
    pub fn complete(list: Vec<Hoge>) -> Self {
        Self {
            list,
            cursor: String::new(),
        }
    }
}

/// Codec for the opaque continuation token.
///
/// The marker is base64url-encoded so clients cannot mistake it for a plain
/// key or an offset; they must echo it back verbatim.
pub struct PageToken;

impl PageToken {
    /// Encode the position marker after the last returned record.
    pub fn encode(position: &str) -> String {
        URL_SAFE_NO_PAD.encode(position.as_bytes())
    }

    /// Decode a client-supplied token into a resume position.
    ///
    /// An empty token means "start of the key order" and decodes to `None`.
    /// Anything that is not valid base64url over UTF-8 fails with
    /// [`HogeError::InvalidCursor`].
    pub fn decode(token: &str) -> Result<Option<String>, HogeError> {
        if token.is_empty() {
            return Ok(None);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| HogeError::InvalidCursor {
                message: e.to_string(),
            })?;

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| HogeError::InvalidCursor {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = PageToken::encode("hoge2");
        assert!(!token.is_empty());
        assert_ne!(token, "hoge2");

        let decoded = PageToken::decode(&token).unwrap();
        assert_eq!(decoded.as_deref(), Some("hoge2"));
    }

    #[test]
    fn test_empty_token_means_start() {
        assert_eq!(PageToken::decode("").unwrap(), None);
    }

    #[test]
    fn test_malformed_token_fails_with_invalid_cursor() {
        let err = PageToken::decode("***not-base64***").unwrap_err();
        assert!(matches!(err, HogeError::InvalidCursor { .. }));
    }

    #[test]
    fn test_non_utf8_token_fails_with_invalid_cursor() {
        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        let err = PageToken::decode(&token).unwrap_err();
        assert!(matches!(err, HogeError::InvalidCursor { .. }));
    }
}
