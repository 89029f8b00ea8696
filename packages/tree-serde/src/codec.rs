//! Codecs between Rust types and file content.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Converts typed values to and from a store's content type `C`.
pub trait Codec<C> {
    /// Serialize a value into file content.
    fn encode<T: Serialize>(&self, value: &T) -> Result<C>;

    /// Deserialize file content into a value.
    fn decode<T: DeserializeOwned>(&self, content: &C) -> Result<T>;
}

/// A codec that stores values as JSON.
///
/// Works with byte content, string content, and `serde_json::Value`
/// content.
///
/// # Example
///
/// ```rust
/// use treefs_serde::{Codec, JsonCodec};
/// use bytes::Bytes;
///
/// let bytes: Bytes = JsonCodec.encode(&vec![1, 2, 3]).unwrap();
/// assert_eq!(&bytes[..], b"[1,2,3]");
///
/// let decoded: Vec<u32> = JsonCodec.decode(&bytes).unwrap();
/// assert_eq!(decoded, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec<Bytes> for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Bytes> {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|e| Error::encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, content: &Bytes) -> Result<T> {
        serde_json::from_slice(content).map_err(|e| Error::decode(e.to_string()))
    }
}

impl Codec<String> for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| Error::encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, content: &String) -> Result<T> {
        serde_json::from_str(content).map_err(|e| Error::decode(e.to_string()))
    }
}

impl Codec<serde_json::Value> for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<serde_json::Value> {
        serde_json::to_value(value).map_err(|e| Error::encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, content: &serde_json::Value) -> Result<T> {
        // from_value consumes its input
        serde_json::from_value(content.clone()).map_err(|e| Error::decode(e.to_string()))
    }
}
