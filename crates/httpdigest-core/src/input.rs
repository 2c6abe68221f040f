//! # Input Normalization
//!
//! Every body that can be digested is a [`DigestInput`]. Each variant has
//! exactly one rule for turning it into the byte sequence that gets
//! hashed, applied by [`DigestInput::into_bytes`]:
//!
//! 1. **Bytes** pass through unchanged.
//! 2. **Blob** byte sources are read to the end once.
//! 3. **Text** is hashed as its literal UTF-8 bytes. No JSON quoting.
//! 4. **Json** values are serialized compactly in their own key order.
//!
//! Rule 4 keeps insertion order (`serde_json` is built with
//! `preserve_order`), so a structured value and the compact JSON string a
//! client would send for it produce identical bytes:
//! `{"hello":"world"}` as a value and as text hash the same.

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::DigestError;

/// A message body in one of the accepted representations.
#[derive(Debug)]
pub enum DigestInput {
    /// UTF-8 text, hashed as-is.
    Text(String),
    /// A structured value, hashed as its compact JSON serialization.
    ///
    /// Numbers use `serde_json` formatting, which keeps a fractional part
    /// that JavaScript's `JSON.stringify` drops: `{"n": 1.0}` hashes as
    /// `{"n":1.0}`, not `{"n":1}`. To hash a body exactly as another
    /// serializer wrote it, pass that text as [`DigestInput::Text`] or
    /// [`DigestInput::Bytes`].
    Json(Value),
    /// Raw bytes, hashed as-is.
    Bytes(Vec<u8>),
    /// A blob whose bytes are retrieved asynchronously.
    Blob(Blob),
}

impl DigestInput {
    /// Build a `Json` input from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Serialization` if the value cannot be
    /// represented as JSON (e.g. a map with non-string keys).
    pub fn json(value: &impl Serialize) -> Result<Self, DigestError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Json(_) => "json",
            Self::Bytes(_) => "bytes",
            Self::Blob(_) => "blob",
        }
    }

    /// Resolve the input to the byte sequence that gets hashed.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Io` if a blob byte source fails and
    /// `DigestError::Serialization` if a JSON value fails to serialize.
    pub async fn into_bytes(self) -> Result<Vec<u8>, DigestError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Blob(blob) => {
                let content_type = blob.content_type.clone();
                let declared = blob.size();
                let bytes = blob.bytes().await?;
                tracing::trace!(
                    %content_type,
                    declared = ?declared,
                    len = bytes.len(),
                    "read blob body"
                );
                Ok(bytes)
            }
            Self::Text(text) => Ok(text.into_bytes()),
            Self::Json(value) => Ok(serde_json::to_vec(&value)?),
        }
    }
}

impl From<&str> for DigestInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DigestInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for DigestInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for DigestInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Value> for DigestInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Blob> for DigestInput {
    fn from(blob: Blob) -> Self {
        Self::Blob(blob)
    }
}

/// A binary body with a declared media type and an async byte source.
///
/// The content type is carried for callers and diagnostics; it never
/// changes which bytes are hashed.
pub struct Blob {
    content_type: String,
    size: Option<u64>,
    source: Box<dyn AsyncRead + Send + Unpin>,
}

impl Blob {
    /// Wrap an async byte source.
    pub fn new(
        content_type: impl Into<String>,
        source: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            size: None,
            source: Box::new(source),
        }
    }

    /// Wrap bytes already in memory. The size is known up front.
    pub fn from_bytes(content_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        Self {
            content_type: content_type.into(),
            size: Some(size),
            source: Box::new(std::io::Cursor::new(bytes)),
        }
    }

    /// Declare the size of the byte source.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// The declared media type, e.g. `application/json`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The declared size, if known.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Read the byte source to the end. Consumes the blob.
    pub async fn bytes(mut self) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.source.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn bytes_pass_through() {
        let input = DigestInput::Bytes(vec![0, 159, 146, 150]);
        assert_eq!(input.into_bytes().await.unwrap(), vec![0, 159, 146, 150]);
    }

    #[tokio::test]
    async fn text_is_not_json_quoted() {
        let input = DigestInput::from(r#"{"hello": "world"}"#);
        assert_eq!(input.into_bytes().await.unwrap(), br#"{"hello": "world"}"#.to_vec());
    }

    #[tokio::test]
    async fn json_is_compact() {
        let input = DigestInput::from(json!({"hello": "world"}));
        assert_eq!(input.into_bytes().await.unwrap(), br#"{"hello":"world"}"#.to_vec());
    }

    #[tokio::test]
    async fn json_keeps_insertion_order() {
        let input = DigestInput::from(json!({"z": 1, "a": 2}));
        assert_eq!(input.into_bytes().await.unwrap(), br#"{"z":1,"a":2}"#.to_vec());
    }

    #[tokio::test]
    async fn json_from_struct_follows_field_order() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
            age: u32,
        }
        let input = DigestInput::json(&Body { name: "ada", age: 36 }).unwrap();
        assert_eq!(input.kind(), "json");
        assert_eq!(
            input.into_bytes().await.unwrap(),
            br#"{"name":"ada","age":36}"#.to_vec()
        );
    }

    #[tokio::test]
    async fn json_floats_keep_serde_json_formatting() {
        let value = DigestInput::from(json!({"n": 1.0}));
        assert_eq!(value.into_bytes().await.unwrap(), br#"{"n":1.0}"#.to_vec());
        // The same body as another serializer wrote it hashes verbatim as text.
        let text = DigestInput::from(r#"{"n":1}"#);
        assert_eq!(text.into_bytes().await.unwrap(), br#"{"n":1}"#.to_vec());
    }

    #[tokio::test]
    async fn unicode_text_is_utf8() {
        let input = DigestInput::from("h\u{e9}llo");
        assert_eq!(input.into_bytes().await.unwrap(), "h\u{e9}llo".as_bytes().to_vec());
    }

    #[tokio::test]
    async fn blob_is_read_once_to_the_end() {
        let blob = Blob::from_bytes("application/json", br#"{"hello":"world"}"#.to_vec());
        assert_eq!(blob.content_type(), "application/json");
        assert_eq!(blob.size(), Some(17));
        let bytes = DigestInput::from(blob).into_bytes().await.unwrap();
        assert_eq!(bytes, br#"{"hello":"world"}"#.to_vec());
    }

    #[tokio::test]
    async fn blob_from_async_reader() {
        let (mut writer, reader) = tokio::io::duplex(8);
        let blob = Blob::new("application/octet-stream", reader).with_size(5);
        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;
            writer.write_all(b"hello").await.unwrap();
        });
        assert_eq!(blob.size(), Some(5));
        assert_eq!(blob.bytes().await.unwrap(), b"hello".to_vec());
    }

    #[tokio::test]
    async fn blob_keeps_non_utf8_bytes() {
        let raw = vec![0xff, 0xfe, 0x00, 0x80];
        let blob = Blob::from_bytes("image/png", raw.clone());
        assert_eq!(DigestInput::Blob(blob).into_bytes().await.unwrap(), raw);
    }

    #[test]
    fn json_rejects_non_string_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(matches!(
            DigestInput::json(&map),
            Err(DigestError::Serialization(_))
        ));
    }

    #[test]
    fn blob_debug_omits_source() {
        let blob = Blob::from_bytes("text/plain", b"x".to_vec());
        let debug = format!("{blob:?}");
        assert!(debug.contains("text/plain"));
        assert!(debug.contains(".."));
    }
}
