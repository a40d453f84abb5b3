use std::path::Path;

use anyhow::Context;
use base64::{Engine, engine::general_purpose::STANDARD};
use percent_encoding::percent_decode_str;

use crate::foundation::error::{ForgeError, ForgeResult};

/// Payload of a `data:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Parse `data:[<mime>][;base64],<payload>`.
    pub fn parse(uri: &str) -> ForgeResult<Self> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| ForgeError::validation("not a data URI"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| ForgeError::validation("data URI has no payload separator"))?;

        let mut params = meta.split(';');
        let mime = match params.next().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_ascii_lowercase(),
            _ => "text/plain".to_string(),
        };
        let base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        let bytes = if base64 {
            let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(compact.as_bytes())
                .map_err(|e| ForgeError::image(format!("data URI payload is not base64: {e}")))?
        } else {
            percent_decode_str(payload).collect::<Vec<u8>>()
        };
        Ok(Self { mime, bytes })
    }

    pub fn to_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Read an image file into a `data:` URI, with the MIME type taken from the detected format.
///
/// The bytes are stored as-is; there is no size limit.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_file_as_data_url(path: &Path) -> ForgeResult<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image upload '{}'", path.display()))?;
    let format = image::guess_format(&bytes).map_err(|e| {
        ForgeError::image(format!("'{}' is not a recognized image: {e}", path.display()))
    })?;
    tracing::debug!(bytes = bytes.len(), ?format, "loaded image upload");
    Ok(DataUrl::new(format.to_mime_type(), bytes).to_uri())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/data_url.rs"]
mod tests;
