//! Transport decoding: base64 text encoding over a deflate stream.
//!
//! Export tools are not consistent about framing: most wrap the stream in
//! a zlib header, some emit raw deflate. The decoder tries zlib first and
//! falls back to the raw variant, reporting both errors when neither fits.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use buildscope_core::BuildError;
use flate2::read::{DeflateDecoder, ZlibDecoder};

/// Ceiling on the decompressed payload size. The transport body limit only
/// bounds the encoded request; a tiny, highly compressible code could
/// otherwise inflate without bound.
pub const MAX_INFLATED_BYTES: usize = 1024 * 1024;

fn is_transport_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Decode a raw build code into the plain-text payload.
///
/// Pure and synchronous; assumes nothing about the input being well-formed.
pub fn decode(raw: &str) -> Result<String, BuildError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BuildError::InvalidEncoding("build code is empty".into()));
    }
    if let Some(bad) = trimmed.chars().find(|c| !is_transport_char(*c)) {
        return Err(BuildError::InvalidEncoding(format!(
            "character {bad:?} is outside the base64 alphabet"
        )));
    }

    let compressed = STANDARD
        .decode(trimmed)
        .map_err(|e| BuildError::InvalidEncoding(format!("base64 decode failed: {e}")))?;
    if compressed.is_empty() {
        return Err(BuildError::InvalidEncoding(
            "build code decoded to zero bytes".into(),
        ));
    }

    let inflated = inflate(&compressed)?;
    if inflated.is_empty() {
        return Err(BuildError::DecompressionFailed(
            "decompressed payload is empty".into(),
        ));
    }

    String::from_utf8(inflated)
        .map_err(|e| BuildError::MalformedStructure(format!("payload is not valid UTF-8: {e}")))
}

/// Read at most one byte past the ceiling so oversize is detectable without
/// materialising the whole stream.
fn read_capped(reader: impl Read) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    reader
        .take(MAX_INFLATED_BYTES as u64 + 1)
        .read_to_end(&mut out)?;
    Ok(out)
}

fn inflate(compressed: &[u8]) -> Result<Vec<u8>, BuildError> {
    let out = match read_capped(ZlibDecoder::new(compressed)) {
        Ok(out) => out,
        Err(zlib_err) => match read_capped(DeflateDecoder::new(compressed)) {
            Ok(out) => out,
            Err(deflate_err) => {
                return Err(BuildError::DecompressionFailed(format!(
                    "both framings rejected the payload (zlib: {zlib_err}; raw deflate: {deflate_err})"
                )))
            }
        },
    };
    if out.len() > MAX_INFLATED_BYTES {
        return Err(BuildError::DecompressionFailed(format!(
            "decompressed payload exceeds the {MAX_INFLATED_BYTES}-byte ceiling"
        )));
    }
    Ok(out)
}
