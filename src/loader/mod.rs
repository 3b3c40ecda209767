use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::core::{Encoding, Report};

pub const DEFAULT_INPUT_PATH: &str = "lint_report.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Little => "little-endian",
            ByteOrder::Big => "big-endian",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub path: PathBuf,
    pub encoding: Encoding,
}

impl Default for LoadRequest {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
            encoding: Encoding::Utf16,
        }
    }
}

/// Reads, decodes and parses the report. Any failure, including a report of
/// the wrong shape, comes back as a single error chain.
pub fn load(req: &LoadRequest) -> Result<Report> {
    let text = read_text(&req.path, req.encoding)?;
    let report = parse_report(&text)?;
    tracing::debug!(entries = report.files.len(), "parsed report");
    Ok(report)
}

pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    tracing::debug!(path = %path.display(), %encoding, "reading report");
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let text = match encoding {
        Encoding::Utf16 => decode_utf16(&bytes),
        Encoding::Utf8 => decode_utf8(bytes),
    }
    .with_context(|| format!("failed to decode {} as {encoding}", path.display()))?;

    tracing::debug!(chars = text.chars().count(), "decoded report");
    Ok(text)
}

pub fn parse_report(text: &str) -> Result<Report> {
    serde_json::from_str(text).context("invalid lint report")
}

pub fn detect_byte_order(bytes: &[u8]) -> (ByteOrder, &[u8]) {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => (ByteOrder::Little, rest),
        [0xFE, 0xFF, rest @ ..] => (ByteOrder::Big, rest),
        _ => (ByteOrder::Little, bytes),
    }
}

pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (order, body) = detect_byte_order(bytes);
    let bom_len = bytes.len() - body.len();
    tracing::debug!(byte_order = order.as_str(), bom_len, "utf-16 input");

    if body.len() % 2 != 0 {
        return Err(anyhow!(
            "truncated data: {} bytes is not a whole number of UTF-16 code units",
            body.len()
        ));
    }

    let units = body.chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    let mut out = String::with_capacity(body.len() / 2);
    for (idx, decoded) in char::decode_utf16(units).enumerate() {
        match decoded {
            Ok(c) => out.push(c),
            Err(err) => {
                return Err(anyhow!(
                    "unpaired surrogate 0x{:04X} at byte offset {}",
                    err.unpaired_surrogate(),
                    bom_len + idx * 2
                ));
            }
        }
    }
    Ok(out)
}

pub fn decode_utf8(mut bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(..3);
    }
    String::from_utf8(bytes).map_err(|err| anyhow!("invalid UTF-8: {}", err.utf8_error()))
}
