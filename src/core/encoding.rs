use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text encoding of the input report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-16", alias = "utf16", alias = "UTF-16")]
    Utf16,
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8")]
    Utf8,
}

impl Encoding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf16 => "utf-16",
            Encoding::Utf8 => "utf-8",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "utf-16" | "utf16" => Ok(Encoding::Utf16),
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            _ => Err(format!("unknown encoding: {s} (expected utf-16|utf-8)")),
        }
    }
}
