//! CSV text encodings.
//!
//! The desk-collections producer and consumer share a Latin-1 file; the
//! encoding on both sides of that pair is a hard interoperability contract,
//! not a default. `Latin1` maps the `iso-8859-1` label to windows-1252, the
//! WHATWG-defined superset every mainstream CSV consumer applies.

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// Text encoding of a CSV artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl CsvEncoding {
    /// The IANA-style label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
        }
    }

    /// Encode UTF-8 text into this encoding's bytes. Characters outside the
    /// target repertoire become numeric character references, per encoding_rs.
    pub fn encode<'a>(self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            Self::Utf8 => Cow::Borrowed(text.as_bytes()),
            Self::Latin1 => {
                let (bytes, _, _) = WINDOWS_1252.encode(text);
                bytes
            }
        }
    }

    /// Decode file bytes into UTF-8 text.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => WINDOWS_1252.decode(bytes).0.into_owned(),
        }
    }
}
