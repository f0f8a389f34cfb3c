use std::fmt;

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use serde::de;

use super::datasourceerror::DataSourceError;

/// Text encoding of the holiday source. Names are transcoded to UTF-8 on load.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SourceEncoding(&'static Encoding);

impl SourceEncoding {
    pub fn shift_jis() -> SourceEncoding {
        SourceEncoding(SHIFT_JIS)
    }

    pub fn utf_8() -> SourceEncoding {
        SourceEncoding(UTF_8)
    }

    /// Resolves a WHATWG encoding label such as `Shift_JIS`, `sjis` or `utf-8`.
    pub fn for_label(label: &str) -> Result<SourceEncoding, DataSourceError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(SourceEncoding)
            .ok_or_else(|| DataSourceError::UnknownEncoding(label.to_owned()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Malformed byte sequences become U+FFFD rather than failing the load;
    /// the flag tells whether any were replaced.
    pub fn decode(&self, bytes: &[u8]) -> (String, bool) {
        let (text, had_errors) = self.0.decode_without_bom_handling(bytes);
        (text.into_owned(), had_errors)
    }
}

impl Default for SourceEncoding {
    fn default() -> Self {
        SourceEncoding::shift_jis()
    }
}

impl fmt::Debug for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceEncoding({})", self.name())
    }
}

impl<'de> de::Deserialize<'de> for SourceEncoding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let label = <String as de::Deserialize>::deserialize(deserializer)?;
        SourceEncoding::for_label(&label).map_err(de::Error::custom)
    }
}
