use super::table::{decode_triplet, encode_char};

/// Bytes per encoded unit (`%XX`).
const TRIPLET_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PercentError {
    #[error("cannot encode {ch:?} at offset {offset}: outside printable ASCII")]
    UnmappedCharacter { ch: char, offset: usize },

    #[error("malformed triplet {chunk:?} at offset {offset}")]
    MalformedTriplet { chunk: String, offset: usize },

    #[error("unknown triplet {chunk:?} at offset {offset}")]
    UnknownTriplet { chunk: String, offset: usize },
}

/// Which direction to run, carrying the input for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Encode(String),
    Decode(String),
}

/// One parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Base URL prefixed to the output. Empty means no prefix.
    pub url: String,
    pub mode: Mode,
    /// Double-encode. Has no effect when decoding.
    pub double: bool,
}

impl Options {
    pub fn new(mode: Mode) -> Self {
        Self {
            url: String::new(),
            mode,
            double: false,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn double(mut self, double: bool) -> Self {
        self.double = double;
        self
    }

    /// Run the selected transform and prefix the base URL.
    pub fn transform(&self) -> Result<String, PercentError> {
        let body = match &self.mode {
            Mode::Encode(input) => encode(input, self.double)?,
            Mode::Decode(input) => decode(input, self.double)?,
        };
        Ok(with_base_url(&self.url, &body))
    }
}

/// Percent-encode every character of `input`.
///
/// With `double`, each character of the first-pass triplet is encoded
/// again, so `A` becomes `%25%34%31` rather than `%41`.
pub fn encode(input: &str, double: bool) -> Result<String, PercentError> {
    let width = if double {
        TRIPLET_LEN * TRIPLET_LEN
    } else {
        TRIPLET_LEN
    };
    let mut out = String::with_capacity(input.len() * width);

    for (offset, ch) in input.char_indices() {
        let triplet = encode_char(ch).ok_or(PercentError::UnmappedCharacter { ch, offset })?;
        if !double {
            out.extend(triplet.iter().map(|&b| char::from(b)));
            continue;
        }
        for &b in triplet {
            let inner = char::from(b);
            let again =
                encode_char(inner).ok_or(PercentError::UnmappedCharacter { ch: inner, offset })?;
            out.extend(again.iter().map(|&b| char::from(b)));
        }
    }

    Ok(out)
}

/// Decode consecutive `%XX` triplets back to characters.
///
/// Decoding is always a single pass. `_double` is accepted so both
/// directions share a signature, but a double-encoded string decodes to the
/// first-pass triplets, not the original text.
pub fn decode(input: &str, _double: bool) -> Result<String, PercentError> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(bytes.len() / TRIPLET_LEN);

    for (index, chunk) in bytes.chunks(TRIPLET_LEN).enumerate() {
        let offset = index * TRIPLET_LEN;
        if !is_well_formed(chunk) {
            return Err(PercentError::MalformedTriplet {
                chunk: String::from_utf8_lossy(chunk).into_owned(),
                offset,
            });
        }
        let ch = decode_triplet(chunk).ok_or_else(|| PercentError::UnknownTriplet {
            chunk: String::from_utf8_lossy(chunk).into_owned(),
            offset,
        })?;
        out.push(ch);
    }

    Ok(out)
}

/// `%` followed by two hex digits of either case.
#[inline]
fn is_well_formed(chunk: &[u8]) -> bool {
    matches!(chunk, [b'%', hi, lo] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
}

/// Join `url` and `body` with a single `/`. An empty `url` adds nothing.
pub fn with_base_url(url: &str, body: &str) -> String {
    if url.is_empty() {
        return body.to_string();
    }
    let sep = if url.ends_with('/') { "" } else { "/" };
    let mut out = String::with_capacity(url.len() + sep.len() + body.len());
    out.push_str(url);
    out.push_str(sep);
    out.push_str(body);
    out
}
