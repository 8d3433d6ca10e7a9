//! Host literal decoding.
//!
//! Route templates usually live inside string literals of a host language. The parser works
//! on the decoded characters, while diagnostics and editor spans must point at the literal as
//! written. [`VirtualChars`] keeps both views: the decoded text that the lexer consumes and,
//! for every decoded character, the source range it was produced from.
//!
//! Supported literal forms:
//! - regular strings: `"a\\d{2}"`, with `\\ \" \' \n \r \t \0 \xNN \u{N}` and line continuations
//! - raw strings: `r"..."`, `r#"..."#`
//!
//! Anything else (byte strings, C strings, unterminated literals, unknown escapes) is
//! [`Error::LiteralUnavailable`]: there is no reliable mapping back to the source.

use rowan::{TextRange, TextSize};

use crate::{Error, Result};

/// A decoded character and the source range it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualChar {
    pub ch: char,
    pub span: TextRange,
}

/// Decoded route text with a per-character map back to source offsets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualChars {
    text: String,
    chars: Vec<VirtualChar>,
    /// Byte offset into `text` of each entry in `chars`.
    offsets: Vec<TextSize>,
    /// Source offset just past the decoded content.
    end: TextSize,
}

impl VirtualChars {
    /// Maps a bare template 1:1, as if it were the whole document.
    pub fn from_plain(text: &str) -> Self {
        Self::from_plain_at(text, TextSize::from(0))
    }

    /// Maps a bare template that starts at `base` in the source document.
    pub fn from_plain_at(text: &str, base: TextSize) -> Self {
        let mut chars = Self::with_start(base);
        for (i, ch) in text.char_indices() {
            let start = base + TextSize::from(i as u32);
            chars.push(ch, TextRange::at(start, TextSize::of(ch)));
        }
        chars
    }

    fn with_start(start: TextSize) -> Self {
        Self {
            end: start,
            ..Self::default()
        }
    }

    fn push(&mut self, ch: char, span: TextRange) {
        self.offsets.push(TextSize::of(self.text.as_str()));
        self.text.push(ch);
        self.chars.push(VirtualChar { ch, span });
        self.end = span.end();
    }

    /// The decoded text the lexer operates on.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of decoded characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VirtualChar> {
        self.chars.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualChar> {
        self.chars.iter()
    }

    /// Maps an offset in the decoded text to the source document.
    pub fn source_offset(&self, offset: TextSize) -> TextSize {
        match self.offsets.binary_search(&offset) {
            Ok(index) => self.chars[index].span.start(),
            Err(index) if index > 0 && offset < TextSize::of(self.text.as_str()) => {
                self.chars[index - 1].span.start()
            }
            Err(_) => self.end,
        }
    }

    /// Maps a range in the decoded text to the source document.
    ///
    /// An escaped character such as `\\` is one decoded character but two source characters,
    /// so mapped ranges can be wider than the decoded ones.
    pub fn source_range(&self, range: TextRange) -> TextRange {
        let start = self.source_offset(range.start());
        if range.is_empty() {
            return TextRange::empty(start);
        }
        let last = match self.offsets.binary_search(&(range.end() - TextSize::from(1))) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        let end = self.chars.get(last).map_or(self.end, |c| c.span.end());
        TextRange::new(start, end.max(start))
    }

    /// Maps a source offset back into the decoded text.
    ///
    /// Offsets inside a multi-character escape resolve to the escaped character. Offsets
    /// outside the literal content return `None`.
    pub fn virtual_offset(&self, source: TextSize) -> Option<TextSize> {
        if source == self.end {
            return Some(TextSize::of(self.text.as_str()));
        }
        let index = self
            .chars
            .iter()
            .position(|c| c.span.start() <= source && source < c.span.end())?;
        Some(self.offsets[index])
    }
}

/// Decodes a host string literal that starts at `base` in its document.
pub fn scan(literal: &str, base: TextSize) -> Result<VirtualChars> {
    let scanned = if let Some(rest) = literal.strip_prefix('r') {
        scan_raw(rest, base + TextSize::from(1))
    } else if literal.starts_with('"') {
        scan_regular(literal, base)
    } else {
        Err(unavailable("not a plain or raw string literal"))
    }?;

    tracing::trace!(chars = scanned.len(), "scanned route literal");
    Ok(scanned)
}

fn unavailable(reason: &'static str) -> Error {
    Error::LiteralUnavailable { reason }
}

/// `rest` is the literal with the leading `r` removed; `base` is its source offset.
fn scan_raw(rest: &str, base: TextSize) -> Result<VirtualChars> {
    let hashes = rest.bytes().take_while(|&b| b == b'#').count();
    let after_hashes = &rest[hashes..];
    if !after_hashes.starts_with('"') {
        return Err(unavailable("raw string is missing its opening quote"));
    }

    let closing = format!("\"{}", "#".repeat(hashes));
    let body = &after_hashes[1..];
    let Some(content) = body.strip_suffix(closing.as_str()) else {
        return Err(unavailable("raw string is not terminated"));
    };
    if content.contains(closing.as_str()) {
        return Err(unavailable("raw string terminates early"));
    }

    Ok(VirtualChars::from_plain_at(
        content,
        base + TextSize::from((hashes + 1) as u32),
    ))
}

fn scan_regular(literal: &str, base: TextSize) -> Result<VirtualChars> {
    let mut chars = VirtualChars::with_start(base + TextSize::from(1));
    let mut pos = 1;
    let mut closed = false;

    while let Some(ch) = literal[pos..].chars().next() {
        let start = base + TextSize::from(pos as u32);
        match ch {
            '"' => {
                if pos + 1 != literal.len() {
                    return Err(unavailable("unescaped quote inside string literal"));
                }
                closed = true;
                break;
            }
            '\\' => {
                let (decoded, len) = decode_escape(&literal[pos..])?;
                if let Some(decoded) = decoded {
                    chars.push(decoded, TextRange::at(start, TextSize::from(len as u32)));
                } else {
                    // A line continuation still advances the source position.
                    chars.end = start + TextSize::from(len as u32);
                }
                pos += len;
            }
            _ => {
                chars.push(ch, TextRange::at(start, TextSize::of(ch)));
                pos += ch.len_utf8();
            }
        }
    }

    if !closed {
        return Err(unavailable("string literal is not terminated"));
    }
    Ok(chars)
}

/// Decodes the escape at the start of `text` (which begins with `\`).
///
/// Returns the decoded character (`None` for a line continuation) and the escape's byte length.
fn decode_escape(text: &str) -> Result<(Option<char>, usize)> {
    let Some(kind) = text[1..].chars().next() else {
        return Err(unavailable("string literal ends inside an escape"));
    };

    let simple = match kind {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        _ => None,
    };
    if let Some(ch) = simple {
        return Ok((Some(ch), 2));
    }

    match kind {
        'x' => {
            let digits = text
                .get(2..4)
                .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
                .ok_or_else(|| unavailable("invalid \\x escape"))?;
            let value =
                u8::from_str_radix(digits, 16).map_err(|_| unavailable("invalid \\x escape"))?;
            if value > 0x7F {
                return Err(unavailable("\\x escape out of range"));
            }
            Ok((Some(char::from(value)), 4))
        }
        'u' => {
            let body = text[2..]
                .strip_prefix('{')
                .ok_or_else(|| unavailable("\\u escape is missing `{`"))?;
            let close = body
                .find('}')
                .ok_or_else(|| unavailable("\\u escape is missing `}`"))?;
            let digits = &body[..close];
            if digits.is_empty()
                || digits.len() > 6
                || !digits.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return Err(unavailable("invalid \\u escape"));
            }
            let ch = u32::from_str_radix(digits, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| unavailable("invalid \\u escape"))?;
            Ok((Some(ch), 2 + 1 + close + 1))
        }
        '\n' | '\r' => {
            let skipped = text[1..]
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map_or(text.len() - 1, |(i, _)| i);
            Ok((None, 1 + skipped))
        }
        _ => Err(unavailable("unknown escape sequence")),
    }
}
