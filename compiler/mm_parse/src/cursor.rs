//! Byte cursor over a sentinel-terminated copy of the pattern.
//!
//! The buffer always ends with a `0x00` sentinel so `current()` never reads
//! past the buffer. A pattern may itself contain a NUL byte inside a
//! literal body; `is_eof()` tells the two apart by comparing against the
//! source length.

/// Owned copy of the pattern with a trailing sentinel.
#[derive(Clone, Debug)]
pub(crate) struct SourceBuffer<'a> {
    source: &'a str,
    /// `source` bytes followed by a `0x00` sentinel.
    buf: Vec<u8>,
}

impl<'a> SourceBuffer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut buf = Vec::with_capacity(source.len() + 1);
        buf.extend_from_slice(source.as_bytes());
        buf.push(0);
        SourceBuffer { source, buf }
    }

    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor {
            source: self.source,
            buf: &self.buf,
            pos: 0,
            // Patterns longer than 4 GiB are clamped; the parser rejects them
            // long before reaching this offset.
            source_len: u32::try_from(self.source.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Cursor over a [`SourceBuffer`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// The full character at the current position, `None` at EOF.
    pub(crate) fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.source[self.pos as usize..].chars().next()
    }

    /// Source text between two byte offsets.
    ///
    /// Both offsets must fall on character boundaries; the parser only slices
    /// at ASCII delimiters, which guarantees this.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len);
        &self.source[start as usize..end as usize]
    }

    /// Skip spaces and tabs.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds and return the consumed text.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the scan.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.slice(start, self.pos)
    }

    /// Advance to the next occurrence of `byte` and return the text skipped.
    ///
    /// The cursor is left on `byte`. Returns `None` and moves to EOF if
    /// `byte` does not occur in the rest of the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub(crate) fn eat_until(&mut self, byte: u8) -> Option<&'a str> {
        let start = self.pos;
        let remaining = &self.buf[start as usize..self.source_len as usize];
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.pos += offset as u32;
                Some(self.slice(start, self.pos))
            }
            None => {
                self.pos = self.source_len;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
