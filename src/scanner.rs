/// Cursor over one section of a signature file.
///
/// Every scan is bounded by the section: nothing reads before `start` or past
/// the end of `source`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    pub source: &'a [u8],
    pub start: usize,
    pub current: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self::section(source, 0)
    }

    /// A scanner for the section beginning at `start`.
    pub fn section(source: &'a [u8], start: usize) -> Self {
        let start = start.min(source.len());

        Self {
            source,
            start,
            current: start,
        }
    }

    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        Some(byte)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.current).copied()
    }

    /// The run of bytes ending just before `end` whose bytes all satisfy
    /// `accept`, stopping at the section start.
    pub fn run_before(&self, end: usize, accept: impl Fn(u8) -> bool) -> &'a [u8] {
        let end = end.clamp(self.start, self.source.len());
        let mut from = end;

        while from > self.start && accept(self.source[from - 1]) {
            from -= 1;
        }

        &self.source[from..end]
    }

    /// The bytes from `from` up to, not including, the first byte satisfying
    /// `stop` or the end of input. Returns the bytes and the index the scan
    /// stopped at.
    pub fn run_until(&self, from: usize, stop: impl Fn(u8) -> bool) -> (&'a [u8], usize) {
        let from = from.min(self.source.len());
        let end = self.source[from..]
            .iter()
            .position(|&byte| stop(byte))
            .map_or(self.source.len(), |at| from + at);

        (&self.source[from..end], end)
    }
}

#[inline]
pub fn is_identifier(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Decodes bytes one character per byte (U+0000..U+00FF).
pub fn to_chars(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}
