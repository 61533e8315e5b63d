use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    /// The bytes violate the signature file grammar.
    #[error("malformed input at byte {offset:#x}: {reason} (expected {expected})")]
    MalformedInput {
        offset: usize,
        expected: &'static str,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn malformed(offset: usize, expected: &'static str, reason: &'static str) -> Self {
        Self::MalformedInput {
            offset,
            expected,
            reason,
        }
    }

    /// Missing length byte after a simple signature's `:` at `offset`.
    pub fn truncated_length(offset: usize) -> Self {
        Self::malformed(
            offset,
            "length byte",
            "signature truncated: length byte missing",
        )
    }

    /// A complex signature's `:` at `offset` is the last byte of the file.
    pub fn truncated_body(offset: usize) -> Self {
        Self::malformed(offset, "complex body", "signature truncated: body missing")
    }

    /// Fewer than four offset bytes after the `#` at `offset`.
    pub fn truncated_offset(offset: usize) -> Self {
        Self::malformed(offset, "4-byte big-endian member offset", "truncated offset")
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedInput { .. })
    }

    pub fn offset(&self) -> Option<usize> {
        match *self {
            ParseError::MalformedInput { offset, .. } => Some(offset),
            ParseError::Io(_) => None,
        }
    }

    pub fn report(&self) {
        match self {
            ParseError::MalformedInput {
                offset,
                expected,
                reason,
            } => eprintln!(
                "\x1b[1merror\x1b[0m: {reason}\n  --> byte {offset:#x}: expected \x1b[1m{expected}\x1b[0m",
            ),
            ParseError::Io(err) => eprintln!("\x1b[1merror\x1b[0m: {err}"),
        }
    }
}
