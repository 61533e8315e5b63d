//! Signature file parser.
//!
//! A signature file is two sections split by the first free newline:
//!
//! ```text
//! <simple-section> 0x0A <complex-section>
//! ```
//!
//! The simple section is a run of `<name> ':' <length-byte>` entries. The
//! complex section holds `<name> ':' <body> ('!' | 0x0A | EOF)` declarations
//! whose body encodes members as
//! `<type-name> '#' <u32 big-endian offset> <member-name> ['|']`.

use std::fs;
use std::path::Path;

use crate::errors::{ParseError, ParseResult};
use crate::scanner::{is_identifier, to_chars, Scanner};
use crate::signature::{Member, Signature};

pub const COLON: u8 = b':';
pub const NEWLINE: u8 = b'\n';
pub const BANG: u8 = b'!';
pub const PIPE: u8 = b'|';
pub const HASH: u8 = b'#';

/// Size of the big-endian offset that follows every `#`.
pub const OFFSET_WIDTH: usize = 4;

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    signatures: Vec<Signature>,
}

/// Parses a whole signature file held in memory.
pub fn parse(bytes: &[u8]) -> ParseResult<Vec<Signature>> {
    Parser::new(bytes).parse()
}

/// Reads `path` in one go and parses it.
pub fn load_signature_file(path: impl AsRef<Path>) -> ParseResult<Vec<Signature>> {
    let bytes = fs::read(path.as_ref())?;
    log::debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
    parse(&bytes)
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            scanner: Scanner::new(source),
            signatures: Vec::new(),
        }
    }

    pub fn parse(mut self) -> ParseResult<Vec<Signature>> {
        let split = self.parse_simple_section()?;
        log::trace!("simple section ends, complex section starts at {split:#x}");

        self.scanner = Scanner::section(self.scanner.source, split);
        self.parse_complex_section()?;

        log::debug!("parsed {} signatures", self.signatures.len());
        Ok(self.signatures)
    }

    /// Scans `name ':' length` entries up to the first newline. Returns the
    /// index the complex section starts at.
    fn parse_simple_section(&mut self) -> ParseResult<usize> {
        let mut name = String::new();

        while let Some(byte) = self.scanner.advance() {
            match byte {
                COLON => {
                    let colon = self.scanner.current - 1;
                    let length = self
                        .scanner
                        .advance()
                        .ok_or_else(|| ParseError::truncated_length(colon))?;

                    log::trace!("simple signature {name:?} ({length})");
                    self.signatures
                        .push(Signature::simple(std::mem::take(&mut name), length));
                }
                NEWLINE => return Ok(self.scanner.current),
                _ => name.push(byte as char),
            }
        }

        Ok(self.scanner.current)
    }

    fn parse_complex_section(&mut self) -> ParseResult<()> {
        while let Some(byte) = self.scanner.advance() {
            if byte != COLON {
                continue;
            }

            let colon = self.scanner.current - 1;
            let (signature, terminator) = self.parse_complex(colon)?;
            log::trace!(
                "complex signature {:?} with {} members",
                signature.name(),
                signature.members().map_or(0, <[Member]>::len)
            );
            self.signatures.push(signature);

            // the terminator itself is never a ':'
            self.scanner.current = (terminator + 1).min(self.scanner.source.len());
        }

        Ok(())
    }

    /// Parses the declaration whose `:` sits at `colon`. Returns the
    /// signature and the index of the body's terminator (or end of input).
    fn parse_complex(&self, colon: usize) -> ParseResult<(Signature, usize)> {
        if colon + 1 == self.scanner.source.len() {
            return Err(ParseError::truncated_body(colon));
        }

        let name = to_chars(self.scanner.run_before(colon, is_identifier));
        let (body, terminator) = self
            .scanner
            .run_until(colon + 1, |byte| byte == BANG || byte == NEWLINE);

        let members = parse_members(body, colon + 1)?;

        Ok((Signature::complex(name, members), terminator))
    }
}

/// Splits a complex body into members. `base` is the body's offset in the
/// file, used for error positions.
fn parse_members(body: &[u8], base: usize) -> ParseResult<Vec<Member>> {
    let mut members = Vec::new();
    let mut type_name = String::new();
    let mut cursor = 0;

    while cursor < body.len() {
        let byte = body[cursor];
        if byte != HASH {
            type_name.push(byte as char);
            cursor += 1;
            continue;
        }

        let offset_bytes: [u8; OFFSET_WIDTH] = body
            .get(cursor + 1..cursor + 1 + OFFSET_WIDTH)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| ParseError::truncated_offset(base + cursor))?;
        let offset = u32::from_be_bytes(offset_bytes);
        cursor += 1 + OFFSET_WIDTH;

        let name_len = body[cursor..]
            .iter()
            .position(|&byte| byte == PIPE)
            .unwrap_or(body.len() - cursor);
        let name = to_chars(&body[cursor..cursor + name_len]);

        members.push(Member {
            type_name: std::mem::take(&mut type_name),
            name,
            offset,
        });

        // skip the name and its '|'
        cursor += name_len + 1;
    }

    Ok(members)
}
