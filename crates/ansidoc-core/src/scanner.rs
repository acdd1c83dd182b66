use crate::cp437;

// ---------- safety constants ----------
/// Parameters retained per CSI sequence; excess parameters are dropped.
pub const MAX_PARAMS: usize = 32;
/// Parameter values saturate here. Art files address an 80-column page,
/// so anything larger is garbage input, not a real coordinate.
pub const MAX_PARAM_VALUE: u16 = 9999;

const ESC: u8 = 0x1B;
const SUB: u8 = 0x1A;

/// Sequential cursor over an in-memory byte buffer.
///
/// Every `next()` advances by exactly one byte, so a scan over `n` bytes
/// terminates after at most `n` steps.
#[derive(Debug)]
pub struct ByteSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Index of the next structural byte (ESC, CR, LF) at or after the
    /// cursor, or the end of the buffer.
    fn next_structural(&self) -> usize {
        memchr::memchr3(ESC, b'\r', b'\n', &self.bytes[self.pos..])
            .map(|p| self.pos + p)
            .unwrap_or(self.bytes.len())
    }
}

/// One recognized unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A glyph translated through CP437, or one of the raw controls the
    /// interpreter acts on: `\r`, `\n`, SUB (`\u{1A}`).
    Literal(char),
    /// A complete CSI sequence.
    Command(Command),
    /// An escape sequence that could not be completed. The offending
    /// bytes are already consumed; scanning resumes at the next clean one.
    Malformed,
}

/// A parsed CSI sequence: parameters plus the final byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    params: Vec<Option<u16>>,
    final_byte: u8,
}

/// Command classification derived from the final byte.
///
/// Matching is ASCII case-insensitive: DOS-era writers emitted both
/// cases freely and ANSI.SYS accepted both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    CursorUp,
    CursorDown,
    CursorForward,
    CursorBack,
    CursorPosition,
    EraseDisplay,
    EraseLine,
    SetRendition,
    SaveCursor,
    RestoreCursor,
    Other(u8),
}

impl Command {
    pub fn final_byte(&self) -> u8 {
        self.final_byte
    }

    pub fn kind(&self) -> CommandKind {
        match self.final_byte.to_ascii_uppercase() {
            b'A' => CommandKind::CursorUp,
            b'B' => CommandKind::CursorDown,
            b'C' => CommandKind::CursorForward,
            b'D' => CommandKind::CursorBack,
            b'H' | b'F' => CommandKind::CursorPosition,
            b'J' => CommandKind::EraseDisplay,
            b'K' => CommandKind::EraseLine,
            b'M' => CommandKind::SetRendition,
            b'S' => CommandKind::SaveCursor,
            b'U' => CommandKind::RestoreCursor,
            other => CommandKind::Other(other),
        }
    }

    /// Parameter at `idx`, falling back to `default` when the parameter
    /// was omitted or the sequence carried fewer than `idx + 1` of them.
    pub fn param(&self, idx: usize, default: u16) -> u16 {
        self.params.get(idx).copied().flatten().unwrap_or(default)
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameters with omissions resolved to 0, the SGR default.
    pub fn sgr_params(&self) -> impl Iterator<Item = u16> + '_ {
        self.params.iter().map(|p| p.unwrap_or(0))
    }
}

/// Pull-based tokenizer over a byte buffer.
///
/// Literal runs are located with `memchr` over the structural bytes and
/// consumed without re-entering the dispatch per byte.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: ByteSource<'a>,
    run_end: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            source: ByteSource::new(bytes),
            run_end: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.source.pos()
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.source.pos() < self.run_end {
            let byte = self.source.next()?;
            return Some(literal(byte));
        }
        let byte = self.source.next()?;
        match byte {
            ESC => Some(self.escape()),
            b'\r' => Some(Token::Literal('\r')),
            b'\n' => Some(Token::Literal('\n')),
            _ => {
                self.run_end = self.source.next_structural();
                Some(literal(byte))
            }
        }
    }

    /// ESC already consumed; decide between CSI and a stray escape.
    fn escape(&mut self) -> Token {
        match self.source.next() {
            Some(b'[') => self.csi(),
            // ESC followed by anything else, or ESC at end of input:
            // both bytes are dropped.
            Some(_) | None => Token::Malformed,
        }
    }

    /// ESC `[` already consumed; accumulate parameters to the final byte.
    fn csi(&mut self) -> Token {
        let mut params: Vec<Option<u16>> = Vec::new();
        let mut current: Option<u16> = None;
        let mut garbled = false;
        loop {
            let Some(byte) = self.source.next() else {
                // Sequence cut off by end of input.
                return Token::Malformed;
            };
            match byte {
                b'0'..=b'9' => {
                    let digit = u16::from(byte - b'0');
                    let value = current
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add(digit);
                    current = Some(value.min(MAX_PARAM_VALUE));
                }
                b';' => {
                    if params.len() < MAX_PARAMS {
                        params.push(current);
                    }
                    current = None;
                }
                b if b.is_ascii_alphabetic() => {
                    if garbled {
                        return Token::Malformed;
                    }
                    if params.len() < MAX_PARAMS {
                        params.push(current);
                    }
                    return Token::Command(Command {
                        params,
                        final_byte: b,
                    });
                }
                // Anything else (DEC '?' prefixes, stray controls) poisons
                // the sequence; keep consuming so scanning resynchronizes
                // after the final byte.
                _ => garbled = true,
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn literal(byte: u8) -> Token {
    match byte {
        // DOS end-of-file marker, passed through raw for the interpreter.
        SUB => Token::Literal('\u{1A}'),
        _ => Token::Literal(cp437::decode(byte)),
    }
}
