use crate::grid::{Cell, Page, Surface, DEFAULT_ROW_LIMIT};
use crate::rendition::Rendition;
use crate::scanner::{Command, CommandKind, Scanner, Token};

/// Columns of a standard ANSI art page.
pub const DEFAULT_WIDTH: usize = 80;

/// Options controlling a parse run.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub width: usize,
    pub row_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit;
        self
    }
}

/// Counters describing what a parse run saw (useful for diagnostics).
#[derive(Clone, Debug, Default)]
pub struct ParseSummary {
    /// Bytes consumed, including any skipped malformed sequences.
    pub bytes: usize,
    /// Final page height in rows.
    pub rows: usize,
    pub commands: u64,
    pub unknown_commands: u64,
    pub malformed_sequences: u64,
    /// Input tried to grow the page past its row limit.
    pub truncated: bool,
    /// A SUB byte (DOS end-of-file marker) ended interpretation early.
    pub stopped_at_sub: bool,
}

/// Parse a byte buffer into a page of the given width.
///
/// Total over arbitrary bytes: malformed sequences are skipped, hostile
/// growth is capped, and nothing returns an error.
pub fn parse(bytes: &[u8], width: usize) -> Page {
    let options = ParseOptions::new().with_width(width);
    parse_with_options(bytes, &options).0
}

/// Parse with explicit options, returning the page and run counters.
pub fn parse_with_options(bytes: &[u8], options: &ParseOptions) -> (Page, ParseSummary) {
    let mut page = Page::with_row_limit(options.width, options.row_limit);
    let summary = parse_into(bytes, &mut page);
    (page, summary)
}

/// Drive a caller-owned surface. Width and any row cap come from the
/// surface itself.
pub fn parse_into<S: Surface>(bytes: &[u8], surface: &mut S) -> ParseSummary {
    let mut interpreter = Interpreter::new(surface);
    interpreter.run(bytes);
    interpreter.summary
}

/// Token consumer: tracks the cursor and rendition state, writes cells.
struct Interpreter<'s, S: Surface> {
    surface: &'s mut S,
    rendition: Rendition,
    row: usize,
    col: usize,
    saved_row: usize,
    saved_col: usize,
    summary: ParseSummary,
}

impl<'s, S: Surface> Interpreter<'s, S> {
    fn new(surface: &'s mut S) -> Self {
        Self {
            surface,
            rendition: Rendition::new(),
            row: 0,
            col: 0,
            saved_row: 0,
            saved_col: 0,
            summary: ParseSummary::default(),
        }
    }

    fn run(&mut self, bytes: &[u8]) {
        let mut scanner = Scanner::new(bytes);
        while let Some(token) = scanner.next_token() {
            match token {
                Token::Literal(ch) => self.literal(ch),
                Token::Command(cmd) => self.command(&cmd),
                Token::Malformed => self.summary.malformed_sequences += 1,
            }
            if self.summary.stopped_at_sub {
                break;
            }
        }
        self.summary.bytes = scanner.pos();
        self.summary.rows = self.surface.rows();
    }

    fn literal(&mut self, ch: char) {
        match ch {
            '\r' => self.col = 0,
            // Raw line feed: down one row, column unchanged.
            '\n' => self.advance_rows(1),
            '\u{1A}' => self.summary.stopped_at_sub = true,
            _ => self.print(ch),
        }
    }

    fn print(&mut self, glyph: char) {
        let cell = self.rendition.resolve(glyph);
        if !self.surface.put(self.row, self.col, cell) {
            self.summary.truncated = true;
        }
        self.col += 1;
        if self.col >= self.surface.width() {
            self.col = 0;
            self.advance_rows(1);
        }
    }

    fn command(&mut self, cmd: &Command) {
        self.summary.commands += 1;
        match cmd.kind() {
            CommandKind::CursorUp => {
                self.row = self.row.saturating_sub(move_amount(cmd));
            }
            CommandKind::CursorDown => {
                self.advance_rows(move_amount(cmd));
            }
            CommandKind::CursorForward => {
                let max_col = self.surface.width().saturating_sub(1);
                self.col = self.col.saturating_add(move_amount(cmd)).min(max_col);
            }
            CommandKind::CursorBack => {
                self.col = self.col.saturating_sub(move_amount(cmd));
            }
            CommandKind::CursorPosition => {
                // 1-based row;col, both defaulting to 1, zero meaning 1.
                let row = usize::from(cmd.param(0, 1).max(1)) - 1;
                let col = usize::from(cmd.param(1, 1).max(1)) - 1;
                self.row = row;
                self.col = col.min(self.surface.width().saturating_sub(1));
                self.reach_cursor_row();
            }
            CommandKind::EraseDisplay => self.erase_display(cmd.param(0, 0)),
            CommandKind::EraseLine => self.erase_line(cmd.param(0, 0)),
            CommandKind::SetRendition => self.rendition.apply(cmd.sgr_params()),
            CommandKind::SaveCursor => {
                self.saved_row = self.row;
                self.saved_col = self.col;
            }
            CommandKind::RestoreCursor => {
                // Without a prior save this restores the home position.
                self.row = self.saved_row;
                self.col = self.saved_col;
                self.reach_cursor_row();
            }
            CommandKind::Other(_) => self.summary.unknown_commands += 1,
        }
    }

    fn advance_rows(&mut self, n: usize) {
        self.row = self.row.saturating_add(n);
        self.reach_cursor_row();
    }

    fn reach_cursor_row(&mut self) {
        if !self.surface.reach(self.row) {
            self.summary.truncated = true;
        }
    }

    /// Blank out columns of one already materialized row. Erase never
    /// grows the grid, so rows past the current height are left alone.
    fn erase_span(&mut self, row: usize, cols: std::ops::Range<usize>, blank: Cell) {
        if row >= self.surface.rows() {
            return;
        }
        for col in cols {
            self.surface.put(row, col, blank);
        }
    }

    fn erase_display(&mut self, mode: u16) {
        let blank = self.rendition.blank();
        let width = self.surface.width();
        let rows = self.surface.rows();
        match mode {
            0 => {
                self.erase_span(self.row, self.col..width, blank);
                for row in self.row + 1..rows {
                    self.erase_span(row, 0..width, blank);
                }
            }
            1 => {
                for row in 0..self.row.min(rows) {
                    self.erase_span(row, 0..width, blank);
                }
                self.erase_span(self.row, 0..self.col + 1, blank);
            }
            2 => {
                for row in 0..rows {
                    self.erase_span(row, 0..width, blank);
                }
                self.row = 0;
                self.col = 0;
            }
            _ => {}
        }
    }

    fn erase_line(&mut self, mode: u16) {
        let blank = self.rendition.blank();
        let width = self.surface.width();
        match mode {
            0 => self.erase_span(self.row, self.col..width, blank),
            1 => self.erase_span(self.row, 0..self.col + 1, blank),
            2 => self.erase_span(self.row, 0..width, blank),
            _ => {}
        }
    }
}

/// Cursor move distance: first parameter, default 1, zero meaning 1.
fn move_amount(cmd: &Command) -> usize {
    usize::from(cmd.param(0, 1).max(1))
}
