use crate::color::{Rgba, DEFAULT_BG, DEFAULT_FG};

/// Rows a page may grow to before it stops and sets the truncated flag.
/// Bounds worst-case memory at `width * row_limit` cells for hostile
/// input full of cursor-down commands.
pub const DEFAULT_ROW_LIMIT: usize = 10_000;

/// One grid cell: a glyph with fully resolved colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
        }
    }
}

/// The narrow write/grow interface the interpreter drives.
///
/// Implementations decide how rows materialize; the interpreter only
/// ever writes cells and announces how far down the cursor has been.
pub trait Surface {
    /// Fixed column count. Must be at least 1.
    fn width(&self) -> usize;

    /// Rows materialized so far.
    fn rows(&self) -> usize;

    /// Write a cell, materializing rows up to `row` first. Returns
    /// false when a row cap rejected the write or `col` is out of
    /// range; the write is then dropped.
    fn put(&mut self, row: usize, col: usize, cell: Cell) -> bool;

    /// Materialize blank rows through `row` without writing. Returns
    /// false when a row cap stopped the growth.
    fn reach(&mut self, row: usize) -> bool;
}

/// A page of ANSI art: fixed width, rows appended on demand.
///
/// Rows are only ever added, never removed or reordered. Growth stops
/// at the row limit; the page then reports itself truncated and drops
/// writes past the cap while parsing continues.
#[derive(Clone, Debug)]
pub struct Page {
    width: usize,
    rows: Vec<Vec<Cell>>,
    row_limit: usize,
    truncated: bool,
}

impl Page {
    /// An empty page. Width 0 is clamped to 1.
    pub fn new(width: usize) -> Self {
        Self::with_row_limit(width, DEFAULT_ROW_LIMIT)
    }

    pub fn with_row_limit(width: usize, row_limit: usize) -> Self {
        Self {
            width: width.max(1),
            rows: Vec::new(),
            row_limit,
            truncated: false,
        }
    }

    /// Fixed column count, at least 1.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows materialized so far. An untouched page has height 0.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when input tried to grow the page past its row limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// The glyphs of one row as a string, mostly for tests and demos.
    /// Rows not materialized come back empty.
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|r| r.iter().map(|c| c.glyph).collect())
            .unwrap_or_default()
    }

    fn grow_to(&mut self, row: usize) -> bool {
        if row < self.rows.len() {
            return true;
        }
        // Grow as far as the limit allows, even when the target row is
        // past it; a jump over the cap still materializes the cap.
        while self.rows.len() <= row && self.rows.len() < self.row_limit {
            self.rows.push(vec![Cell::default(); self.width]);
        }
        if row >= self.rows.len() {
            self.truncated = true;
            return false;
        }
        true
    }
}

impl Surface for Page {
    fn width(&self) -> usize {
        self.width
    }

    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn put(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if col >= self.width || !self.grow_to(row) {
            return false;
        }
        self.rows[row][col] = cell;
        true
    }

    fn reach(&mut self, row: usize) -> bool {
        self.grow_to(row)
    }
}
