use crate::color::{base_color, bright_color};
use crate::grid::Cell;

/// Active text attributes between SGR commands.
///
/// Stores base palette indices only. Bold, reverse and conceal are
/// presentation flags applied when a cell is resolved; the stored
/// indices never change because of them, so repeated reverse video
/// cannot oscillate and background indices never brighten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rendition {
    /// Foreground palette index, 0..=7.
    pub fg: u8,
    /// Background palette index, 0..=7.
    pub bg: u8,
    pub bold: bool,
    pub reverse: bool,
    pub conceal: bool,
}

impl Default for Rendition {
    fn default() -> Self {
        Self {
            fg: 7,
            bg: 0,
            bold: false,
            reverse: false,
            conceal: false,
        }
    }
}

impl Rendition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the documented reset state: white on black, flags clear.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a run of SGR codes in order. Unknown codes are ignored.
    pub fn apply(&mut self, codes: impl Iterator<Item = u16>) {
        for code in codes {
            self.apply_code(code);
        }
    }

    pub fn apply_code(&mut self, code: u16) {
        match code {
            0 => self.reset(),
            1 => self.bold = true,
            7 => self.reverse = true,
            8 => self.conceal = true,
            22 => self.bold = false,
            27 => self.reverse = false,
            28 => self.conceal = false,
            30..=37 => self.fg = (code - 30) as u8,
            40..=47 => self.bg = (code - 40) as u8,
            _ => {}
        }
    }

    /// Resolve a glyph into a cell under the active attributes.
    ///
    /// Bold brightens the foreground only. Reverse swaps the two
    /// resolved colors. Conceal then forces the foreground to the
    /// resolved background, in that order.
    pub fn resolve(&self, glyph: char) -> Cell {
        let mut fg = if self.bold {
            bright_color(self.fg)
        } else {
            base_color(self.fg)
        };
        let mut bg = base_color(self.bg);
        if self.reverse {
            std::mem::swap(&mut fg, &mut bg);
        }
        if self.conceal {
            fg = bg;
        }
        Cell { glyph, fg, bg }
    }

    /// The cell erase operations write: a space under the active
    /// attributes, so erased regions carry the effective background.
    pub fn blank(&self) -> Cell {
        self.resolve(' ')
    }
}
