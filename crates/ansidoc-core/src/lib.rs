//! # ansidoc-core
//!
//! ECMA-48/ANSI X3.64 escape sequence interpreter for legacy ANSI art.
//! Raw `.ans` bytes go in, a [`Page`] of CP437 glyph cells with resolved
//! RGBA colors comes out. The interpreter is total: malformed sequences
//! are skipped, hostile growth is capped, and no input ever errors.
//!
//! ```
//! use ansidoc_core::parse;
//!
//! let page = parse(b"\x1B[1;34mhi\x1B[0m", 80);
//! assert_eq!(page.height(), 1);
//! assert_eq!(page.cell(0, 0).unwrap().glyph, 'h');
//! ```

pub mod color;
pub mod cp437;
pub mod grid;
pub mod interpreter;
pub mod rendition;
pub mod scanner;

// Re-export main types for convenience
pub use color::{base_color, bright_color, Rgba, COLOR_PALETTE, DEFAULT_BG, DEFAULT_FG};
pub use grid::{Cell, Page, Surface, DEFAULT_ROW_LIMIT};
pub use interpreter::{
    parse, parse_into, parse_with_options, ParseOptions, ParseSummary, DEFAULT_WIDTH,
};
pub use rendition::Rendition;
pub use scanner::{ByteSource, Command, CommandKind, Scanner, Token};
