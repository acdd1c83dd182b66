//! ansidoc - ANSI art document loading
//!
//! This crate turns legacy ANSI art files into glyph grids, with support for:
//! - ECMA-48/ANSI.SYS escape sequences (colors, cursor movement, erasing)
//! - CP437 glyph translation
//! - SAUCE trailer detection behind the DOS end-of-file marker
//! - Hostile input: malformed sequences skip, growth is capped
//!
//! `load` covers the common case:
//!
//! ```no_run
//! let page = ansidoc::load("artwork.ans")?;
//! for row in 0..page.height() {
//!     println!("{}", page.row_text(row));
//! }
//! # Ok::<(), ansidoc::DocumentError>(())
//! ```
//!
//! The interpreter itself lives in `ansidoc-core` and is re-exported here.

pub mod document;
pub mod error;
pub mod import;

// Re-export main types for convenience
pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use import::{import, load, load_with_options, ImportOptions};

pub use ansidoc_core::{
    base_color, bright_color, parse, parse_into, parse_with_options, Cell, Page, ParseOptions,
    ParseSummary, Rgba, Surface, COLOR_PALETTE, DEFAULT_BG, DEFAULT_FG,
};
