//! Render an ANSI art file as plain text
//!
//! This example reads a .ans file given on the command line, interprets
//! its escape sequences, and prints the resulting glyph grid row by row.
//! Without an argument it falls back to a small embedded sample.

use ansidoc_core::{parse_with_options, ParseOptions};

// A few colored rows of shade blocks, the bread and butter of art files.
const SAMPLE: &[u8] = b"\x1B[1;36m\xDA\xC4\xC4\xC4\xC4\xC4\xC4\xC4\xC4\xBF\r\n\
\x1B[1;36m\xB3\x1B[0;33m \xB0\xB1\xB2\xDB\xB2\xB1\xB0 \x1B[1;36m\xB3\r\n\
\x1B[1;36m\xC0\xC4\xC4\xC4\xC4\xC4\xC4\xC4\xC4\xD9\x1B[0m\r\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let bytes = match &path {
        Some(path) => std::fs::read(path)?,
        None => SAMPLE.to_vec(),
    };

    let options = ParseOptions::default();
    let (page, summary) = parse_with_options(&bytes, &options);

    for row in 0..page.height() {
        println!("{}", page.row_text(row));
    }

    println!();
    println!(
        "{} bytes -> {} rows x {} columns",
        summary.bytes,
        page.height(),
        page.width()
    );
    println!(
        "{} commands ({} unknown, {} malformed)",
        summary.commands, summary.unknown_commands, summary.malformed_sequences
    );
    if summary.stopped_at_sub {
        println!("stopped at SUB (DOS end-of-file marker)");
    }
    if summary.truncated {
        println!("output truncated at the row limit");
    }

    Ok(())
}
