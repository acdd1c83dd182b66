//! Custom surface implementation
//!
//! This example shows how to feed the interpreter into your own cell
//! storage instead of the built-in page. The surface here is a fixed
//! viewport backed by a flat vector, the shape a renderer would use.

use ansidoc_core::{parse_into, Cell, Surface, DEFAULT_BG};

// Fixed-size viewport that ignores writes past its bottom edge.
struct Viewport {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    dropped: usize,
}

impl Viewport {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            dropped: 0,
        }
    }

    fn display(&self) {
        println!("Viewport ({}x{}):", self.width, self.height);
        for row in 0..self.height {
            print!("{:2}: ", row);
            for col in 0..self.width {
                print!("{}", self.cells[row * self.width + col].glyph);
            }
            println!();
        }
    }
}

impl Surface for Viewport {
    fn width(&self) -> usize {
        self.width
    }

    fn rows(&self) -> usize {
        self.height
    }

    fn put(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row >= self.height || col >= self.width {
            self.dropped += 1;
            return false;
        }
        self.cells[row * self.width + col] = cell;
        true
    }

    fn reach(&mut self, row: usize) -> bool {
        row < self.height
    }
}

fn main() {
    println!("Interpreting into a 20x6 viewport...\n");

    let mut viewport = Viewport::new(20, 6);

    let sample = b"\x1B[1;33mHello\x1B[0m art!\r\n\
\x1B[44m\xB0\xB1\xB2\xDB\x1B[0m\r\n\
\x1B[4;8HCUP\r\n\
below the edge is dropped\r\nmore\r\nand more\r\nand more";

    let summary = parse_into(sample, &mut viewport);

    viewport.display();

    println!();
    println!(
        "{} commands interpreted, {} writes dropped past the edge",
        summary.commands, viewport.dropped
    );

    // Cells keep their resolved colors, not attribute state.
    let blue = viewport.cells[viewport.width].bg;
    println!("second row background: {} (was {})", blue, DEFAULT_BG);
}
