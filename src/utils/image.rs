//! PNG rendering of a filled grid

use crate::csp::Assignment;
use crate::puzzle::Crossword;
use super::SolutionFormatter;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pixel size of one grid cell
pub const CELL_SIZE: usize = 100;
const CELL_BORDER: usize = 2;
/// Each glyph pixel becomes a square of this many image pixels
const GLYPH_SCALE: usize = 8;
const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// 5x7 bitmaps for A-Z, one row per byte, most significant of the five bits on the left
const LETTERS: [[u8; GLYPH_HEIGHT]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
];

/// Drawn for letters outside A-Z
const UNKNOWN: [u8; GLYPH_HEIGHT] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// An RGBA image of a grid: black background, white open cells, black letters
pub struct GridImage {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u8>,
}

impl GridImage {
    /// Render the puzzle with the letters of `assignment`
    pub fn render(crossword: &Crossword, assignment: &Assignment) -> Self {
        let width = crossword.width * CELL_SIZE;
        let height = crossword.height * CELL_SIZE;
        let mut image = Self {
            width,
            height,
            pixels: BLACK.repeat(width * height),
        };

        let letters = SolutionFormatter::letter_grid(crossword, assignment);
        for (row, cells) in letters.iter().enumerate() {
            for (col, letter) in cells.iter().enumerate() {
                if !crossword.is_open(row, col) {
                    continue;
                }
                let (top, left) = (row * CELL_SIZE, col * CELL_SIZE);
                image.fill_rect(
                    left + CELL_BORDER,
                    top + CELL_BORDER,
                    CELL_SIZE - 2 * CELL_BORDER,
                    CELL_SIZE - 2 * CELL_BORDER,
                    WHITE,
                );
                if let Some(letter) = letter {
                    image.draw_letter(*letter, left, top);
                }
            }
        }

        image
    }

    /// RGBA value at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[start..start + 4]);
        Some(rgba)
    }

    /// Encode as PNG
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create image file: {}", path.display()))?;

        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().context("Failed to write PNG header")?;
        writer
            .write_image_data(&self.pixels)
            .context("Failed to write PNG data")?;
        Ok(())
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: [u8; 4]) {
        for py in y..(y + height).min(self.height) {
            for px in x..(x + width).min(self.width) {
                let start = (py * self.width + px) * 4;
                self.pixels[start..start + 4].copy_from_slice(&color);
            }
        }
    }

    fn draw_letter(&mut self, letter: char, cell_left: usize, cell_top: usize) {
        let glyph = match letter.to_ascii_uppercase() {
            c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
            _ => &UNKNOWN,
        };
        let left = cell_left + (CELL_SIZE - GLYPH_WIDTH * GLYPH_SCALE) / 2;
        let top = cell_top + (CELL_SIZE - GLYPH_HEIGHT * GLYPH_SCALE) / 2;

        for (gy, bits) in glyph.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if bits & (0x10 >> gx) != 0 {
                    self.fill_rect(
                        left + gx * GLYPH_SCALE,
                        top + gy * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                        BLACK,
                    );
                }
            }
        }
    }
}
