use std::io::{self, Write};

use termion::color;

use crate::{pos, Frame, Glyphs, Pos};

/// Spacing printed after every cell.
const CELL_GAP: &str = "  ";

/// One rendered frame, line by line.
pub struct Canvas {
    lines: Vec<String>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height as usize))
    }

    /// `width` and `height` are in terminal columns and rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lines: Vec::new(),
            width,
            height,
        }
    }

    /// How many cells fit on screen as `(rows, cols)`, the header line excluded.
    pub fn capacity(&self, glyphs: &Glyphs) -> (usize, usize) {
        let cell_width = glyph_width(glyphs) + CELL_GAP.len();
        let rows = self.height.saturating_sub(1);
        let cols = (self.width / cell_width).max(1);
        (rows, cols)
    }

    /// Moves `origin` so that the window stays inside the grid.
    pub fn clamp_origin(&self, origin: Pos, frame: &Frame, glyphs: &Glyphs) -> Pos {
        let (rows, cols) = self.capacity(glyphs);
        let (height, width) = frame.generation.dimensions();
        let max_row = height.saturating_sub(rows) as i32;
        let max_col = width.saturating_sub(cols) as i32;
        pos!(origin.row.clamp(0, max_row), origin.col.clamp(0, max_col))
    }

    pub fn draw(&mut self, frame: &Frame, origin: Pos, glyphs: &Glyphs) {
        let (rows, cols) = self.capacity(glyphs);
        let generation = &frame.generation;

        self.lines.clear();
        self.lines.push(format!(
            "Conway's Game Of Life  generation {}  population {}",
            frame.tick,
            generation.population()
        ));

        let visible = generation.rows().skip(origin.row.max(0) as usize).take(rows);
        for row in visible {
            let mut line = String::new();
            for cell in row.iter().skip(origin.col.max(0) as usize).take(cols) {
                if cell.is_active() {
                    line += &format!("{}{}", color::Fg(color::Green), glyphs.live);
                } else {
                    line += &format!("{}{}", color::Fg(color::White), glyphs.dead);
                }
                line += CELL_GAP;
            }
            line += &format!("{}", color::Fg(color::Reset));
            self.lines.push(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        out.flush()
    }
}

fn glyph_width(glyphs: &Glyphs) -> usize {
    glyphs
        .live
        .chars()
        .count()
        .max(glyphs.dead.chars().count())
        .max(1)
}
