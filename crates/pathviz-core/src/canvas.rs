//! Screen-side buffer: [`Glyph`], [`Canvas`], and the diff [`Frame`] handed
//! to a [`Driver`](crate::Driver).
//!
//! A canvas is indexed by terminal `(x, y)` rather than by grid
//! `(row, col)`, because a single grid cell usually covers several screen
//! columns.

use crate::style::Color;

/// One character on screen with its colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    /// A blank glyph with the given background.
    #[inline]
    pub const fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
            bg,
        }
    }

    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the foreground colour (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::blank(Color::DEFAULT)
    }
}

/// A `width`×`height` buffer of [`Glyph`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a canvas filled with default glyphs.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); (w * h) as usize],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Read the glyph at `(x, y)`. Returns the default glyph outside the
    /// canvas.
    pub fn at(&self, x: i32, y: i32) -> Glyph {
        self.index(x, y)
            .map(|i| self.glyphs[i])
            .unwrap_or_default()
    }

    /// Set the glyph at `(x, y)`. No-op outside the canvas.
    pub fn set(&mut self, x: i32, y: i32, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `text` left to right starting at `(x, y)`, clipped at the
    /// right edge.
    pub fn print(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        for (dx, ch) in text.chars().enumerate() {
            self.set(x + dx as i32, y, Glyph { ch, fg, bg });
        }
    }

    /// Fill every position with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Copy another canvas of the same size into this one.
    pub fn copy_from(&mut self, src: &Canvas) {
        if self.width == src.width && self.height == src.height {
            self.glyphs.copy_from_slice(&src.glyphs);
        } else {
            *self = src.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameGlyph / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGlyph {
    pub glyph: Glyph,
    pub x: i32,
    pub y: i32,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two canvases.
///
/// If the sizes differ every glyph of `curr` is included, so the driver
/// repaints from scratch.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let full = prev.width != curr.width || prev.height != curr.height;
    let mut glyphs = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let cg = curr.at(x, y);
            if full || prev.at(x, y) != cg {
                glyphs.push(FrameGlyph { glyph: cg, x, y });
            }
        }
    }
    Frame {
        glyphs,
        width: curr.width,
        height: curr.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_set_and_get() {
        let mut c = Canvas::new(4, 3);
        let g = Glyph::blank(Color::from_rgb(1, 2, 3)).with_char('X');
        c.set(2, 1, g);
        assert_eq!(c.at(2, 1), g);
        // out of bounds returns default and ignores writes
        c.set(9, 9, g);
        assert_eq!(c.at(9, 9), Glyph::default());
    }

    #[test]
    fn print_clips_at_edge() {
        let mut c = Canvas::new(3, 1);
        c.print(1, 0, "abc", Color::DEFAULT, Color::DEFAULT);
        assert_eq!(c.at(1, 0).ch, 'a');
        assert_eq!(c.at(2, 0).ch, 'b');
    }

    #[test]
    fn compute_frame_diff() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(1, 0, Glyph::default().with_char('A'));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.glyphs.len(), 1);
        assert_eq!((frame.glyphs[0].x, frame.glyphs[0].y), (1, 0));
        assert_eq!(frame.glyphs[0].glyph.ch, 'A');
    }

    #[test]
    fn compute_frame_resized_is_full() {
        let a = Canvas::new(1, 1);
        let b = Canvas::new(2, 2);
        assert_eq!(compute_frame(&a, &b).glyphs.len(), 4);
    }
}
