//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Every frame is encoded as runs of glyphs that differ from the previously
//! drawn frame. With no previous frame (startup, resize, `invalidate`) the
//! whole screen is one set of runs after a clear.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Next frame is drawn in full.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let prev = self
            .last
            .as_ref()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        self.buf.clear();
        encode_frame(prev, fb, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `next` into `out`, skipping glyphs unchanged since `prev`.
///
/// `prev` must have the same size as `next`.
fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.is_none() {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<Style> = None;
    for (x, y, len) in changed_runs(prev, next) {
        queue!(out, cursor::MoveTo(x, y))?;
        for glyph in (x..x + len).filter_map(|gx| next.get(gx, y)) {
            if style != Some(glyph.style) {
                apply_style(out, glyph.style)?;
                style = Some(glyph.style);
            }
            queue!(out, Print(glyph.ch))?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(color(style.fg)),
        SetBackgroundColor(color(style.bg))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` to repaint; every row is one run without `prev`.
fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let width = next.width();
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let Some(prev) = prev else {
            if width > 0 {
                runs.push((0, y, width));
            }
            continue;
        };

        let mut x = 0;
        while x < width {
            let start = x;
            while x < width && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            if x > start {
                runs.push((start, y, x - start));
            } else {
                x += 1;
            }
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);
        for x in 1..=3 {
            b.put(x, 0, 'X', Style::default());
        }
        b.put(4, 1, 'Y', Style::default());

        assert_eq!(changed_runs(Some(&a), &b), vec![(1, 0, 3), (4, 1, 1)]);
    }

    #[test]
    fn first_frame_repaints_every_row() {
        let b = FrameBuffer::new(4, 3);
        assert_eq!(changed_runs(None, &b), vec![(0, 0, 4), (0, 1, 4), (0, 2, 4)]);
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let a = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_frame(Some(&a), &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        queue!(reset_only, ResetColor, SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn changed_glyph_is_printed() {
        let a = FrameBuffer::new(3, 1);
        let mut b = a.clone();
        b.put(2, 0, 'Z', Style::default());

        let mut out = Vec::new();
        encode_frame(Some(&a), &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('Z'));
    }
}
