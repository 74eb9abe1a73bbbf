//! TerminalRenderer: owns the terminal session and flushes frames.
//!
//! Entering puts the terminal in raw mode on the alternate screen, which also
//! pins the layout for the lifetime of the game (the terminal equivalent of an
//! orientation lock). Frames are diffed against the previously flushed frame
//! so only changed runs are written.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: FrameBuffer,
    full_redraw: bool,
    active: bool,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: FrameBuffer::new(0, 0),
            full_redraw: true,
            active: false,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.full_redraw = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (terminal resize).
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Flush `frame` to the terminal.
    ///
    /// The caller's buffer is swapped with the previously shown frame, so the
    /// caller gets a buffer back to render the next frame into.
    pub fn draw_swap(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        let resized = self.shown.width() != frame.width() || self.shown.height() != frame.height();

        self.buf.clear();
        if self.full_redraw || resized {
            encode_full_into(frame, &mut self.buf)?;
        } else {
            encode_diff_into(&self.shown, frame, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut self.shown, frame);
        frame.resize(self.shown.width(), self.shown.height());
        self.full_redraw = false;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_run(fb, 0, y, fb.width(), &mut style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        write_run(next, x, y, len, &mut style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn write_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *style != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of changed cells, row by row.
///
/// Frames of different sizes are entirely dirty.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).filter(|_| w > 0).map(|y| (0, y, w)).collect();
    }

    let mut runs = Vec::new();
    for y in 0..h {
        let mut start: Option<u16> = None;
        for x in 0..w {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, w - s));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_changes_form_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        b.put_str(1, 0, "abc", style);
        b.put_char(5, 1, 'z', style);

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 4);
        assert!(changed_runs(&a, &a.clone()).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &a, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn resized_frames_are_fully_dirty() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);
        assert_eq!(changed_runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn full_encode_contains_text() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(0, 0, "Lion", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("Lion"));
    }
}
