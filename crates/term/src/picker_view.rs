//! PickerView: the category selection screen.
//!
//! Pure rendering, no I/O.

use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::{Viewport, ACCENT, MUTED, SELECTED, TEXT, TITLE};
use crate::types::Category;

const TITLE_TEXT: &str = "Charades";
const SUBTITLE_TEXT: &str = "Hold the phone to your forehead and guess the word";
const HINT_TEXT: &str = "↑/↓ select   Enter start   q quit";

/// Rows used by one list entry (name line, description line, spacer).
const ENTRY_ROWS: u16 = 3;

#[derive(Debug, Default)]
pub struct PickerView;

impl PickerView {
    pub fn render_into(
        &self,
        categories: &[Category],
        selected: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));

        let list_rows = (categories.len().max(1) as u16).saturating_mul(ENTRY_ROWS);
        let block_rows = 4 + list_rows;
        let mut y = viewport.center_y(block_rows);

        fb.put_str_centered(0, viewport.width, y, TITLE_TEXT, TITLE);
        y = y.saturating_add(1);
        fb.put_str_centered(0, viewport.width, y, SUBTITLE_TEXT, MUTED);
        y = y.saturating_add(2);

        if categories.is_empty() {
            fb.put_str_centered(0, viewport.width, y, "No categories", MUTED);
        }

        let list_w = categories
            .iter()
            .map(|c| entry_width(c))
            .max()
            .unwrap_or(0)
            .min(viewport.width);
        let list_x = viewport.width.saturating_sub(list_w) / 2;

        for (i, category) in categories.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            self.draw_entry(fb, category, i == selected, list_x, list_w, y);
            y = y.saturating_add(ENTRY_ROWS);
        }

        fb.put_str_centered(0, viewport.width, viewport.height.saturating_sub(1), HINT_TEXT, MUTED);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, categories: &[Category], selected: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(categories, selected, viewport, &mut fb);
        fb
    }

    fn draw_entry(
        &self,
        fb: &mut FrameBuffer,
        category: &Category,
        selected: bool,
        x: u16,
        w: u16,
        y: u16,
    ) {
        let name_style = if selected { SELECTED } else { ACCENT };
        if selected {
            fb.fill_rect(x, y, w, 1, ' ', SELECTED);
            fb.put_char(x, y, '▶', SELECTED);
        }
        fb.put_str(x + 2, y, category.name, name_style);

        let count_style = if selected {
            SELECTED
        } else {
            CellStyle { dim: true, ..TEXT }
        };
        let count_x = x.saturating_add(w).saturating_sub(count_width(category.card_count));
        let digits = fb.put_u32(count_x, y, category.card_count, count_style);
        fb.put_str(count_x + digits, y, " cards", count_style);

        fb.put_str(x + 2, y.saturating_add(1), category.description, MUTED);
    }
}

fn count_width(count: u32) -> u16 {
    let mut digits = 1;
    let mut n = count / 10;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits + " cards".len() as u16
}

fn entry_width(category: &Category) -> u16 {
    let name_line = 2 + crate::fb::text_width(category.name) + 3 + count_width(category.card_count);
    let desc_line = 2 + crate::fb::text_width(category.description);
    name_line.max(desc_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::categories;

    #[test]
    fn count_width_counts_digits() {
        assert_eq!(count_width(0), 7);
        assert_eq!(count_width(50), 8);
        assert_eq!(count_width(100), 9);
    }

    #[test]
    fn selected_entry_is_highlighted() {
        let fb = PickerView::default().render(categories(), 0, Viewport::new(80, 24));
        let row = (0..fb.height())
            .find(|&y| fb.row_text(y).contains("Animals"))
            .unwrap();
        assert!(fb.row_text(row).contains('▶'));
        assert!(fb.row_text(row).contains("50 cards"));
        let marker_x = fb.row_text(row).chars().position(|c| c == '▶').unwrap() as u16;
        assert_eq!(fb.get(marker_x, row).unwrap().style, SELECTED);
    }
}
