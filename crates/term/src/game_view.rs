//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::net::SocketAddr;

use crate::core::{Phase, SessionSnapshot};
use crate::fb::{text_width, FrameBuffer};
use crate::layout::{Viewport, ACCENT, CARD_EDGE, CARD_FILL, GOOD, MUTED, TEXT, TITLE};

const LOADING_TEXT: &str = "Loading...";
const NO_CARDS_TEXT: &str = "No cards in this category";
const GAME_OVER_TEXT: &str = "Game Over!";

const PLAY_HINT: &str = "tilt away / y: correct    tilt toward / n: skip";
const OVER_HINT: &str = "r / Enter: play again    b / Esc: back to categories";
const BACK_HINT: &str = "Esc: back to categories    q: quit";

/// Sensor feed status shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStatusView {
    /// Listen address, or `None` when the feed is disabled.
    pub addr: Option<SocketAddr>,
}

/// Renders the game screen for every session phase.
pub struct GameView {
    /// Minimum inner width of the card box.
    card_min_w: u16,
    /// Inner height of the card box.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_min_w: 28,
            card_h: 5,
        }
    }
}

impl GameView {
    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_feed(snap, None, viewport, fb);
    }

    pub fn render_into_with_feed(
        &self,
        snap: &SessionSnapshot,
        feed: Option<&FeedStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));

        if let Some(category) = snap.category {
            fb.put_str_centered(0, viewport.width, 0, category.name, TITLE);
        }

        match snap.phase {
            Phase::Loading => self.draw_loading(fb, snap, viewport),
            Phase::Playing => self.draw_card(fb, snap, viewport),
            Phase::GameOver => self.draw_summary(fb, snap, viewport),
        }

        self.draw_footer(fb, snap, feed, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_feed(
        &self,
        snap: &SessionSnapshot,
        feed: Option<&FeedStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_feed(snap, feed, viewport, &mut fb);
        fb
    }

    fn draw_loading(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        let y = viewport.center_y(1);
        let text = if snap.no_cards { NO_CARDS_TEXT } else { LOADING_TEXT };
        fb.put_str_centered(0, viewport.width, y, text, MUTED);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        let Some(card) = snap.current_card else {
            return;
        };

        let box_w = (text_width(card.text) + 8)
            .max(self.card_min_w)
            .saturating_add(2)
            .min(viewport.width);
        let box_h = self.card_h.saturating_add(2);
        let rows = box_h + 4;
        let top = viewport.center_y(rows);

        // Header: progress on the left, score on the right, aligned to the card.
        let box_x = viewport.width.saturating_sub(box_w) / 2;
        let mut x = box_x;
        x += fb.put_u32(x, top, (snap.position + 1) as u32, ACCENT);
        fb.put_str(x, top, " / ", MUTED);
        x += 3;
        fb.put_u32(x, top, snap.deck_len as u32, ACCENT);

        let score_w = 7 + digits(snap.score as u32);
        let score_x = box_x.saturating_add(box_w).saturating_sub(score_w);
        fb.put_str(score_x, top, "Score: ", TEXT);
        fb.put_u32(score_x + 7, top, snap.score as u32, GOOD);

        let box_y = top.saturating_add(2);
        fb.fill_rect(box_x, box_y, box_w, box_h, ' ', CARD_FILL);
        fb.draw_box(box_x, box_y, box_w, box_h, CARD_EDGE);
        let text_y = box_y + box_h / 2;
        fb.put_str_centered(box_x, box_w, text_y, card.text, CARD_FILL.bold());

        fb.put_str_centered(0, viewport.width, box_y.saturating_add(box_h + 1), PLAY_HINT, MUTED);
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        let mut y = viewport.center_y(6);
        fb.put_str_centered(0, viewport.width, y, GAME_OVER_TEXT, TITLE);
        y = y.saturating_add(2);

        // "Score: 7 / 10"
        let line_w = 7 + digits(snap.score as u32) + 3 + digits(snap.deck_len as u32);
        let mut x = viewport.width.saturating_sub(line_w) / 2;
        fb.put_str(x, y, "Score: ", TEXT);
        x += 7;
        x += fb.put_u32(x, y, snap.score as u32, GOOD);
        fb.put_str(x, y, " / ", MUTED);
        x += 3;
        fb.put_u32(x, y, snap.deck_len as u32, ACCENT);
        y = y.saturating_add(1);

        if let Some(percent) = snap.percent() {
            let w = digits(percent) + 1;
            let px = viewport.width.saturating_sub(w) / 2;
            let n = fb.put_u32(px, y, percent, ACCENT);
            fb.put_char(px + n, y, '%', ACCENT);
        }
        y = y.saturating_add(2);

        fb.put_str_centered(0, viewport.width, y, OVER_HINT, MUTED);
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        feed: Option<&FeedStatusView>,
        viewport: Viewport,
    ) {
        let y = viewport.height.saturating_sub(1);
        if snap.phase != Phase::GameOver {
            fb.put_str(1, y, BACK_HINT, MUTED);
        }

        let Some(feed) = feed else {
            return;
        };
        let label = match feed.addr {
            Some(addr) => format!("tilt feed {addr}"),
            None => "tilt feed off".to_string(),
        };
        let x = viewport.width.saturating_sub(text_width(&label) + 1);
        fb.put_str(x, y, &label, MUTED);
    }
}

fn digits(value: u32) -> u16 {
    let mut n = value / 10;
    let mut count = 1;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_counts_decimal_places() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(u32::MAX), 10);
    }

    #[test]
    fn default_snapshot_shows_loading() {
        let fb = GameView::default().render(&SessionSnapshot::default(), Viewport::new(60, 20));
        assert!(fb.text().contains(LOADING_TEXT));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        for (w, h) in [(0, 0), (1, 1), (5, 3), (12, 4)] {
            let _ = view.render(&SessionSnapshot::default(), Viewport::new(w, h));
        }
    }
}
