use std::net::SocketAddr;

use charades::core::{categories, GameSession, SessionSnapshot, SimpleRng, ANIMALS};
use charades::term::{FeedStatusView, FrameBuffer, GameView, PickerView, Viewport};

fn contains(fb: &FrameBuffer, needle: &str) -> bool {
    fb.text().contains(needle)
}

fn playing() -> GameSession<SimpleRng> {
    let mut s = GameSession::new(SimpleRng::new(31));
    s.start(ANIMALS);
    s
}

#[test]
fn picker_lists_categories() {
    let fb = PickerView::default().render(categories(), 0, Viewport::new(80, 24));
    assert!(contains(&fb, "Charades"));
    assert!(contains(&fb, "Animals"));
    assert!(contains(&fb, "Creatures from around the world"));
    assert!(contains(&fb, "50 cards"));
    assert!(contains(&fb, "Enter start"));
}

#[test]
fn game_view_shows_card_progress_and_score() {
    let mut s = playing();
    s.mark_correct();
    s.mark_skip();
    let card = s.current_card().unwrap();

    let fb = GameView::default().render(&s.snapshot(), Viewport::new(80, 24));
    assert!(contains(&fb, card.text));
    assert!(contains(&fb, "3 / 10"));
    assert!(contains(&fb, "Score: 1"));
    assert!(contains(&fb, "Animals"));
}

#[test]
fn game_view_centers_card_text() {
    let s = playing();
    let card = s.current_card().unwrap();
    let viewport = Viewport::new(80, 24);
    let fb = GameView::default().render(&s.snapshot(), viewport);

    let row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains(card.text) && fb.row_text(y).contains('│'))
        .expect("card row");
    let line = fb.row_text(row);
    let byte_start = line.find(card.text).unwrap();
    let left = line[..byte_start].chars().count();
    let right = line.chars().count() - left - card.text.chars().count();
    assert!(left.abs_diff(right) <= 1, "left={left} right={right}");
}

#[test]
fn game_view_shows_summary_after_last_card() {
    let mut s = playing();
    for i in 0..10 {
        if i % 3 == 0 {
            s.mark_correct();
        } else {
            s.mark_skip();
        }
    }
    assert!(s.is_over());

    let fb = GameView::default().render(&s.snapshot(), Viewport::new(80, 24));
    assert!(contains(&fb, "Game Over!"));
    assert!(contains(&fb, "Score: 4 / 10"));
    assert!(contains(&fb, "40%"));
    assert!(contains(&fb, "play again"));
}

#[test]
fn game_view_loading_and_no_cards() {
    let view = GameView::default();
    let fb = view.render(&SessionSnapshot::default(), Viewport::new(60, 20));
    assert!(contains(&fb, "Loading..."));

    let mut s = GameSession::new(SimpleRng::new(1));
    s.start("unknown");
    let fb = view.render(&s.snapshot(), Viewport::new(60, 20));
    assert!(contains(&fb, "No cards in this category"));
    assert!(!contains(&fb, "Loading..."));
}

#[test]
fn game_view_footer_shows_feed_status() {
    let s = playing();
    let view = GameView::default();
    let addr: SocketAddr = "127.0.0.1:7878".parse().unwrap();

    let fb = view.render_with_feed(
        &s.snapshot(),
        Some(&FeedStatusView { addr: Some(addr) }),
        Viewport::new(80, 24),
    );
    assert!(fb.row_text(23).contains("tilt feed 127.0.0.1:7878"));

    let fb = view.render_with_feed(
        &s.snapshot(),
        Some(&FeedStatusView { addr: None }),
        Viewport::new(80, 24),
    );
    assert!(fb.row_text(23).contains("tilt feed off"));
}

#[test]
fn render_into_reuses_and_resizes_buffer() {
    let s = playing();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 5);
    view.render_into(&s.snapshot(), Viewport::new(70, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (70, 20));

    let again = view.render(&s.snapshot(), Viewport::new(70, 20));
    assert_eq!(fb, again);
}

#[test]
fn narrow_terminals_do_not_panic() {
    let mut s = playing();
    let view = GameView::default();
    let picker = PickerView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 6), (30, 8)] {
        let vp = Viewport::new(w, h);
        let _ = picker.render(categories(), 0, vp);
        let _ = view.render(&s.snapshot(), vp);
    }
    for _ in 0..10 {
        s.mark_correct();
    }
    for (w, h) in [(0, 0), (3, 2), (15, 5)] {
        let _ = view.render(&s.snapshot(), Viewport::new(w, h));
    }
}
