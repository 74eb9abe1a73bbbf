use charades::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, 0));
}

#[test]
fn render_throttle_renders_on_revision_change() {
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
    assert!(t.should_render(2, 3));
}

#[test]
fn render_throttle_skips_unchanged_frames_until_heartbeat() {
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(16, 1));
    assert!(!t.should_render(999, 1));
    assert!(t.should_render(1_000, 1));
    assert!(!t.should_render(1_016, 1));
}

#[test]
fn render_throttle_change_restarts_heartbeat() {
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(900, 2));
    assert!(!t.should_render(1_000, 2));
    assert!(t.should_render(1_900, 2));
}
