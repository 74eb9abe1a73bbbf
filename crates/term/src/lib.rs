//! Terminal rendering for the charades screens.
//!
//! This is a small, screen-oriented rendering layer. It avoids widget/layout
//! frameworks and renders into a plain framebuffer that is diffed and flushed
//! to the terminal.
//!
//! - [`PickerView`] draws the category list
//! - [`GameView`] draws loading, the current card, and the round summary
//! - [`TerminalRenderer`] owns raw mode and the alternate screen
//! - [`RenderThrottle`] gates frames on state revisions

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod picker_view;
pub mod render_throttle;
pub mod renderer;

pub use charades_core as core;
pub use charades_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FeedStatusView, GameView};
pub use layout::Viewport;
pub use picker_view::PickerView;
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
