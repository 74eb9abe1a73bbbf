//! Shared layout and palette for the charades screens.

use crate::fb::{CellStyle, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Row offset that vertically centers a block of `rows`.
    pub fn center_y(&self, rows: u16) -> u16 {
        self.height.saturating_sub(rows) / 2
    }
}

pub(crate) const BG: Rgb = Rgb::new(16, 18, 28);
pub(crate) const CARD_BG: Rgb = Rgb::new(34, 40, 64);

pub(crate) const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 225), BG);
pub(crate) const MUTED: CellStyle = CellStyle::new(Rgb::new(130, 135, 150), BG).dim();
pub(crate) const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 210, 90), BG).bold();
pub(crate) const ACCENT: CellStyle = CellStyle::new(Rgb::new(120, 200, 255), BG).bold();
pub(crate) const GOOD: CellStyle = CellStyle::new(Rgb::new(110, 220, 130), BG).bold();
pub(crate) const CARD_EDGE: CellStyle = CellStyle::new(Rgb::new(120, 200, 255), CARD_BG);
pub(crate) const CARD_FILL: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), CARD_BG);
pub(crate) const SELECTED: CellStyle = CellStyle::new(BG, Rgb::new(120, 200, 255)).bold();
