//! Writing-mode flow of the text block
//!
//! The host only knows two physical writing modes: horizontal and top-to-bottom
//! columns flowing right to left. The other two directions are produced by
//! turning the block half way round, so they add 180° to the user's rotation.
//! Bottom-to-top text is also mirrored horizontally, which swaps left and
//! right text alignment.

use super::types::{Direction, HorizontalAlign};

/// Half turn added for the mirrored directions
pub const HALF_TURN: f64 = 180.0;

/// Physical writing mode understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingMode {
    HorizontalTb,
    TbRl,
}

impl WritingMode {
    pub fn css_value(self) -> &'static str {
        match self {
            WritingMode::HorizontalTb => "horizontal-tb",
            WritingMode::TbRl => "tb-rl",
        }
    }
}

/// Final orientation of the text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFlow {
    /// Rotation actually applied, in degrees (user rotation plus base)
    pub rotation: f64,
    pub text_align: HorizontalAlign,
    pub writing_mode: WritingMode,
}

impl TextFlow {
    pub fn new(direction: Direction, align_h: HorizontalAlign, rotation: f64) -> Self {
        let base = if direction.is_mirrored() { HALF_TURN } else { 0.0 };
        let text_align = match direction {
            Direction::HorizontalBottomToTop => align_h.mirrored(),
            _ => align_h,
        };
        let writing_mode = if direction.is_vertical() {
            WritingMode::TbRl
        } else {
            WritingMode::HorizontalTb
        };

        Self {
            rotation: base + rotation,
            text_align,
            writing_mode,
        }
    }
}
