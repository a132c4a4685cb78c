//! Layout engine for the text block
//!
//! A layout pass has two geometry phases:
//! 1. **Placement**: the writing-mode flow and the position solver decide the
//!    rotation, anchor, translation and padding of the block.
//! 2. **Correction**: once the placed block has been measured, the overflow
//!    compensator derives the margins that keep the rotated block anchored.
//!
//! Both phases are pure. Running a pass again with the same settings and the
//! same measurement produces the same [`LayoutResult`].

pub mod compensate;
pub mod config;
pub mod flow;
pub mod position;
pub mod types;

pub use compensate::compensate_overflow;
pub use config::LayoutConfig;
pub use flow::{TextFlow, WritingMode};
pub use position::solve_position;
pub use types::*;

use log::debug;

/// The block after the placement phase, ready to be measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedText {
    pub settings: LayoutSettings,
    pub flow: TextFlow,
    pub placement: Placement,
}

/// Complete layout of the text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub flow: TextFlow,
    pub placement: Placement,
    pub margins: Margins,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl LayoutResult {
    pub fn translate(&self) -> Translate {
        self.placement.translate
    }

    pub fn anchor(&self) -> Anchor {
        self.placement.anchor
    }

    pub fn padding(&self) -> Padding {
        self.placement.padding
    }
}

/// Source of the measured size of a placed block
pub trait Measure {
    fn measure(&self, placed: &PlacedText) -> Measurement;
}

/// A fixed measurement supplied by the caller
impl Measure for Measurement {
    fn measure(&self, _placed: &PlacedText) -> Measurement {
        *self
    }
}

impl<F> Measure for F
where
    F: Fn(&PlacedText) -> Measurement,
{
    fn measure(&self, placed: &PlacedText) -> Measurement {
        self(placed)
    }
}

/// Phase 1: place the block
pub fn place(settings: &LayoutSettings) -> PlacedText {
    let flow = TextFlow::new(settings.direction, settings.align_h, settings.rotation);
    let placement = solve_position(
        settings.direction,
        settings.align_h,
        settings.align_v,
        settings.line_indent,
    );
    debug!(
        "placed {} {}/{}: rotation {}°, translate ({}%, {}%), anchor {} {}%",
        settings.direction.as_str(),
        settings.align_v.as_str(),
        settings.align_h.as_str(),
        flow.rotation,
        placement.translate.x_percent,
        placement.translate.y_percent,
        placement.anchor.side.css_name(),
        placement.anchor.percent
    );

    PlacedText {
        settings: *settings,
        flow,
        placement,
    }
}

/// Phase 2: correct the placed block for its measured size
pub fn correct(placed: &PlacedText, measured: &Measurement) -> LayoutResult {
    let settings = &placed.settings;
    let margins = compensate_overflow(
        settings.direction,
        settings.align_h,
        settings.align_v,
        placed.flow.rotation,
        measured,
        settings.font_size,
    );

    LayoutResult {
        flow: placed.flow,
        placement: placed.placement,
        margins,
        skew_x: settings.skew_x,
        skew_y: settings.skew_y,
    }
}

/// Run both phases, measuring the placed block in between
pub fn compute(settings: &LayoutSettings, measure: &impl Measure) -> LayoutResult {
    let placed = place(settings);
    let measured = measure.measure(&placed);
    debug!(
        "measured {}x{} (content width {})",
        measured.width,
        measured.height,
        measured.content_width()
    );
    correct(&placed, &measured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_with_fixed_measurement() {
        let settings = LayoutSettings::new(
            Direction::HorizontalTopToBottom,
            HorizontalAlign::Left,
            VerticalAlign::Top,
        )
        .with_rotation(90.0);
        let result = compute(&settings, &Measurement::new(80.0, 20.0));

        assert_eq!(result.flow.rotation, 90.0);
        assert!((result.margins.top - 40.0).abs() < 1e-9);
        assert_eq!(result.margins.left, 0.0);
    }

    #[test]
    fn test_measure_sees_placement() {
        let settings = LayoutSettings::new(
            Direction::VerticalLeftToRight,
            HorizontalAlign::Right,
            VerticalAlign::Middle,
        );
        let measure = |placed: &PlacedText| {
            assert_eq!(placed.flow.rotation, 180.0);
            assert_eq!(placed.placement.translate, Translate::new(100.0, 50.0));
            Measurement::new(30.0, 120.0)
        };
        let result = compute(&settings, &measure);
        assert_eq!(result.translate(), Translate::new(100.0, 50.0));
    }

    #[test]
    fn test_skew_carried_through() {
        let settings = LayoutSettings::default().with_skew(10.0, 20.0);
        let result = compute(&settings, &Measurement::new(10.0, 10.0));
        assert_eq!((result.skew_x, result.skew_y), (10.0, 20.0));
        assert!(result.margins.is_zero());
    }
}
