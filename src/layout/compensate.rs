//! Overflow compensation for rotated text blocks.
//!
//! Rotating the block around its anchor sweeps its corners out of its unrotated
//! bounding box and moves its visual center away from where the block first
//! sat. The compensator estimates that drift with trigonometry and emits an
//! equal and opposite `margin-top` / `margin-left`.
//!
//! ## Angle reduction
//!
//! Only the magnitude of the rotation matters here. It is reduced to
//! `ρ = |r| mod 360`. The mirrored directions (bottom-to-top, left-to-right)
//! are half turns of their primary direction, so they take 180° off first and
//! then use the primary direction's formulas. Horizontal text folds the angle
//! into `ρ mod 180` for its tilt term, since a half-turned line occupies the
//! same vertical extent.
//!
//! ## Formula table
//!
//! | text       | alignment_v | alignment | correction                         |
//! |------------|-------------|-----------|------------------------------------|
//! | horizontal | top         | any       | tilt, `+margin-top`                |
//! | horizontal | middle      | any       | none                               |
//! | horizontal | bottom      | any       | tilt, `-margin-top`, buffered      |
//! | vertical   | top         | left      | tilt, `+margin-left`               |
//! | vertical   | top         | center    | none                               |
//! | vertical   | top         | right     | tilt, `-margin-left`, buffered     |
//! | vertical   | middle      | left/right| drift + one-sided sweep, buffered  |
//! | vertical   | middle      | center    | drift + symmetric sweep            |
//! | vertical   | bottom      | left/right| asymmetric sweep                   |
//! | vertical   | bottom      | center    | doubled drift + symmetric sweep    |
//!
//! Horizontal center alignment measures the fragments (`content_width`)
//! instead of the container.

use log::{debug, trace, warn};

use super::flow::HALF_TURN;
use super::types::{Direction, HorizontalAlign, Margins, Measurement, VerticalAlign};

const QUARTER_TURN: f64 = 90.0;
const THREE_QUARTER_TURN: f64 = 270.0;
const FULL_TURN: f64 = 360.0;

/// Fraction of a dimension added per degree of sweep (2 per 100°)
const BUFFER_RATE: f64 = 2.0 / 100.0;

/// A rotation angle as seen by the compensator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Final rotation in degrees, sign preserved
    pub degrees: f64,
}

impl Rotation {
    pub fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Effective magnitude `|r| mod 360`
    pub fn reduced(&self) -> f64 {
        self.degrees.abs() % FULL_TURN
    }

    /// Magnitude after taking off a half turn, in `[0, 360)`
    pub fn unmirrored(&self) -> f64 {
        (self.degrees.abs() - HALF_TURN).rem_euclid(FULL_TURN)
    }

    /// Effective magnitude for the given writing direction
    pub fn effective(&self, direction: Direction) -> f64 {
        if direction.is_mirrored() {
            self.unmirrored()
        } else {
            self.reduced()
        }
    }
}

fn sin_degrees(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Distance the block's center drifts along the cross axis, for a reduced angle.
///
/// Past a quarter turn the block has flipped beyond vertical and the drift
/// grows instead of shrinking.
pub fn cross_drift(rho: f64, extent: f64) -> f64 {
    if rho > 0.0 && rho <= QUARTER_TURN {
        (extent - extent * sin_degrees(QUARTER_TURN - rho)) / 2.0
    } else if rho > QUARTER_TURN && rho <= THREE_QUARTER_TURN {
        (extent + extent * sin_degrees(rho - QUARTER_TURN)) / 2.0
    } else if rho > THREE_QUARTER_TURN && rho < FULL_TURN {
        (extent - extent * sin_degrees(rho % THREE_QUARTER_TURN)) / 2.0
    } else {
        0.0
    }
}

/// Extra sweep of the trailing corner, growing up to the half turn and
/// shrinking back after it.
pub fn buffer(rho: f64, dimension: f64) -> f64 {
    if rho < HALF_TURN {
        rho * BUFFER_RATE * dimension
    } else {
        (FULL_TURN - rho) * BUFFER_RATE * dimension
    }
}

/// Margin receiving a tilt correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarginAxis {
    Top,
    Left,
}

/// One cell of the formula table
#[derive(Debug, Clone, Copy, PartialEq)]
enum Formula {
    /// Deliberately uncorrected
    None,
    /// Half the span times `sin(ρ mod 180)` on one margin.
    /// Horizontal text spans its width, vertical text its height.
    Tilt {
        axis: MarginAxis,
        sign: f64,
        /// Add the font-size buffer before applying the sign
        buffered: bool,
    },
    /// Middle row, leading or trailing edge: pulled back by the cross drift,
    /// swept sideways only while `ρ` lies strictly inside `sweep`, less a
    /// buffer scaled by the box width
    MiddleEdge { sweep: (f64, f64) },
    /// Bottom row, leading or trailing edge: sideways sweep whose coefficient
    /// changes at the half turn
    BottomEdge {
        before_half_turn: f64,
        after_half_turn: f64,
        buffered: bool,
    },
    /// Centered column: cross drift scaled by `drift_factor`, symmetric
    /// sideways sweep of `sweep_factor` times the height
    Centered { drift_factor: f64, sweep_factor: f64 },
}

fn formula(vertical: bool, align_v: VerticalAlign, align_h: HorizontalAlign) -> Formula {
    use HorizontalAlign::{Center, Left, Right};
    use VerticalAlign::{Bottom, Middle, Top};

    match (vertical, align_v, align_h) {
        (false, Top, _) => Formula::Tilt {
            axis: MarginAxis::Top,
            sign: 1.0,
            buffered: false,
        },
        (false, Middle, _) => Formula::None,
        (false, Bottom, _) => Formula::Tilt {
            axis: MarginAxis::Top,
            sign: -1.0,
            buffered: true,
        },
        (true, Top, Left) => Formula::Tilt {
            axis: MarginAxis::Left,
            sign: 1.0,
            buffered: false,
        },
        (true, Top, Center) => Formula::None,
        (true, Top, Right) => Formula::Tilt {
            axis: MarginAxis::Left,
            sign: -1.0,
            buffered: true,
        },
        (true, Middle, Left) => Formula::MiddleEdge {
            sweep: (HALF_TURN, FULL_TURN),
        },
        (true, Middle, Right) => Formula::MiddleEdge {
            sweep: (0.0, HALF_TURN),
        },
        (true, Middle, Center) => Formula::Centered {
            drift_factor: 1.0,
            sweep_factor: 0.5,
        },
        (true, Bottom, Left) => Formula::BottomEdge {
            before_half_turn: -0.5,
            after_half_turn: 1.5,
            buffered: false,
        },
        (true, Bottom, Right) => Formula::BottomEdge {
            before_half_turn: -1.5,
            after_half_turn: 0.5,
            buffered: true,
        },
        // The anchor sits on the trailing edge here, hence the doubled drift
        (true, Bottom, Center) => Formula::Centered {
            drift_factor: 2.0,
            sweep_factor: 1.0,
        },
    }
}

impl Formula {
    fn apply(self, rho: f64, span: f64, height: f64, width: f64, font_size: f64) -> Margins {
        match self {
            Formula::None => Margins::zero(),
            Formula::Tilt {
                axis,
                sign,
                buffered,
            } => {
                let extra = if buffered { buffer(rho, font_size) } else { 0.0 };
                let value = sign * ((span / 2.0) * sin_degrees(rho % HALF_TURN) + extra);
                match axis {
                    MarginAxis::Top => Margins::new(value, 0.0),
                    MarginAxis::Left => Margins::new(0.0, value),
                }
            }
            Formula::MiddleEdge { sweep: (lo, hi) } => {
                let swept = if rho > lo && rho < hi {
                    -height * sin_degrees(rho)
                } else {
                    0.0
                };
                Margins::new(-cross_drift(rho, height), swept - buffer(rho, width))
            }
            Formula::BottomEdge {
                before_half_turn,
                after_half_turn,
                buffered,
            } => {
                let tilt = sin_degrees(rho % HALF_TURN);
                let swept = if rho <= HALF_TURN {
                    before_half_turn * height * tilt
                } else {
                    after_half_turn * height * tilt
                };
                let extra = if buffered { buffer(rho, font_size) } else { 0.0 };
                Margins::new(0.0, swept - extra)
            }
            Formula::Centered {
                drift_factor,
                sweep_factor,
            } => {
                let swept = sweep_factor * height * sin_degrees(rho).abs();
                let left = if rho < HALF_TURN { -swept } else { swept };
                Margins::new(-drift_factor * cross_drift(rho, height), left)
            }
        }
    }
}

/// Compute the corrective margins for a rotated text block.
///
/// `rotation` is the final rotation (see [`TextFlow`](super::flow::TextFlow)).
/// A zero effective rotation or a degenerate measurement yields zero margins.
pub fn compensate_overflow(
    direction: Direction,
    align_h: HorizontalAlign,
    align_v: VerticalAlign,
    rotation: f64,
    measured: &Measurement,
    font_size: f64,
) -> Margins {
    let rotation = Rotation::new(rotation);
    // Mirrored directions at 0° are a half turn of their primary direction
    let rho = rotation.effective(direction);
    if rho.abs() < f64::EPSILON {
        return Margins::zero();
    }
    if measured.is_degenerate() {
        warn!("measured text box has no usable extent; skipping overflow compensation");
        return Margins::zero();
    }

    let vertical = direction.is_vertical();
    let span = if vertical {
        measured.height
    } else if align_h == HorizontalAlign::Center {
        measured.content_width()
    } else {
        measured.width
    };

    let cell = formula(vertical, align_v, align_h);
    trace!(
        "compensating {} {}/{} at {}° (effective {}°) with {:?}",
        direction.as_str(),
        align_v.as_str(),
        align_h.as_str(),
        rotation.degrees,
        rho,
        cell
    );

    let margins = cell.apply(rho, span, measured.height, measured.width, font_size);
    debug!("overflow margins: top={} left={}", margins.top, margins.left);
    margins
}
