//! Position solver: anchor, translation and padding side of the text block
//!
//! The cross-axis alignment picks how far down the host the block is anchored
//! (0%, 50% or 100% from the top) and how far the block is pulled back over
//! that anchor. Vertical directions additionally anchor along the writing axis
//! from the horizontal alignment. Right-to-left and left-to-right columns are
//! mirror images: the same alignment translates by the same magnitude with the
//! opposite sign. The mirrored horizontal direction flips the sign the same way.

use super::types::{
    Anchor, Direction, HorizontalAlign, InlineFit, Padding, Placement, Side, Translate,
    VerticalAlign,
};

/// Per-direction constants of the solver table
struct AxisRule {
    /// Sign applied to every translation
    sign: f64,
    /// Padding side for a non-negative line indent, then for a negative one
    padding: (Side, Side),
}

const fn axis_rule(direction: Direction) -> AxisRule {
    match direction {
        Direction::HorizontalTopToBottom => AxisRule {
            sign: -1.0,
            padding: (Side::Top, Side::Bottom),
        },
        Direction::HorizontalBottomToTop => AxisRule {
            sign: 1.0,
            padding: (Side::Bottom, Side::Top),
        },
        Direction::VerticalRightToLeft => AxisRule {
            sign: -1.0,
            padding: (Side::Right, Side::Left),
        },
        Direction::VerticalLeftToRight => AxisRule {
            sign: 1.0,
            padding: (Side::Left, Side::Right),
        },
    }
}

/// Offset of the cross-axis anchor, in percent from the top
fn cross_offset(align_v: VerticalAlign) -> f64 {
    match align_v {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => 50.0,
        VerticalAlign::Bottom => 100.0,
    }
}

/// Offset of the writing-axis anchor, in percent from the left
fn inline_offset(align_h: HorizontalAlign) -> f64 {
    match align_h {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center => 50.0,
        HorizontalAlign::Right => 100.0,
    }
}

fn signed(sign: f64, magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        0.0
    } else {
        sign * magnitude
    }
}

/// Pick the padding side from the sign of the line indent
pub fn solve_padding(direction: Direction, line_indent: f64) -> Padding {
    let (positive, negative) = axis_rule(direction).padding;
    if line_indent >= 0.0 {
        Padding {
            side: positive,
            value: line_indent,
        }
    } else {
        Padding {
            side: negative,
            value: -line_indent,
        }
    }
}

/// Solve the anchor, translation and padding of the text block.
///
/// Pure and total over every combination of inputs.
pub fn solve_position(
    direction: Direction,
    align_h: HorizontalAlign,
    align_v: VerticalAlign,
    line_indent: f64,
) -> Placement {
    let rule = axis_rule(direction);
    let cross = cross_offset(align_v);
    let padding = solve_padding(direction, line_indent);

    if !direction.is_vertical() {
        let fit = match align_h {
            HorizontalAlign::Left => InlineFit::FitContent,
            HorizontalAlign::Center => InlineFit::Stretch,
            HorizontalAlign::Right => InlineFit::FloatRight,
        };
        return Placement {
            translate: Translate::new(0.0, signed(rule.sign, cross)),
            anchor: Anchor::new(Side::Top, cross),
            inline_anchor: None,
            padding,
            fit,
        };
    }

    let inline = inline_offset(align_h);
    let along = (align_h != HorizontalAlign::Left).then(|| Anchor::new(Side::Left, inline));
    let (anchor, inline_anchor) = match (align_v, along) {
        // Top row: the writing-axis anchor replaces the (zero) cross anchor
        (VerticalAlign::Top, Some(along)) => (along, None),
        (_, along) => (Anchor::new(Side::Top, cross), along),
    };

    Placement {
        translate: Translate::new(signed(rule.sign, inline), signed(rule.sign, cross)),
        anchor,
        inline_anchor,
        padding,
        fit: InlineFit::FitContent,
    }
}
