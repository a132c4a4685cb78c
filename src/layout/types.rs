//! Core types for the layout engine

use serde::{Deserialize, Serialize};

/// Writing direction of the text block.
///
/// Each horizontal and vertical pair is related by a half turn: bottom-to-top
/// is top-to-bottom rotated 180°, left-to-right is right-to-left rotated 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "horizontal-tb")]
    HorizontalTopToBottom,
    #[serde(rename = "horizontal-bt")]
    HorizontalBottomToTop,
    #[serde(rename = "vertical-rl")]
    VerticalRightToLeft,
    #[serde(rename = "vertical-lr")]
    VerticalLeftToRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::HorizontalTopToBottom,
        Direction::HorizontalBottomToTop,
        Direction::VerticalRightToLeft,
        Direction::VerticalLeftToRight,
    ];

    /// True for the two vertical writing modes
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            Direction::VerticalRightToLeft | Direction::VerticalLeftToRight
        )
    }

    /// True for the directions expressed as a half turn of another one
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Direction::HorizontalBottomToTop | Direction::VerticalLeftToRight
        )
    }

    /// Settings-file spelling of the direction
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::HorizontalTopToBottom => "horizontal-tb",
            Direction::HorizontalBottomToTop => "horizontal-bt",
            Direction::VerticalRightToLeft => "vertical-rl",
            Direction::VerticalLeftToRight => "vertical-lr",
        }
    }
}

/// Alignment along the writing axis ("alignment" in the settings file).
///
/// For vertical directions this positions the block horizontally across the
/// columns, so the axis it controls flips with the writing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub const ALL: [HorizontalAlign; 3] = [
        HorizontalAlign::Left,
        HorizontalAlign::Center,
        HorizontalAlign::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }

    /// Left and right swapped, center kept
    pub fn mirrored(self) -> HorizontalAlign {
        match self {
            HorizontalAlign::Left => HorizontalAlign::Right,
            HorizontalAlign::Center => HorizontalAlign::Center,
            HorizontalAlign::Right => HorizontalAlign::Left,
        }
    }
}

/// Alignment across the writing axis ("alignment_v" in the settings file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub const ALL: [VerticalAlign; 3] = [
        VerticalAlign::Top,
        VerticalAlign::Middle,
        VerticalAlign::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// A side of the text container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// CSS offset property for this side
    pub fn css_name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// CSS padding property for this side
    pub fn padding_property(self) -> &'static str {
        match self {
            Side::Top => "padding-top",
            Side::Bottom => "padding-bottom",
            Side::Left => "padding-left",
            Side::Right => "padding-right",
        }
    }
}

/// Fixed reference point of the container, as a side plus a percentage offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub side: Side,
    pub percent: f64,
}

impl Anchor {
    pub fn new(side: Side, percent: f64) -> Self {
        Self { side, percent }
    }
}

/// Pre-rotation translation, in percent of the container's own size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translate {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl Translate {
    pub fn new(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }
}

/// Padding applied on exactly one side; the value is never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub side: Side,
    pub value: f64,
}

/// How the container's width reacts to the writing-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineFit {
    /// Shrink-wrapped to the text
    #[default]
    FitContent,
    /// Width released so the block spans the host
    Stretch,
    /// Shrink-wrapped and floated to the right edge
    FloatRight,
}

/// Output of the position solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translate: Translate,
    /// Primary anchor
    pub anchor: Anchor,
    /// Additional writing-axis anchor used by vertical text below the top row
    pub inline_anchor: Option<Anchor>,
    pub padding: Padding,
    pub fit: InlineFit,
}

/// Size of the placed text block, measured after the first geometry phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub width: f64,
    pub height: f64,
    /// Summed width of the text fragments, when it differs from the box width
    pub content_width: Option<f64>,
}

impl Measurement {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content_width: None,
        }
    }

    pub fn with_content_width(mut self, content_width: f64) -> Self {
        self.content_width = Some(content_width);
        self
    }

    /// Width of the fragments themselves, falling back to the box width
    pub fn content_width(&self) -> f64 {
        self.content_width.unwrap_or(self.width)
    }

    /// A box with no usable extent, e.g. when measuring failed
    pub fn is_degenerate(&self) -> bool {
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        if !(usable(self.width) && usable(self.height) && usable(self.content_width())) {
            return true;
        }
        self.width == 0.0 && self.height == 0.0
    }
}

/// Corrective margins, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
}

impl Margins {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.left == 0.0
    }
}

/// Validated settings record consumed by the layout engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub direction: Direction,
    pub align_h: HorizontalAlign,
    pub align_v: VerticalAlign,
    /// User rotation in degrees, before the writing-mode base is added
    pub rotation: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    /// Signed: the sign picks the padding side, the magnitude is the padding
    pub line_indent: f64,
    pub font_size: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            align_h: HorizontalAlign::default(),
            align_v: VerticalAlign::default(),
            rotation: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            line_indent: 0.0,
            font_size: 18.0,
        }
    }
}

impl LayoutSettings {
    pub fn new(direction: Direction, align_h: HorizontalAlign, align_v: VerticalAlign) -> Self {
        Self {
            direction,
            align_h,
            align_v,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_skew(mut self, x: f64, y: f64) -> Self {
        self.skew_x = x;
        self.skew_y = y;
        self
    }

    pub fn with_line_indent(mut self, indent: f64) -> Self {
        self.line_indent = indent;
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}
