//! CSS value helpers for the text block and its fragments

use crate::settings::{
    FragmentSettings, ShadowBlur, ShadowPosition, ANGLE_MAX, INDENT_MIN, SPACING_MAX, SPACING_MIN,
    TRANSPARENCY_MAX,
};

/// Line height used when none is set
pub const DEFAULT_LINE_HEIGHT: f64 = 1.6;
/// Corner radius of fragment backgrounds, in px
pub const BORDER_RADIUS: f64 = 5.0;
/// Perspective distances are measured back from this value
const PERSPECTIVE_BASE: f64 = 101.0;
const SHADOW_OFFSET: f64 = 2.0;

/// Format a CSS number: at most three decimals, no trailing zeros, no `-0`
pub fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded + 0.0)
}

pub fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// Convert a point size to pixels
pub fn point_to_pixel(pt: f64) -> String {
    px(pt * 4.0 / 3.0)
}

/// Letter or word spacing
pub fn spacing(value: f64) -> String {
    px(value.clamp(SPACING_MIN, SPACING_MAX))
}

pub fn line_height(value: f64) -> String {
    if value == 0.0 {
        css_number(DEFAULT_LINE_HEIGHT)
    } else {
        css_number(value)
    }
}

pub fn indent(value: f64) -> String {
    px(value.max(INDENT_MIN))
}

/// Two-digit alpha suffix for a hex color.
///
/// Fully opaque colors get no suffix.
pub fn opacity_hex(transparency: f64) -> String {
    let opacity = TRANSPARENCY_MAX - transparency.clamp(0.0, TRANSPARENCY_MAX);
    if opacity == TRANSPARENCY_MAX {
        return String::new();
    }
    let alpha = (opacity / TRANSPARENCY_MAX * 255.0).round() as u8;
    format!("{:02X}", alpha)
}

/// Color with the opacity suffix applied
pub fn color_with_opacity(color: &str, transparency: f64) -> String {
    format!("{}{}", color, opacity_hex(transparency))
}

fn shadow_offset(position: ShadowPosition) -> Option<(f64, f64)> {
    let (x, y) = match position {
        ShadowPosition::None => return None,
        ShadowPosition::TopLeft => (-1.0, -1.0),
        ShadowPosition::TopCenter => (0.0, -1.0),
        ShadowPosition::TopRight => (1.0, -1.0),
        ShadowPosition::MiddleLeft => (-1.0, 0.0),
        ShadowPosition::MiddleCenter => (0.0, 0.0),
        ShadowPosition::MiddleRight => (1.0, 0.0),
        ShadowPosition::BottomLeft => (-1.0, 1.0),
        ShadowPosition::BottomCenter => (0.0, 1.0),
        ShadowPosition::BottomRight => (1.0, 1.0),
    };
    Some((x * SHADOW_OFFSET, y * SHADOW_OFFSET))
}

fn blur_radius(blur: ShadowBlur) -> f64 {
    match blur {
        ShadowBlur::Low => 2.0,
        ShadowBlur::Medium => 8.0,
        ShadowBlur::High => 14.0,
    }
}

/// `text-shadow` value, `None` when the shadow is off
pub fn text_shadow(position: ShadowPosition, blur: ShadowBlur, color: &str) -> Option<String> {
    let (x, y) = shadow_offset(position)?;
    Some(format!(
        "{} {} {} {}",
        px(x),
        px(y),
        px(blur_radius(blur)),
        color
    ))
}

/// `text-decoration-line` value, `None` without decorations
pub fn text_decoration(settings: &FragmentSettings) -> Option<String> {
    let lines: Vec<&str> = [
        (settings.underline, "underline"),
        (settings.overline, "overline"),
        (settings.strike_through, "line-through"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    (!lines.is_empty()).then(|| lines.join(" "))
}

pub fn font_weight(bold: bool) -> &'static str {
    if bold {
        "bold"
    } else {
        "normal"
    }
}

pub fn skew(x: f64, y: f64) -> String {
    format!(
        "skewX({}deg) skewY({}deg)",
        css_number(x.min(ANGLE_MAX)),
        css_number(y.min(ANGLE_MAX))
    )
}

/// Perspective distance in px, `None` when perspective is off
pub fn perspective(value: f64) -> Option<f64> {
    (value > 0.0).then(|| PERSPECTIVE_BASE - value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(24.0), "24");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(13.333333), "13.333");
        assert_eq!(css_number(-1.5), "-1.5");
    }

    #[test]
    fn test_point_to_pixel() {
        assert_eq!(point_to_pixel(18.0), "24px");
        assert_eq!(point_to_pixel(12.0), "16px");
        assert_eq!(point_to_pixel(10.0), "13.333px");
    }

    #[test]
    fn test_spacing_and_indent_bounds() {
        assert_eq!(spacing(-10.0), "-3px");
        assert_eq!(spacing(99.0), "50px");
        assert_eq!(spacing(4.0), "4px");
        assert_eq!(indent(-7.0), "-3px");
        assert_eq!(indent(12.0), "12px");
    }

    #[test]
    fn test_line_height_default() {
        assert_eq!(line_height(0.0), "1.6");
        assert_eq!(line_height(2.5), "2.5");
    }

    #[test]
    fn test_opacity_hex() {
        assert_eq!(opacity_hex(0.0), "");
        assert_eq!(opacity_hex(100.0), "00");
        assert_eq!(opacity_hex(50.0), "80");
        assert_eq!(opacity_hex(96.0), "0A");
        assert_eq!(opacity_hex(10.0), "E6");
        assert_eq!(color_with_opacity("#123456", 50.0), "#12345680");
    }

    #[test]
    fn test_text_shadow() {
        assert_eq!(text_shadow(ShadowPosition::None, ShadowBlur::High, "#000"), None);
        assert_eq!(
            text_shadow(ShadowPosition::TopLeft, ShadowBlur::Low, "#000").as_deref(),
            Some("-2px -2px 2px #000")
        );
        assert_eq!(
            text_shadow(ShadowPosition::BottomCenter, ShadowBlur::Medium, "red").as_deref(),
            Some("0px 2px 8px red")
        );
        assert_eq!(
            text_shadow(ShadowPosition::MiddleRight, ShadowBlur::High, "#fff").as_deref(),
            Some("2px 0px 14px #fff")
        );
    }

    #[test]
    fn test_text_decoration() {
        let mut settings = FragmentSettings::static_default();
        assert_eq!(text_decoration(&settings), None);

        settings.underline = true;
        settings.strike_through = true;
        assert_eq!(
            text_decoration(&settings).as_deref(),
            Some("underline line-through")
        );
    }

    #[test]
    fn test_skew_and_perspective() {
        assert_eq!(skew(10.0, 0.0), "skewX(10deg) skewY(0deg)");
        assert_eq!(perspective(0.0), None);
        assert_eq!(perspective(1.0), Some(100.0));
        assert_eq!(perspective(60.0), Some(41.0));
        assert_eq!(font_weight(true), "bold");
        assert_eq!(font_weight(false), "normal");
    }
}
