//! Settings view: resolve a TOML settings document into validated records
//!
//! Every value is optional in the document. Missing values take their
//! defaults and numeric values are clamped into the ranges the layout engine
//! and the CSS helpers rely on. Non-finite numbers count as missing.
//!
//! ```toml
//! [text]
//! direction = "vertical-rl"
//! alignment = "center"
//! alignment_v = "middle"
//! text_rotate = 45
//!
//! [static_text]
//! post_text = "Sales"
//! bold = true
//!
//! [dynamic_text]
//! text_shadow = "bottomRight"
//! text_shadow_blur = "medium"
//! ```

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::DataView;
use crate::error::SettingsError;
use crate::layout::{Direction, HorizontalAlign, LayoutSettings, VerticalAlign};

const DEFAULT_FONT_SIZE: f64 = 18.0;
const DEFAULT_COLOR: &str = "#000000";
const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Bounds of letter and word spacing, in px
pub const SPACING_MIN: f64 = -3.0;
pub const SPACING_MAX: f64 = 50.0;
/// Upper bound of the line height multiplier
pub const LINE_HEIGHT_MAX: f64 = 50.0;
/// Lower bound of text and line indents, in px
pub const INDENT_MIN: f64 = -3.0;
/// Upper bound of rotation and skew angles
pub const ANGLE_MAX: f64 = 360.0;
pub const TRANSPARENCY_MAX: f64 = 100.0;

/// Where the static label sits relative to the dynamic value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Offset direction of a text shadow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowPosition {
    #[default]
    None,
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowBlur {
    #[default]
    Low,
    Medium,
    High,
}

/// Settings objects exposed for property export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsObject {
    Text,
    StaticText,
    DynamicText,
}

impl SettingsObject {
    pub const ALL: [SettingsObject; 3] = [
        SettingsObject::Text,
        SettingsObject::StaticText,
        SettingsObject::DynamicText,
    ];

    /// Table name in the settings document
    pub fn name(self) -> &'static str {
        match self {
            SettingsObject::Text => "text",
            SettingsObject::StaticText => "static_text",
            SettingsObject::DynamicText => "dynamic_text",
        }
    }
}

impl FromStr for SettingsObject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|object| object.name() == s)
            .ok_or_else(|| format!("unknown settings object '{}'", s))
    }
}

// Raw document shape, every field optional

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    text: RawText,
    static_text: RawStaticText,
    dynamic_text: RawFragment,
    data: DataView,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawText {
    color: Option<String>,
    transparency: Option<f64>,
    font_size: Option<f64>,
    alignment: Option<HorizontalAlign>,
    alignment_v: Option<VerticalAlign>,
    direction: Option<Direction>,
    letter_spacing: Option<f64>,
    line_height: Option<f64>,
    word_spacing: Option<f64>,
    perspective: Option<f64>,
    text_indent: Option<f64>,
    line_indent: Option<f64>,
    text_rotate: Option<f64>,
    skew_x: Option<f64>,
    skew_y: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFragment {
    background_color: Option<String>,
    transparency: Option<f64>,
    text_transform: Option<String>,
    text_shadow: Option<ShadowPosition>,
    text_shadow_blur: Option<ShadowBlur>,
    text_shadow_color: Option<String>,
    font_family: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    overline: Option<bool>,
    strike_through: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStaticText {
    show_colon: Option<bool>,
    text_position: Option<TextPosition>,
    post_text: Option<String>,
    #[serde(flatten)]
    style: RawFragment,
}

/// Drop non-finite numbers
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn clamped(value: Option<f64>, min: f64, max: f64) -> f64 {
    finite(value).map_or(0.0, |v| v.clamp(min, max))
}

fn at_least(value: Option<f64>, min: f64) -> f64 {
    finite(value).map_or(0.0, |v| v.max(min))
}

/// Block-wide text settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSettings {
    pub color: String,
    pub transparency: f64,
    pub font_size: f64,
    pub alignment: HorizontalAlign,
    pub alignment_v: VerticalAlign,
    pub direction: Direction,
    pub letter_spacing: f64,
    /// Line height multiplier; zero selects the default
    pub line_height: f64,
    pub word_spacing: f64,
    pub perspective: f64,
    pub text_indent: f64,
    pub line_indent: f64,
    pub text_rotate: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            transparency: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            alignment: HorizontalAlign::default(),
            alignment_v: VerticalAlign::default(),
            direction: Direction::default(),
            letter_spacing: 0.0,
            line_height: 0.0,
            word_spacing: 0.0,
            perspective: 0.0,
            text_indent: 0.0,
            line_indent: 0.0,
            text_rotate: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl TextSettings {
    fn resolve(raw: RawText) -> Self {
        let defaults = Self::default();
        let font_size = finite(raw.font_size)
            .filter(|size| *size > 0.0)
            .unwrap_or(defaults.font_size);

        Self {
            color: raw.color.unwrap_or(defaults.color),
            transparency: clamped(raw.transparency, 0.0, TRANSPARENCY_MAX),
            font_size,
            alignment: raw.alignment.unwrap_or(defaults.alignment),
            alignment_v: raw.alignment_v.unwrap_or(defaults.alignment_v),
            direction: raw.direction.unwrap_or(defaults.direction),
            letter_spacing: clamped(raw.letter_spacing, SPACING_MIN, SPACING_MAX),
            line_height: clamped(raw.line_height, 0.0, LINE_HEIGHT_MAX),
            word_spacing: clamped(raw.word_spacing, SPACING_MIN, SPACING_MAX),
            perspective: at_least(raw.perspective, 0.0),
            text_indent: at_least(raw.text_indent, INDENT_MIN),
            line_indent: at_least(raw.line_indent, INDENT_MIN),
            text_rotate: clamped(raw.text_rotate, 0.0, ANGLE_MAX),
            skew_x: clamped(raw.skew_x, 0.0, ANGLE_MAX),
            skew_y: clamped(raw.skew_y, 0.0, ANGLE_MAX),
        }
    }
}

/// Styling shared by the static label and the dynamic value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentSettings {
    pub background_color: String,
    pub transparency: f64,
    pub text_transform: String,
    pub text_shadow: ShadowPosition,
    pub text_shadow_blur: ShadowBlur,
    pub text_shadow_color: String,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub overline: bool,
    pub strike_through: bool,
}

impl FragmentSettings {
    fn with_background(background_color: &str) -> Self {
        Self {
            background_color: background_color.to_string(),
            transparency: 0.0,
            text_transform: String::new(),
            text_shadow: ShadowPosition::None,
            text_shadow_blur: ShadowBlur::Low,
            text_shadow_color: "#000".to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            bold: false,
            italic: false,
            underline: false,
            overline: false,
            strike_through: false,
        }
    }

    /// Defaults of the static label
    pub fn static_default() -> Self {
        Self::with_background("#fff")
    }

    /// Defaults of the dynamic value
    pub fn dynamic_default() -> Self {
        Self::with_background("#FFF")
    }

    fn resolve(raw: RawFragment, defaults: Self) -> Self {
        Self {
            background_color: raw.background_color.unwrap_or(defaults.background_color),
            transparency: clamped(raw.transparency, 0.0, TRANSPARENCY_MAX),
            text_transform: raw.text_transform.unwrap_or(defaults.text_transform),
            text_shadow: raw.text_shadow.unwrap_or(defaults.text_shadow),
            text_shadow_blur: raw.text_shadow_blur.unwrap_or(defaults.text_shadow_blur),
            text_shadow_color: raw.text_shadow_color.unwrap_or(defaults.text_shadow_color),
            font_family: raw.font_family.unwrap_or(defaults.font_family),
            bold: raw.bold.unwrap_or(defaults.bold),
            italic: raw.italic.unwrap_or(defaults.italic),
            underline: raw.underline.unwrap_or(defaults.underline),
            overline: raw.overline.unwrap_or(defaults.overline),
            strike_through: raw.strike_through.unwrap_or(defaults.strike_through),
        }
    }
}

/// Static label settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticTextSettings {
    pub show_colon: bool,
    pub text_position: TextPosition,
    /// Label text
    pub post_text: String,
    #[serde(flatten)]
    pub style: FragmentSettings,
}

impl Default for StaticTextSettings {
    fn default() -> Self {
        Self {
            show_colon: true,
            text_position: TextPosition::Prefix,
            post_text: String::new(),
            style: FragmentSettings::static_default(),
        }
    }
}

/// Validated settings of the text block
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub text: TextSettings,
    pub static_text: StaticTextSettings,
    pub dynamic_text: FragmentSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text: TextSettings::default(),
            static_text: StaticTextSettings::default(),
            dynamic_text: FragmentSettings::dynamic_default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        Document::from_file(path).map(|doc| doc.settings)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Document::from_str(content).map(|doc| doc.settings)
    }

    fn resolve(text: RawText, static_text: RawStaticText, dynamic_text: RawFragment) -> Self {
        let defaults = StaticTextSettings::default();
        let static_text = StaticTextSettings {
            show_colon: static_text.show_colon.unwrap_or(defaults.show_colon),
            text_position: static_text.text_position.unwrap_or(defaults.text_position),
            post_text: static_text.post_text.unwrap_or(defaults.post_text),
            style: FragmentSettings::resolve(static_text.style, defaults.style),
        };

        Self {
            text: TextSettings::resolve(text),
            static_text,
            dynamic_text: FragmentSettings::resolve(
                dynamic_text,
                FragmentSettings::dynamic_default(),
            ),
        }
    }

    /// The record consumed by the layout engine
    pub fn layout_settings(&self) -> LayoutSettings {
        let text = &self.text;
        LayoutSettings::new(text.direction, text.alignment, text.alignment_v)
            .with_rotation(text.text_rotate)
            .with_skew(text.skew_x, text.skew_y)
            .with_line_indent(text.line_indent)
            .with_font_size(text.font_size)
    }

    /// Export the resolved values of one settings object.
    ///
    /// Shadow blur and color are left out while the shadow is off.
    pub fn enumerate(&self, object: SettingsObject) -> Result<toml::Table, SettingsError> {
        let value = match object {
            SettingsObject::Text => toml::Value::try_from(&self.text)?,
            SettingsObject::StaticText => toml::Value::try_from(&self.static_text)?,
            SettingsObject::DynamicText => toml::Value::try_from(&self.dynamic_text)?,
        };
        let mut table = match value {
            toml::Value::Table(table) => table,
            _ => toml::Table::new(),
        };

        let shadow_off = match object {
            SettingsObject::Text => false,
            SettingsObject::StaticText => self.static_text.style.text_shadow == ShadowPosition::None,
            SettingsObject::DynamicText => self.dynamic_text.text_shadow == ShadowPosition::None,
        };
        if shadow_off {
            table.remove("text_shadow_blur");
            table.remove("text_shadow_color");
        }
        Ok(table)
    }

    /// [`enumerate`](Self::enumerate) rendered as a TOML document
    pub fn export(&self, object: SettingsObject) -> Result<String, SettingsError> {
        let table = self.enumerate(object)?;
        Ok(toml::to_string(&table)?)
    }
}

/// A settings document with its bound data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub settings: Settings,
    pub data: DataView,
}

impl Document {
    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let RawDocument {
            text,
            static_text,
            dynamic_text,
            data,
        } = toml::from_str(content)?;
        let settings = Settings::resolve(text, static_text, dynamic_text);
        debug!(
            "resolved settings: {} {}/{} rotate {}°",
            settings.text.direction.as_str(),
            settings.text.alignment_v.as_str(),
            settings.text.alignment.as_str(),
            settings.text.text_rotate
        );
        Ok(Self { settings, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.text.color, "#000000");
        assert_eq!(settings.text.font_size, 18.0);
        assert_eq!(settings.static_text.style.background_color, "#fff");
        assert_eq!(settings.dynamic_text.background_color, "#FFF");
        assert_eq!(settings.static_text.style.font_family, "Segoe UI");
        assert!(settings.static_text.show_colon);
    }

    #[test]
    fn test_values_are_clamped() {
        let settings = Settings::from_str(
            r#"
            [text]
            transparency = 140
            letter_spacing = -10
            word_spacing = 80
            line_height = 75
            perspective = -4
            text_indent = -9
            line_indent = -8
            text_rotate = 400
            skew_x = -5
            skew_y = 361

            [dynamic_text]
            transparency = -20
            "#,
        )
        .unwrap();
        let text = &settings.text;
        assert_eq!(text.transparency, 100.0);
        assert_eq!(text.letter_spacing, -3.0);
        assert_eq!(text.word_spacing, 50.0);
        assert_eq!(text.line_height, 50.0);
        assert_eq!(text.perspective, 0.0);
        assert_eq!(text.text_indent, -3.0);
        assert_eq!(text.line_indent, -3.0);
        assert_eq!(text.text_rotate, 360.0);
        assert_eq!(text.skew_x, 0.0);
        assert_eq!(text.skew_y, 360.0);
        assert_eq!(settings.dynamic_text.transparency, 0.0);
    }

    #[test]
    fn test_line_indent_keeps_sign() {
        let settings = Settings::from_str("[text]\nline_indent = -2").unwrap();
        assert_eq!(settings.text.line_indent, -2.0);
        assert_eq!(settings.layout_settings().line_indent, -2.0);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let settings = Settings::from_str("[text]\nfont_size = nan\ntext_rotate = inf").unwrap();
        assert_eq!(settings.text.font_size, 18.0);
        assert_eq!(settings.text.text_rotate, 0.0);
    }

    #[test]
    fn test_enum_values_parse() {
        let settings = Settings::from_str(
            r#"
            [text]
            direction = "vertical-lr"
            alignment = "right"
            alignment_v = "bottom"

            [static_text]
            text_position = "suffix"
            text_shadow = "bottomRight"
            text_shadow_blur = "high"
            italic = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.text.direction, Direction::VerticalLeftToRight);
        assert_eq!(settings.text.alignment, HorizontalAlign::Right);
        assert_eq!(settings.text.alignment_v, VerticalAlign::Bottom);
        assert_eq!(settings.static_text.text_position, TextPosition::Suffix);
        assert_eq!(settings.static_text.style.text_shadow, ShadowPosition::BottomRight);
        assert_eq!(settings.static_text.style.text_shadow_blur, ShadowBlur::High);
        assert!(settings.static_text.style.italic);
    }

    #[test]
    fn test_unknown_direction_is_an_error_with_span() {
        let err = Settings::from_str("[text]\ndirection = \"diagonal\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Toml { .. }));
        assert!(err.span().is_some());
    }

    #[test]
    fn test_layout_settings() {
        let settings = Settings::from_str(
            r#"
            [text]
            direction = "vertical-rl"
            alignment = "center"
            alignment_v = "middle"
            text_rotate = 45
            skew_x = 10
            font_size = 12
            "#,
        )
        .unwrap();
        let layout = settings.layout_settings();
        assert_eq!(
            layout,
            LayoutSettings::new(
                Direction::VerticalRightToLeft,
                HorizontalAlign::Center,
                VerticalAlign::Middle
            )
            .with_rotation(45.0)
            .with_skew(10.0, 0.0)
            .with_font_size(12.0)
        );
    }

    #[test]
    fn test_enumerate_hides_shadow_details_when_off() {
        let settings = Settings::default();
        let table = settings.enumerate(SettingsObject::DynamicText).unwrap();
        assert!(table.contains_key("text_shadow"));
        assert!(!table.contains_key("text_shadow_blur"));
        assert!(!table.contains_key("text_shadow_color"));

        let settings = Settings::from_str("[static_text]\ntext_shadow = \"topLeft\"").unwrap();
        let table = settings.enumerate(SettingsObject::StaticText).unwrap();
        assert_eq!(table["text_shadow_blur"].as_str(), Some("low"));
        assert_eq!(table["text_shadow_color"].as_str(), Some("#000"));
        assert_eq!(table["show_colon"].as_bool(), Some(true));
    }

    #[test]
    fn test_enumerate_text() {
        let table = Settings::default().enumerate(SettingsObject::Text).unwrap();
        assert_eq!(table["direction"].as_str(), Some("horizontal-tb"));
        assert_eq!(table["alignment"].as_str(), Some("left"));
        assert_eq!(table["font_size"].as_float(), Some(18.0));
    }

    #[test]
    fn test_export_document() {
        let settings = Settings::from_str("[dynamic_text]\nbold = true").unwrap();
        let exported = settings.export(SettingsObject::DynamicText).unwrap();
        assert!(exported.contains("bold = true"));
        assert!(!exported.contains("text_shadow_blur"));

        let failure: toml::ser::Error = serde::ser::Error::custom("unsupported value");
        let err = SettingsError::from(failure);
        assert!(matches!(err, SettingsError::Export(_)));
    }

    #[test]
    fn test_settings_object_names() {
        for object in SettingsObject::ALL {
            assert_eq!(object.name().parse::<SettingsObject>(), Ok(object));
        }
        assert!("labels".parse::<SettingsObject>().is_err());
    }

    #[test]
    fn test_document_carries_data() {
        let doc = Document::from_str(
            r#"
            [static_text]
            post_text = "Total"

            [[data.values]]
            name = "Sales"
            values = [10]
            "#,
        )
        .unwrap();
        assert_eq!(doc.settings.static_text.post_text, "Total");
        assert_eq!(doc.data.dynamic_value(), Ok("10".to_string()));
    }
}
