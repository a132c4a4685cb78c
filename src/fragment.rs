//! Text fragments: the static label, the separator and the dynamic value

use crate::settings::{FragmentSettings, Settings, TextPosition};
use crate::style;

const COLON_SEPARATOR: &str = " : ";
const SPACE_SEPARATOR: &str = " ";
/// Extra room before the colon after an italic fragment, in px
const ITALIC_COLON_GAP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Static,
    Separator,
    Dynamic,
}

impl FragmentKind {
    /// Class name suffix of the fragment
    pub fn class_name(self) -> &'static str {
        match self {
            FragmentKind::Static => "static",
            FragmentKind::Separator => "separator",
            FragmentKind::Dynamic => "dynamic",
        }
    }
}

/// Resolved CSS of a styled fragment
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStyle {
    pub font_size: f64,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub text_decoration: Option<String>,
    pub text_transform: Option<String>,
    pub background: String,
    pub text_shadow: Option<String>,
}

impl FragmentStyle {
    pub fn new(settings: &FragmentSettings, font_size: f64) -> Self {
        Self {
            font_size,
            font_family: settings.font_family.clone(),
            bold: settings.bold,
            italic: settings.italic,
            text_decoration: style::text_decoration(settings),
            text_transform: Some(settings.text_transform.clone()).filter(|t| !t.is_empty()),
            background: style::color_with_opacity(
                &settings.background_color,
                settings.transparency,
            ),
            text_shadow: style::text_shadow(
                settings.text_shadow,
                settings.text_shadow_blur,
                &settings.text_shadow_color,
            ),
        }
    }

    /// CSS declarations in output order
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("font-size", style::point_to_pixel(self.font_size)),
            ("font-family", self.font_family.clone()),
            ("font-weight", style::font_weight(self.bold).to_string()),
        ];
        if let Some(decoration) = &self.text_decoration {
            decls.push(("text-decoration-line", decoration.clone()));
        }
        if let Some(transform) = &self.text_transform {
            decls.push(("text-transform", transform.clone()));
        }
        decls.push(("background-color", self.background.clone()));
        if let Some(shadow) = &self.text_shadow {
            decls.push(("text-shadow", shadow.clone()));
        }
        decls.push(("border-radius", style::px(style::BORDER_RADIUS)));
        decls
    }
}

/// One run of text inside the block
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
    /// Separators carry no style of their own
    pub style: Option<FragmentStyle>,
    pub padding_left: Option<f64>,
    /// Click target of the dynamic value
    pub link: Option<String>,
}

impl Fragment {
    fn styled(kind: FragmentKind, text: &str, settings: &FragmentSettings, font_size: f64) -> Self {
        Self {
            kind,
            text: text.to_string(),
            style: Some(FragmentStyle::new(settings, font_size)),
            padding_left: None,
            link: None,
        }
    }

    fn separator(text: &str) -> Self {
        Self {
            kind: FragmentKind::Separator,
            text: text.to_string(),
            style: None,
            padding_left: None,
            link: None,
        }
    }

    pub fn is_italic(&self) -> bool {
        self.style.as_ref().is_some_and(|s| s.italic)
    }
}

/// Order the label and the value into fragments.
///
/// An empty label leaves the value on its own. Otherwise the label leads for
/// `prefix` and trails for `suffix`, joined by a colon or a single space.
pub fn arrange(settings: &Settings, value: &str, link: Option<String>) -> Vec<Fragment> {
    let font_size = settings.text.font_size;
    let static_text = &settings.static_text;

    let mut dynamic = Fragment::styled(
        FragmentKind::Dynamic,
        value,
        &settings.dynamic_text,
        font_size,
    );
    dynamic.link = link;

    if static_text.post_text.is_empty() {
        return vec![dynamic];
    }

    let label = Fragment::styled(
        FragmentKind::Static,
        &static_text.post_text,
        &static_text.style,
        font_size,
    );
    let (leading, trailing) = match static_text.text_position {
        TextPosition::Prefix => (label, dynamic),
        TextPosition::Suffix => (dynamic, label),
    };

    let separator = if static_text.show_colon {
        let mut colon = Fragment::separator(COLON_SEPARATOR);
        if leading.is_italic() {
            colon.padding_left = Some(ITALIC_COLON_GAP);
        }
        colon
    } else {
        Fragment::separator(SPACE_SEPARATOR)
    };

    vec![leading, separator, trailing]
}
