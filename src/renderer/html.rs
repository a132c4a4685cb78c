//! HTML generation from layout results

use crate::data::DataError;
use crate::fragment::Fragment;
use crate::layout::{InlineFit, LayoutConfig, LayoutResult, WritingMode};
use crate::settings::TextSettings;
use crate::style::{self, css_number, px};

use super::HtmlConfig;

/// Font of the data error message
const ERROR_FONT: &str = "Segoe UI Semibold";
const ERROR_COLOR: &str = "#777";

/// CSS declarations of one element
type Declarations = Vec<(&'static str, String)>;

/// Build HTML elements incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    elements: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 0,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_list(&self, classes: &[&str]) -> String {
        let prefix = self.prefix();
        classes
            .iter()
            .map(|class| format!("{}{}", prefix, class))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Open a div element
    pub fn start_div(&mut self, classes: &[&str], styles: &Declarations, title: Option<&str>) {
        let title_attr = title
            .map(|t| format!(r#" title="{}""#, escape_html(t)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<div class="{}"{}{}>"#,
            self.indent_str(),
            self.class_list(classes),
            title_attr,
            style_attr(styles)
        ));
        self.indent += 1;
    }

    /// Close a div element
    pub fn end_div(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</div>", self.indent_str()));
    }

    /// Add a text line without markup
    pub fn add_text(&mut self, text: &str) {
        self.elements
            .push(format!("{}{}", self.indent_str(), escape_html(text)));
    }

    /// Add a text fragment
    pub fn add_fragment(&mut self, fragment: &Fragment) {
        let mut classes = vec![fragment.kind.class_name()];
        if fragment.is_italic() {
            classes.push("italic");
        }
        if fragment.link.is_some() {
            classes.push("url");
        }

        let mut styles = fragment
            .style
            .as_ref()
            .map(|s| s.declarations())
            .unwrap_or_default();
        if let Some(padding) = fragment.padding_left {
            styles.push(("padding-left", px(padding)));
        }

        let (tag, href) = match &fragment.link {
            Some(url) => ("a", format!(r#" href="{}""#, escape_html(url))),
            None => ("span", String::new()),
        };
        self.elements.push(format!(
            r#"{}<{tag} class="{}"{}{}>{}</{tag}>"#,
            self.indent_str(),
            self.class_list(&classes),
            href,
            style_attr(&styles),
            escape_html(&fragment.text),
        ));
    }

    /// Build the final HTML string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut html = String::new();
        for elem in &self.elements {
            html.push_str(elem);
            html.push_str(nl);
        }
        html
    }
}

/// Styles of the outer container: typography, transform and placement
fn container_styles(
    result: &LayoutResult,
    text: &TextSettings,
    layout: &LayoutConfig,
) -> Declarations {
    let translate = result.translate();
    let mut decls = typography(text);
    decls.push((
        "color",
        style::color_with_opacity(&text.color, text.transparency),
    ));
    decls.push((
        "transform",
        format!(
            "{} rotate({}deg) translate({}%, {}%)",
            style::skew(result.skew_x, result.skew_y),
            css_number(result.flow.rotation),
            css_number(translate.x_percent),
            css_number(translate.y_percent)
        ),
    ));

    match result.placement.fit {
        InlineFit::FitContent => decls.push(("width", "fit-content".to_string())),
        InlineFit::Stretch => {}
        InlineFit::FloatRight => {
            decls.push(("width", "fit-content".to_string()));
            decls.push(("float", "right".to_string()));
        }
    }
    decls.push(("text-align", result.flow.text_align.as_str().to_string()));
    decls.push(("writing-mode", result.flow.writing_mode.css_value().to_string()));

    decls.push(("position", "relative".to_string()));
    let anchor = result.anchor();
    decls.push((anchor.side.css_name(), format!("{}%", css_number(anchor.percent))));
    if let Some(inline) = result.placement.inline_anchor {
        decls.push((inline.side.css_name(), format!("{}%", css_number(inline.percent))));
    }
    let padding = result.padding();
    decls.push((padding.side.padding_property(), style::indent(padding.value)));

    if !result.margins.is_zero() {
        decls.push(("margin-top", px(result.margins.top)));
        decls.push(("margin-left", px(result.margins.left)));
    }

    let (host_width, host_height) = layout.host_size;
    match result.flow.writing_mode {
        WritingMode::TbRl => decls.push(("max-height", px(host_height))),
        WritingMode::HorizontalTb => decls.push(("max-width", px(host_width))),
    }

    match style::perspective(text.perspective) {
        Some(distance) => {
            decls.push(("perspective", px(distance)));
            decls.push(("perspective-origin", "center".to_string()));
        }
        None => decls.push(("perspective", "none".to_string())),
    }
    decls
}

/// Font size, spacing and indent shared by the text and the error block
fn typography(text: &TextSettings) -> Declarations {
    vec![
        ("font-size", style::point_to_pixel(text.font_size)),
        ("letter-spacing", style::spacing(text.letter_spacing)),
        ("word-spacing", style::spacing(text.word_spacing)),
        ("line-height", style::line_height(text.line_height)),
        ("text-indent", style::indent(text.text_indent)),
    ]
}

/// Tilt of the inner block when perspective is on
fn perspective_styles(
    result: &LayoutResult,
    text: &TextSettings,
    layout: &LayoutConfig,
) -> Declarations {
    if style::perspective(text.perspective).is_none() {
        return vec![];
    }
    let axis = match result.flow.writing_mode {
        WritingMode::TbRl => "rotateY",
        WritingMode::HorizontalTb => "rotateX",
    };
    vec![(
        "transform",
        format!("{}({}deg)", axis, css_number(layout.perspective_tilt)),
    )]
}

/// Render a laid out text block to an HTML fragment
pub fn render_html(
    result: &LayoutResult,
    text: &TextSettings,
    fragments: &[Fragment],
    config: &HtmlConfig,
    layout: &LayoutConfig,
) -> String {
    let mut builder = HtmlBuilder::new(config.clone());

    builder.start_div(
        &["value", "final-text"],
        &container_styles(result, text, layout),
        None,
    );
    builder.start_div(&["pers"], &perspective_styles(result, text, layout), None);
    for fragment in fragments {
        builder.add_fragment(fragment);
    }
    builder.end_div();
    builder.end_div();

    builder.build()
}

/// Render the message of a data error in place of the text
pub fn render_error(error: &DataError, text: &TextSettings, config: &HtmlConfig) -> String {
    let message = error.to_string();
    let mut styles = typography(text);
    // no text indent on the message
    styles.retain(|(name, _)| *name != "text-indent");
    styles.push(("font-family", ERROR_FONT.to_string()));
    styles.push(("color", ERROR_COLOR.to_string()));
    styles.push(("transform", style::skew(text.skew_x, text.skew_y)));

    let mut builder = HtmlBuilder::new(config.clone());
    builder.start_div(&["value", "errormsg"], &styles, Some(&message));
    builder.add_text(&message);
    builder.end_div();
    builder.build()
}

/// Format declarations as a style attribute
fn style_attr(decls: &Declarations) -> String {
    if decls.is_empty() {
        return String::new();
    }
    let body = decls
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ");
    format!(r#" style="{}""#, escape_html(&body))
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
