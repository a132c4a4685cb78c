//! Text Enhancer - a rotatable, data-driven text block
//!
//! This library lays out one static label plus one dynamic value inside a
//! host area, in any of four writing directions, with free rotation and
//! skew, and renders the result as an HTML fragment.
//!
//! A render pass has two geometry phases. The block is placed first, then
//! measured, then corrected for the overflow its rotation causes. Callers
//! supply the measurement through the [`Measure`] trait.
//!
//! # Example
//!
//! ```rust
//! use text_enhancer::{render_document, Measurement, RenderConfig};
//!
//! let source = r#"
//! [static_text]
//! post_text = "Sales"
//!
//! [[data.values]]
//! name = "Sales"
//! values = [1250]
//! "#;
//!
//! let html = render_document(source, &Measurement::new(160.0, 24.0), &RenderConfig::default())
//!     .unwrap();
//! assert!(html.contains("Sales"));
//! assert!(html.contains("1250"));
//! ```

pub mod data;
pub mod error;
pub mod fragment;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod style;

pub use data::{Column, DataError, DataValue, DataView};
pub use error::SettingsError;
pub use fragment::{arrange, Fragment, FragmentKind};
pub use layout::{
    compute, correct, place, LayoutConfig, LayoutResult, LayoutSettings, Measure, Measurement,
    PlacedText,
};
pub use renderer::{render_error, render_html, HtmlConfig};
pub use settings::{Document, Settings, SettingsObject};

use log::debug;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the settings document
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Debug mode: print the layout of each pass to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render the text block with default configuration
pub fn render(settings: &Settings, data: &DataView, measure: &impl Measure) -> String {
    render_with_config(settings, data, measure, &RenderConfig::default())
}

/// Render the text block with custom configuration
///
/// When the data view does not hold exactly one row, the error message is
/// rendered in place of the text.
///
/// # Example
///
/// ```rust
/// use text_enhancer::{
///     render_with_config, Column, DataView, HtmlConfig, LayoutConfig, Measurement,
///     RenderConfig, Settings,
/// };
///
/// let settings = Settings::from_str("[text]\ndirection = \"vertical-rl\"").unwrap();
/// let data = DataView::new().with_category(Column::new("Region", vec!["West".into()]));
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_host_size(200.0, 400.0))
///     .with_html(HtmlConfig::default().with_pretty_print(false));
///
/// let html = render_with_config(&settings, &data, &Measurement::new(24.0, 80.0), &config);
/// assert!(html.contains("writing-mode: tb-rl"));
/// assert!(html.contains("max-height: 400px"));
/// ```
pub fn render_with_config(
    settings: &Settings,
    data: &DataView,
    measure: &impl Measure,
    config: &RenderConfig,
) -> String {
    let value = match data.dynamic_value() {
        Ok(value) => value,
        Err(err) => return render_error(&err, &settings.text, &config.html),
    };
    let fragments = arrange(settings, &value, data.url());

    // Phase 1: placement
    let placed = place(&settings.layout_settings());

    // Phase 2: measure the placed block and correct it
    let measured = measure.measure(&placed);
    let result = correct(&placed, &measured);
    debug!(
        "margins top {} left {} for {} fragments",
        result.margins.top,
        result.margins.left,
        fragments.len()
    );

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprintln!("{:#?}", result);
        eprintln!("====================");
    }

    render_html(
        &result,
        &settings.text,
        &fragments,
        &config.html,
        &config.layout,
    )
}

/// Load a settings document with its data and render it
pub fn render_document(
    source: &str,
    measure: &impl Measure,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let doc = Document::from_str(source)?;
    Ok(render_with_config(&doc.settings, &doc.data, measure, config))
}
