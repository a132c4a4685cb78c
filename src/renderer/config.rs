//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "tw_" for "tw_value")
    pub class_prefix: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            class_prefix: Some("tw_".to_string()),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
