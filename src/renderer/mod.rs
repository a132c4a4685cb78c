//! HTML renderer for the text block
//!
//! This module applies a LayoutResult and the text fragments as inline
//! styles on a small HTML fragment.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_error, render_html, HtmlBuilder};
