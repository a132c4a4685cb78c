//! Error types for loading settings documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings at {span:?}: {message}")]
    Toml { message: String, span: Option<Span> },

    #[error("failed to export settings: {0}")]
    Export(#[from] toml::ser::Error),
}

impl From<toml::de::Error> for SettingsError {
    fn from(err: toml::de::Error) -> Self {
        SettingsError::Toml {
            message: err.message().trim().to_string(),
            span: err.span(),
        }
    }
}

impl SettingsError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            SettingsError::Toml { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            SettingsError::Toml {
                message,
                span: Some(span),
            } => (message, span.clone()),
            other => return other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid settings")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
