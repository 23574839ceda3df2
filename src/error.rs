//! Error types for loading session files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse session TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SessionError {
    /// Source span of the error, when the TOML parser reported one
    pub fn span(&self) -> Option<Span> {
        match self {
            SessionError::Parse(e) => e.span(),
            SessionError::Io(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            SessionError::Parse(e) => match e.span() {
                Some(span) => (span, e.message().to_string()),
                None => return self.to_string(),
            },
            SessionError::Io(_) => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid session file")
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
