//! Source-annotated report rendering.
//!
//! Reports are rendered without color so the text is stable in logs and
//! tests.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::ErrorCode;

/// A single labelled report against one source text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceReport {
    pub code: ErrorCode,
    pub message: String,
    /// Byte range the label points at.
    pub span: Range<usize>,
    pub label: String,
}

impl SourceReport {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Range<usize>) -> Self {
        SourceReport {
            code,
            message: message.into(),
            span,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Render against `source`.
    ///
    /// The span is clamped to the source so reports at end of input still
    /// point somewhere.
    pub fn render(&self, source: &str) -> String {
        let end = self.span.end.min(source.len());
        let start = self.span.start.min(end);

        let mut label = Label::new(start..end);
        if !self.label.is_empty() {
            label = label.with_message(&self.label);
        }
        let report = Report::build(ReportKind::Error, (), start)
            .with_code(self.code.as_str())
            .with_message(&self.message)
            .with_label(label)
            .with_config(Config::default().with_color(false))
            .finish();

        let mut out = Vec::new();
        if report.write(Source::from(source), &mut out).is_err() {
            // Writing into a Vec only fails if ariadne cannot lay out the
            // source; fall back to the bare message.
            return format!("[{}] Error: {}\n", self.code, self.message);
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

#[cfg(test)]
mod tests;
