use std::fmt;

use autoclean_type::span::Span;

/// The rewrite only ever aborts (error) or advises (warning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
  Warning,
  Error,
}

impl Severity {
  pub fn name(&self) -> &'static str {
    match self {
      Severity::Warning => "Warning",
      Severity::Error => "Error",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Secondary location attached to a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
  pub span: Span,
  pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
  pub severity: Severity,
  pub message: String,
  /// Stable code such as `C0003`.
  pub error_code: String,
  pub primary_span: Span,
  pub labels: Vec<Label>,
  pub notes: Vec<String>,
}

impl Diagnostic {
  pub fn new(
    severity: Severity,
    message: impl Into<String>,
    error_code: impl Into<String>,
    primary_span: Span,
  ) -> Self {
    Self {
      severity,
      message: message.into(),
      error_code: error_code.into(),
      primary_span,
      labels: Vec::new(),
      notes: Vec::new(),
    }
  }

  pub fn with_label(
    mut self,
    span: Span,
    message: impl Into<String>,
  ) -> Self {
    self.labels.push(Label {
      span,
      message: message.into(),
    });
    self
  }

  pub fn with_note(
    mut self,
    note: impl Into<String>,
  ) -> Self {
    self.notes.push(note.into());
    self
  }

  pub fn is_error(&self) -> bool {
    self.severity == Severity::Error
  }

  pub fn is_warning(&self) -> bool {
    self.severity == Severity::Warning
  }
}
