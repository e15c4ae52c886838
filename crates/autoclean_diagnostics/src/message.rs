use std::fmt;

use autoclean_type::span::Span;

use super::diagnostic_report::{Diagnostic, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticMessage {
  // #region Cleanup
  CleanupNameEmpty {
    span: Span,
  },
  CleanupNotOnLocal {
    span: Span,
  },
  CleanupUninitialized {
    span: Span,
  },
  CleanupOutsideBlock {
    span: Span,
  },
  /// The declaration was reached through its parent but is missing from the
  /// parent's statement list. Always a bug in the rewriter, never user error.
  CleanupDeclarationNotFound {
    span: Span,
  },
  CleanupNameNotString {
    span: Span,
  },
  CleanupTooManyArguments {
    count: usize,
    span: Span,
  },
  CleanupVariableReassigned {
    name: String,
    span: Span,
    declaration_span: Option<Span>,
  },
  // #endregion Cleanup
}

impl fmt::Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::CleanupNameEmpty { .. } => write!(f, "cleanup name cannot be the empty string"),
      DiagnosticMessage::CleanupNotOnLocal { .. } => write!(f, "@cleanup is legal only on local variable declarations"),
      DiagnosticMessage::CleanupUninitialized { .. } => {
        write!(f, "@cleanup variable declarations need to be initialized")
      },
      DiagnosticMessage::CleanupOutsideBlock { .. } => {
        write!(f, "@cleanup is legal only on a local variable declaration inside a block")
      },
      DiagnosticMessage::CleanupDeclarationNotFound { .. } => {
        write!(
          f,
          "internal error: can't find this local variable declaration inside its parent"
        )
      },
      DiagnosticMessage::CleanupNameNotString { .. } => write!(f, "cleanup name must be a string literal"),
      DiagnosticMessage::CleanupTooManyArguments { count, .. } => {
        write!(f, "@cleanup takes at most one argument, found {}", count)
      },
      DiagnosticMessage::CleanupVariableReassigned { .. } => {
        write!(f, "assigning an auto-cleanup variable to something else is discouraged")
      },
    }
  }
}

impl DiagnosticMessage {
  pub fn primary_span(&self) -> Span {
    match self {
      DiagnosticMessage::CleanupNameEmpty { span }
      | DiagnosticMessage::CleanupNotOnLocal { span }
      | DiagnosticMessage::CleanupUninitialized { span }
      | DiagnosticMessage::CleanupOutsideBlock { span }
      | DiagnosticMessage::CleanupDeclarationNotFound { span }
      | DiagnosticMessage::CleanupNameNotString { span }
      | DiagnosticMessage::CleanupTooManyArguments { span, .. }
      | DiagnosticMessage::CleanupVariableReassigned { span, .. } => span.clone(),
    }
  }

  pub fn code(&self) -> String {
    match self {
      DiagnosticMessage::CleanupNameEmpty { .. } => "C0001",
      DiagnosticMessage::CleanupNotOnLocal { .. } => "C0002",
      DiagnosticMessage::CleanupUninitialized { .. } => "C0003",
      DiagnosticMessage::CleanupOutsideBlock { .. } => "C0004",
      DiagnosticMessage::CleanupDeclarationNotFound { .. } => "C0005",
      DiagnosticMessage::CleanupNameNotString { .. } => "C0006",
      DiagnosticMessage::CleanupTooManyArguments { .. } => "C0007",
      DiagnosticMessage::CleanupVariableReassigned { .. } => "C0100",
    }
    .to_string()
  }

  fn level(&self) -> Severity {
    match self {
      DiagnosticMessage::CleanupVariableReassigned { .. } => Severity::Warning,
      _ => Severity::Error,
    }
  }

  fn secondary_labels(&self) -> Vec<(Span, String)> {
    match self {
      DiagnosticMessage::CleanupVariableReassigned {
        declaration_span: Some(span),
        ..
      } => {
        vec![(span.clone(), "Cleanup declared here".to_string())]
      },
      _ => vec![],
    }
  }

  fn notes(&self) -> Vec<String> {
    match self {
      DiagnosticMessage::CleanupDeclarationNotFound { .. } => {
        vec!["this is a bug in the cleanup rewriter, please report it".to_string()]
      },
      DiagnosticMessage::CleanupVariableReassigned { name, .. } => {
        vec![format!("'{}' is still cleaned up when the enclosing block exits", name)]
      },
      _ => vec![],
    }
  }

  pub fn report(&self) -> Diagnostic {
    self.report_with_severity(self.level())
  }

  pub fn report_with_severity(
    &self,
    severity: Severity,
  ) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(severity, self.to_string(), self.code(), self.primary_span());
    for (span, message) in self.secondary_labels() {
      diagnostic = diagnostic.with_label(span, message);
    }
    for note in self.notes() {
      diagnostic = diagnostic.with_note(note);
    }
    diagnostic
  }
}
