pub mod diagnostic_report;
pub mod message;

use autoclean_type::{file::SourceMap, span::Span};
use colored::*;
use diagnostic_report::{Diagnostic, Severity};

pub fn render(
  diag: &Diagnostic,
  sm: &SourceMap,
) {
  println!("{}", format_header(diag));
  println!("{:2}{} {}", "", "-->".blue().bold(), location(&diag.primary_span, sm));

  for label in &diag.labels {
    println!("  {} {} ({})", "label:".yellow().bold(), label.message, location(&label.span, sm));
  }

  for note in &diag.notes {
    println!("  {} {}", "note:".cyan().bold(), note);
  }

  println!();
}

pub fn render_batch(
  diagnostics: &[Diagnostic],
  sm: &SourceMap,
) {
  for diag in diagnostics {
    render(diag, sm);
  }
}

fn format_header(diag: &Diagnostic) -> String {
  let head = format!("{}[{}]:", diag.severity, diag.error_code);
  let head = match diag.severity {
    Severity::Warning => head.yellow().bold(),
    Severity::Error => head.red().bold(),
  };

  format!("{} {}", head, diag.message.bold())
}

/// `path:start..end`, or `<generated>` for synthetic spans.
pub fn location(
  span: &Span,
  sm: &SourceMap,
) -> String {
  if span.is_synthetic() {
    return "<generated>".to_string();
  }

  let path = sm
    .get(&span.file)
    .map(|file| file.path.display().to_string())
    .unwrap_or_else(|| "<unknown>".to_string());

  format!("{}:{}..{}", path, span.start, span.end)
}

/// Number of diagnostics with error severity.
pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
  diagnostics.iter().filter(|d| d.is_error()).count()
}

#[cfg(test)]
mod tests {
  use autoclean_type::{BytePosition, file::FileId};

  use super::*;

  #[test]
  fn location_uses_registered_path() {
    let mut sm = SourceMap::new();
    let file = sm.add_file("demo.json");
    let span = Span::new(file, BytePosition(3), BytePosition(7));

    assert_eq!(location(&span, &sm), "demo.json:3..7");
    assert_eq!(location(&Span::synthetic(), &sm), "<generated>");
    assert_eq!(
      location(&Span::new(FileId::new(9), BytePosition(0), BytePosition(1)), &sm),
      "<unknown>:0..1"
    );
  }
}
