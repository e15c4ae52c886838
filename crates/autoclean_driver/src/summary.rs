use ascii_table::AsciiTable;
use autoclean_cleanup::CleanupOutcome;

use crate::pipeline::DirectiveReport;

fn outcome_cell(outcome: &CleanupOutcome) -> String {
  match outcome {
    CleanupOutcome::AlreadyProcessed => "skipped".to_string(),
    CleanupOutcome::Rejected { code } => format!("rejected ({})", code),
    CleanupOutcome::Rewritten { protected, .. } => format!("rewritten, {} protected", protected),
  }
}

fn to_row(
  index: usize,
  report: &DirectiveReport,
) -> Vec<String> {
  vec![
    (index + 1).to_string(),
    report.variable.clone(),
    report.method.clone(),
    report.location.clone(),
    outcome_cell(&report.outcome),
  ]
}

/// One row per directive, in dispatch order.
pub fn format_summary(reports: &[DirectiveReport]) -> String {
  let mut table = AsciiTable::default();
  table.column(0).set_header("#");
  table.column(1).set_header("Variable");
  table.column(2).set_header("Method");
  table.column(3).set_header("Location");
  table.column(4).set_header("Outcome");

  let rows: Vec<Vec<String>> = reports.iter().enumerate().map(|(i, report)| to_row(i, report)).collect();

  table.format(rows)
}
