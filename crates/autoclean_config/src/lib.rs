use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTRIBUTE_NAME: &str = "cleanup";
pub const DEFAULT_CLEANUP_METHOD: &str = "close";
pub const DEFAULT_BARRIER: &str = "autoclean.Runtime.preventNullAnalysis";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DumpKind {
  /// Rewritten tree, printed as source.
  Tree,
  /// Raw arena nodes.
  Ast,
  /// One row per `@cleanup` directive with its outcome.
  Summary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugTrace {
  Fixture,
  Cleanup,
  Usage,
}

/// Knobs for the `@cleanup` rewrite, read from the `[cleanup]` table of
/// `autoclean.toml`.
///
/// ```toml
/// [cleanup]
/// attribute_name = "cleanup"
/// default_method = "close"
/// barrier = "autoclean.Runtime.preventNullAnalysis"
/// check_usage = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
  /// Attribute name the host dispatches to the cleanup pass.
  pub attribute_name: String,
  /// Method called when the attribute carries no argument.
  pub default_method: String,
  /// Dotted path of the pass-through call wrapped around the null guard.
  /// `None` or an empty string compares the variable against `null` directly.
  pub barrier: Option<String>,
  /// Warn when the cleanup variable is read into another binding.
  pub check_usage: bool,
}

impl Default for CleanupOptions {
  fn default() -> Self {
    Self {
      attribute_name: DEFAULT_ATTRIBUTE_NAME.to_string(),
      default_method: DEFAULT_CLEANUP_METHOD.to_string(),
      barrier: Some(DEFAULT_BARRIER.to_string()),
      check_usage: true,
    }
  }
}

impl CleanupOptions {
  /// Barrier path split on `.`; empty segments are dropped.
  pub fn barrier_segments(&self) -> Option<Vec<&str>> {
    let segments: Vec<&str> = self.barrier.as_deref()?.split('.').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() { None } else { Some(segments) }
  }
}

/// Shape of `autoclean.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocleanConfigFile {
  #[serde(default)]
  pub cleanup: CleanupOptions,
}

#[derive(Debug, Clone, Default)]
pub struct AutocleanConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub dump: Vec<DumpKind>,
  pub cleanup: CleanupOptions,
}

impl AutocleanConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      ..Self::default()
    }
  }

  /// Config used by tests and library callers: no output at all.
  pub fn silent() -> Self {
    Self::new_basic(false, Vec::new(), true, 0)
  }
}
