use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use autoclean_config::{DebugTrace, DumpKind};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DumpKindCli {
  /// Print the rewritten tree as source
  Tree,
  /// Dump the raw arena nodes
  Ast,
  /// Print a table of every directive and its outcome
  Summary,
}

impl From<DumpKindCli> for DumpKind {
  fn from(value: DumpKindCli) -> DumpKind {
    match value {
      DumpKindCli::Tree => DumpKind::Tree,
      DumpKindCli::Ast => DumpKind::Ast,
      DumpKindCli::Summary => DumpKind::Summary,
    }
  }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DebugTraceCli {
  Fixture,
  Cleanup,
  Usage,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Fixture => DebugTrace::Fixture,
      DebugTraceCli::Cleanup => DebugTrace::Cleanup,
      DebugTraceCli::Usage => DebugTrace::Usage,
    }
  }
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ExpandCommand {
  /// JSON fixture to rewrite
  pub file_path: String,

  /// Config file with a [cleanup] table (defaults to ./autoclean.toml if present)
  #[arg(long)]
  pub config: Option<String>,

  /// Skip the reassignment check
  #[arg(long)]
  pub no_usage_check: bool,
}

#[derive(Subcommand, Clone, PartialEq)]
pub enum SubCommand {
  /// Rewrite every @cleanup directive in a fixture
  Expand(ExpandCommand),
}

#[derive(Parser)]
#[command(author, version, about = "Scope-exit cleanup rewriter", long_about = None)]
#[command(propagate_version = true)]
#[command(color = ColorChoice::Always)]
pub struct Cli {
  #[command(subcommand)]
  pub subcommand: SubCommand,

  /// What to print after rewriting (defaults to the tree)
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub dump: Vec<DumpKindCli>,

  /// Enable internal debug mode
  #[arg(long, default_value = "false", global = true)]
  pub debug: bool,

  /// Enable debug tracing for subsystems
  #[arg(long, value_enum, action = clap::ArgAction::Append, global = true)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Don't print any output
  #[arg(long, short = 'q', default_value = "false", global = true)]
  pub quiet: bool,

  /// Use verbose output
  #[arg(long, short, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,
}
