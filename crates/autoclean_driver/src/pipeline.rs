use std::path::Path;
use std::sync::Arc;
use std::{cell::RefCell, rc::Rc};

use autoclean_ast::{ASTNode, NodeId, display::format_tree, statements::ASTStatement, tree::SyntaxTree};
use autoclean_cleanup::{CleanupDirective, CleanupHandler, CleanupOutcome};
use autoclean_config::{AutocleanConfig, AutocleanConfigFile, CleanupOptions, DebugTrace, DumpKind};
use autoclean_diagnostics::diagnostic_report::Diagnostic;
use autoclean_log::{log_dbg, log_trc, phase_log, phase_ok, phase_warn, trace_dbg};
use autoclean_type::{file::SourceMap, symbol::SymbolTable};

use crate::error::DriverError;
use crate::fixture::{Fixture, FixtureLowering};
use crate::summary::format_summary;

/// What happened to one `@cleanup` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveReport {
  pub attribute: NodeId,
  pub variable: String,
  pub method: String,
  pub location: String,
  pub outcome: CleanupOutcome,
}

pub struct ExpandResult {
  pub reports: Vec<DirectiveReport>,
  pub diagnostics: Vec<Diagnostic>,
}

impl ExpandResult {
  pub fn error_count(&self) -> usize {
    autoclean_diagnostics::error_count(&self.diagnostics)
  }
}

/// A loaded and rewritten fixture.
pub struct CompileOutput {
  pub tree: SyntaxTree,
  pub symbols: Rc<RefCell<SymbolTable>>,
  pub source_map: SourceMap,
  pub expansion: ExpandResult,
}

impl CompileOutput {
  pub fn render(&self) -> String {
    format_tree(&self.tree, &self.symbols.borrow())
  }
}

/// Reads the `[cleanup]` table of an `autoclean.toml`.
pub fn load_config(path: &Path) -> Result<CleanupOptions, DriverError> {
  let text = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let file: AutocleanConfigFile = toml::from_str(&text).map_err(|source| DriverError::Config {
    path: path.to_path_buf(),
    source,
  })?;

  Ok(file.cleanup)
}

pub fn load_fixture(
  path: &Path,
  sm: &mut SourceMap,
  symbols: Rc<RefCell<SymbolTable>>,
) -> Result<SyntaxTree, DriverError> {
  let text = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let fixture: Fixture = serde_json::from_str(&text).map_err(|source| DriverError::Json {
    path: path.to_path_buf(),
    source,
  })?;

  let file = sm.add_file(path);
  let (nodes, roots) = FixtureLowering::new(symbols, file).lower(&fixture)?;

  Ok(SyntaxTree::new(nodes, roots))
}

/// Attributes named `attribute_name`, in tree order.
pub fn find_directives(
  tree: &SyntaxTree,
  symbols: &SymbolTable,
  attribute_name: &str,
) -> Vec<NodeId> {
  let Some(name) = symbols.lookup(attribute_name) else {
    return Vec::new();
  };

  tree
    .walk()
    .into_iter()
    .filter(|id| matches!(tree.get(id), ASTNode::Attribute(attr) if attr.name == name))
    .collect()
}

fn describe(
  tree: &SyntaxTree,
  symbols: &SymbolTable,
  sm: &SourceMap,
  config: &AutocleanConfig,
  attribute: NodeId,
) -> DirectiveReport {
  let variable = match tree.parent(&attribute).map(|parent| tree.get(&parent)) {
    Some(ASTNode::Statement(ASTStatement::Variable(var))) => symbols.get(&var.name).to_string(),
    _ => "-".to_string(),
  };

  let method = CleanupDirective::from_attribute(tree, &attribute, &config.cleanup)
    .map(|directive| directive.method)
    .unwrap_or_else(|_| "-".to_string());

  DirectiveReport {
    attribute,
    variable,
    method,
    location: autoclean_diagnostics::location(tree.get(&attribute).span(), sm),
    outcome: CleanupOutcome::AlreadyProcessed,
  }
}

/// Runs the cleanup pass on every directive not yet processed, in tree order.
pub fn expand(
  tree: &mut SyntaxTree,
  symbols: Rc<RefCell<SymbolTable>>,
  config: &AutocleanConfig,
  sm: &SourceMap,
) -> ExpandResult {
  let directives = find_directives(tree, &symbols.borrow(), &config.cleanup.attribute_name);
  log_dbg!(config, "found {} @{} directive(s)", directives.len(), config.cleanup.attribute_name);

  let mut reports: Vec<DirectiveReport> = {
    let view: &SyntaxTree = tree;
    let symbols = symbols.borrow();
    directives
      .iter()
      .map(|attribute| describe(view, &symbols, sm, config, *attribute))
      .collect()
  };

  let mut handler = CleanupHandler::new(tree, symbols, config);

  for report in &mut reports {
    log_trc!(config, "dispatching {:?} on '{}'", report.attribute, report.variable);
    report.outcome = handler.expand(report.attribute);
    trace_dbg!(config, DebugTrace::Cleanup, "{} at {}: {:?}", report.variable, report.location, report.outcome);
  }

  ExpandResult {
    reports,
    diagnostics: handler.into_diagnostics(),
  }
}

/// Loads `file_path` and rewrites it without printing anything.
pub fn expand_file(
  config: &AutocleanConfig,
  file_path: &str,
) -> Result<CompileOutput, DriverError> {
  let mut source_map = SourceMap::new();
  let symbols = Rc::new(RefCell::new(SymbolTable::new()));

  let mut tree = load_fixture(Path::new(file_path), &mut source_map, symbols.clone())?;
  trace_dbg!(config, DebugTrace::Fixture, "lowered {} nodes from {}", tree.nodes().len(), file_path);

  let expansion = expand(&mut tree, symbols.clone(), config, &source_map);

  Ok(CompileOutput {
    tree,
    symbols,
    source_map,
    expansion,
  })
}

fn dump_nodes(output: &CompileOutput) -> String {
  output
    .tree
    .nodes()
    .iter()
    .map(|(id, node)| format!("{:?}: {:?}", id, node))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Expand a single fixture, print the requested dumps and render diagnostics.
pub fn compile_file(
  config: Arc<AutocleanConfig>,
  file_path: &str,
) -> Result<CompileOutput, DriverError> {
  phase_log!(&config, "Expanding... {}", file_path);

  let output = expand_file(&config, file_path)?;

  if config.dump.contains(&DumpKind::Ast) {
    println!("{}", dump_nodes(&output));
  }

  if config.dump.contains(&DumpKind::Tree) {
    println!("{}", output.render());
  }

  if config.dump.contains(&DumpKind::Summary) {
    println!("{}", format_summary(&output.expansion.reports));
  }

  if !config.quiet {
    autoclean_diagnostics::render_batch(&output.expansion.diagnostics, &output.source_map);
  }

  let errors = output.expansion.error_count();
  if errors > 0 {
    return Err(DriverError::Diagnostics(errors));
  }

  let warnings = output.expansion.diagnostics.iter().filter(|d| d.is_warning()).count();
  if warnings > 0 {
    phase_warn!(&config, "{} finished with {} warning(s)", file_path, warnings);
  } else {
    phase_ok!(&config, "{} rewritten ({} directive(s))", file_path, output.expansion.reports.len());
  }

  Ok(output)
}
