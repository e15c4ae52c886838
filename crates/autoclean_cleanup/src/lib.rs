//! The `@cleanup` rewrite.
//!
//! Given an attribute on a local declaration, everything after the
//! declaration in its enclosing statement list is moved into a `try` block
//! whose `finally` calls the cleanup method if the variable is not null:
//!
//! ```text
//! @cleanup("release") Handle handle = open();     @cleanup("release") Handle handle = open();
//! use(handle);                              =>    try {
//!                                                   use(handle);
//!                                                 } finally {
//!                                                   if (barrier(handle) != null) {
//!                                                     handle.release();
//!                                                   }
//!                                                 }
//! ```
//!
//! The pass validates everything before touching the tree. On error the
//! statement list is left exactly as it was and the attribute is still marked
//! processed so the host does not dispatch it again.

mod directive;
pub mod locator;
pub mod splitter;
mod synthesize;
mod usage;

use std::{cell::RefCell, rc::Rc};

use autoclean_ast::{
  ASTNode, NodeId,
  statements::ASTStatement,
  tree::{NodeKind, SyntaxTree},
};
use autoclean_config::{AutocleanConfig, DebugTrace};
use autoclean_diagnostics::{diagnostic_report::Diagnostic, message::DiagnosticMessage};
use autoclean_log::{log_dbg, trace_dbg};
use autoclean_type::symbol::{SymbolId, SymbolTable};

pub use directive::CleanupDirective;
pub use locator::{Container, locate_sequence};
pub use splitter::{SplitSequence, split_at_declaration};
pub use synthesize::{build_cleanup_guard, build_try_finally};
pub use usage::find_reassignments;

/// What a single invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
  /// The attribute was already marked processed; nothing changed.
  AlreadyProcessed,
  /// An error was reported and the tree left untouched.
  Rejected { code: String },
  Rewritten {
    container: Container,
    try_node: NodeId,
    /// Number of statements moved into the protected block.
    protected: usize,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CleanupState {
  Start,
  ValidatedPlacement,
  Located,
  Split,
  UsageChecked,
  Synthesized,
  Rewritten,
  ErrorReported,
}

pub struct CleanupHandler<'a> {
  tree: &'a mut SyntaxTree,
  symbols: Rc<RefCell<SymbolTable>>,
  config: &'a AutocleanConfig,
  diagnostics: Vec<Diagnostic>,
  state: CleanupState,
}

impl<'a> CleanupHandler<'a> {
  pub fn new(
    tree: &'a mut SyntaxTree,
    symbols: Rc<RefCell<SymbolTable>>,
    config: &'a AutocleanConfig,
  ) -> Self {
    Self {
      tree,
      symbols,
      config,
      diagnostics: Vec::new(),
      state: CleanupState::Start,
    }
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn into_diagnostics(self) -> Vec<Diagnostic> {
    self.diagnostics
  }

  fn add_diagnostic(
    &mut self,
    diagnostic: Diagnostic,
  ) {
    self.diagnostics.push(diagnostic);
  }

  fn enter(
    &mut self,
    state: CleanupState,
  ) {
    trace_dbg!(self.config, DebugTrace::Cleanup, "{:?} -> {:?}", self.state, state);
    self.state = state;
  }

  /// Host entry point. Always reports the attribute as handled.
  pub fn handle(
    &mut self,
    attribute: NodeId,
  ) -> bool {
    self.expand(attribute);
    true
  }

  pub fn expand(
    &mut self,
    attribute: NodeId,
  ) -> CleanupOutcome {
    if self.tree.is_processed(&attribute) {
      log_dbg!(self.config, "attribute {:?} already processed", attribute);
      return CleanupOutcome::AlreadyProcessed;
    }

    self.tree.mark_processed(attribute);
    self.state = CleanupState::Start;

    match self.rewrite(attribute) {
      Ok(outcome) => outcome,
      Err(message) => {
        self.enter(CleanupState::ErrorReported);
        let diagnostic = message.report();
        let code = diagnostic.error_code.clone();
        self.add_diagnostic(diagnostic);
        CleanupOutcome::Rejected { code }
      },
    }
  }

  fn rewrite(
    &mut self,
    attribute: NodeId,
  ) -> Result<CleanupOutcome, DiagnosticMessage> {
    let directive = CleanupDirective::from_attribute(self.tree, &attribute, &self.config.cleanup)?;
    let (declaration, name) = self.check_preconditions(attribute, &directive)?;
    self.enter(CleanupState::ValidatedPlacement);

    let container = locate_sequence(self.tree, &declaration).ok_or_else(|| DiagnosticMessage::CleanupOutsideBlock {
      span: self.attribute_span(attribute),
    })?;
    self.enter(CleanupState::Located);

    let split = split_at_declaration(container.statements(self.tree), declaration).ok_or_else(|| {
      DiagnosticMessage::CleanupDeclarationNotFound {
        span: self.attribute_span(attribute),
      }
    })?;
    trace_dbg!(
      self.config,
      DebugTrace::Cleanup,
      "split {:?}: {} before, {} protected",
      container,
      split.prefix.len(),
      split.tail.len()
    );
    self.enter(CleanupState::Split);

    if self.config.cleanup.check_usage {
      self.check_usage(&split.tail, name, declaration);
    }
    self.enter(CleanupState::UsageChecked);

    let guard = self.synthesize_guard(name, &directive);
    self.enter(CleanupState::Synthesized);

    let protected = split.tail.len();
    let try_node = build_try_finally(self.tree, split.tail, guard);

    let mut statements = split.prefix;
    statements.push(try_node);
    container.replace_statements(self.tree, statements);
    self.tree.rebuild(container.node());
    self.enter(CleanupState::Rewritten);

    Ok(CleanupOutcome::Rewritten {
      container,
      try_node,
      protected,
    })
  }

  fn attribute_span(
    &self,
    attribute: NodeId,
  ) -> autoclean_type::span::Span {
    self.tree.get(&attribute).span().clone()
  }

  /// Returns the declaration the attribute sits on and its name.
  fn check_preconditions(
    &self,
    attribute: NodeId,
    directive: &CleanupDirective,
  ) -> Result<(NodeId, SymbolId), DiagnosticMessage> {
    if directive.method.is_empty() {
      return Err(DiagnosticMessage::CleanupNameEmpty {
        span: directive.span.clone(),
      });
    }

    let not_local = || DiagnosticMessage::CleanupNotOnLocal {
      span: self.attribute_span(attribute),
    };

    let declaration = self
      .tree
      .parent(&attribute)
      .filter(|decl| self.tree.kind(decl) == NodeKind::Local)
      .ok_or_else(not_local)?;

    let ASTNode::Statement(ASTStatement::Variable(var)) = self.tree.get(&declaration) else {
      return Err(not_local());
    };

    if var.value.is_none() {
      return Err(DiagnosticMessage::CleanupUninitialized {
        span: self.attribute_span(attribute),
      });
    }

    Ok((declaration, var.name))
  }

  fn check_usage(
    &mut self,
    tail: &[NodeId],
    name: SymbolId,
    declaration: NodeId,
  ) {
    let anchors = find_reassignments(self.tree, tail, name);
    if anchors.is_empty() {
      return;
    }

    let declaration_span = self.tree.locate(&declaration);
    let name = self.symbols.borrow().get(&name).to_string();
    trace_dbg!(self.config, DebugTrace::Usage, "'{}' read {} time(s) after declaration", name, anchors.len());

    for span in anchors {
      self.add_diagnostic(
        DiagnosticMessage::CleanupVariableReassigned {
          name: name.clone(),
          span,
          declaration_span: declaration_span.clone(),
        }
        .report(),
      );
    }
  }

  fn synthesize_guard(
    &mut self,
    name: SymbolId,
    directive: &CleanupDirective,
  ) -> NodeId {
    let (method, barrier) = {
      let mut symbols = self.symbols.borrow_mut();
      let method = symbols.intern(&directive.method);
      let barrier: Option<Vec<SymbolId>> = self
        .config
        .cleanup
        .barrier_segments()
        .map(|segments| segments.into_iter().map(|segment| symbols.intern(segment)).collect());
      (method, barrier)
    };

    build_cleanup_guard(self.tree, name, method, barrier.as_deref())
  }
}
