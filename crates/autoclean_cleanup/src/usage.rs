//! Best-effort scan for the cleanup variable being read into something else.
//!
//! Only four positions are visited: plain `=` right-hand sides,
//! expression-statement operands, variable initializers and cast operands.
//! Anything else (call arguments, receivers, nested blocks) is skipped, and
//! names are compared without scope resolution, so a shadowing local with
//! the same name is reported too.

use autoclean_ast::{
  ASTNode, NodeId,
  expressions::{ASTExpression, assignment::ASTAssignmentOperator},
  statements::ASTStatement,
  tree::SyntaxTree,
};
use autoclean_type::{span::Span, symbol::SymbolId};

struct UsageChecker<'t> {
  tree: &'t SyntaxTree,
  name: SymbolId,
  /// Nodes visited on the way down to the current one.
  path: Vec<NodeId>,
  anchors: Vec<Span>,
}

impl<'t> UsageChecker<'t> {
  fn visit(
    &mut self,
    id: NodeId,
  ) {
    let tree = self.tree;
    self.path.push(id);

    match tree.get(&id) {
      ASTNode::Expression(ASTExpression::Assignment(assign)) if assign.operator == ASTAssignmentOperator::Assign => {
        self.visit(assign.value)
      },
      ASTNode::Statement(ASTStatement::Expression(stmt)) => self.visit(stmt.expression),
      ASTNode::Statement(ASTStatement::Variable(var)) => {
        if let Some(value) = var.value {
          self.visit(value);
        }
      },
      ASTNode::Expression(ASTExpression::Cast(cast)) => self.visit(cast.expression),
      ASTNode::Expression(ASTExpression::Variable(var)) if var.name == self.name => {
        // Innermost node on the path that points at real source.
        if let Some(span) = self.path.iter().rev().find_map(|node| tree.locate(node)) {
          self.anchors.push(span);
        }
      },
      _ => {},
    }

    self.path.pop();
  }
}

/// Spans to warn at, one per bare read of `name` found in `tail`.
pub fn find_reassignments(
  tree: &SyntaxTree,
  tail: &[NodeId],
  name: SymbolId,
) -> Vec<Span> {
  let mut checker = UsageChecker {
    tree,
    name,
    path: Vec::new(),
    anchors: Vec::new(),
  };

  for stmt in tail {
    checker.visit(*stmt);
  }

  checker.anchors
}
