use autoclean_type::span::Span;

use crate::NodeId;

/// Call expression: `open(path)` or, with a member-access callee,
/// `handle.release()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ASTCallExpression {
  pub callee: NodeId,
  pub arguments: Vec<NodeId>,
  pub span: Span,
}

impl ASTCallExpression {
  pub fn new(
    callee: NodeId,
    arguments: Vec<NodeId>,
    span: Span,
  ) -> Self {
    ASTCallExpression {
      callee,
      arguments,
      span,
    }
  }
}
