use autoclean_type::span::Span;

use crate::NodeId;

/// An expression evaluated for its effect: `use(handle);`
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTExpressionStatement {
  pub expression: NodeId,
  pub span: Span,
}

impl ASTExpressionStatement {
  pub fn new(
    expression: NodeId,
    span: Span,
  ) -> Self {
    Self { expression, span }
  }
}
