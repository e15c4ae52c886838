use autoclean_type::span::Span;

use crate::{NodeId, type_::ASTTypeSyntax};

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTCast {
  pub span: Span,
  pub target_type: ASTTypeSyntax,
  pub expression: NodeId,
}

impl ASTCast {
  pub fn new(
    span: Span,
    target_type: ASTTypeSyntax,
    expression: NodeId,
  ) -> Self {
    Self {
      span,
      target_type,
      expression,
    }
  }
}
