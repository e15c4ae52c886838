use autoclean_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub enum UnaryOperator {
  Not,
  Negate,
}

impl UnaryOperator {
  pub fn as_str(&self) -> &'static str {
    match self {
      UnaryOperator::Not => "!",
      UnaryOperator::Negate => "-",
    }
  }
}

#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct ASTUnary {
  pub operator: UnaryOperator,
  pub operand: NodeId,
  pub span: Span,
}

impl ASTUnary {
  pub fn new(
    operator: UnaryOperator,
    operand: NodeId,
    span: Span,
  ) -> Self {
    Self { operator, operand, span }
  }
}
