use autoclean_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub enum ASTAssignmentOperator {
  Assign,
  AddAssign,
  SubAssign,
  MulAssign,
  DivAssign,
}

impl ASTAssignmentOperator {
  pub fn as_str(&self) -> &'static str {
    match self {
      ASTAssignmentOperator::Assign => "=",
      ASTAssignmentOperator::AddAssign => "+=",
      ASTAssignmentOperator::SubAssign => "-=",
      ASTAssignmentOperator::MulAssign => "*=",
      ASTAssignmentOperator::DivAssign => "/=",
    }
  }
}

#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct ASTAssignment {
  pub target: NodeId,
  pub value: NodeId,
  pub operator: ASTAssignmentOperator,
  pub span: Span,
}

impl ASTAssignment {
  pub fn new(
    target: NodeId,
    value: NodeId,
    operator: ASTAssignmentOperator,
    span: Span,
  ) -> Self {
    Self {
      target,
      value,
      operator,
      span,
    }
  }
}
