use autoclean_type::span::Span;

use crate::{
  NodeId,
  expressions::{
    assignment::ASTAssignment, binary::ASTBinary, call::ASTCallExpression, cast::ASTCast, grouped::ASTGrouped,
    literal::ASTLiteral, member_access::ASTMemberAccess, unary::ASTUnary, variable::ASTVariableExpression,
  },
};

pub mod assignment;
pub mod binary;
pub mod call;
pub mod cast;
pub mod grouped;
pub mod literal;
pub mod member_access;
pub mod unary;
pub mod variable;

#[derive(Debug, PartialEq, Clone)]
pub enum ASTExpression {
  Assignment(ASTAssignment),
  Binary(ASTBinary),
  Cast(ASTCast),
  Call(ASTCallExpression),
  Grouped(ASTGrouped),
  Literal(ASTLiteral),
  MemberAccess(ASTMemberAccess),
  Unary(ASTUnary),
  Variable(ASTVariableExpression),
}

impl ASTExpression {
  pub fn span(&self) -> &Span {
    match self {
      ASTExpression::Assignment(expr) => &expr.span,
      ASTExpression::Binary(expr) => &expr.span,
      ASTExpression::Cast(expr) => &expr.span,
      ASTExpression::Call(expr) => &expr.span,
      ASTExpression::Grouped(expr) => &expr.span,
      ASTExpression::Literal(expr) => &expr.span,
      ASTExpression::MemberAccess(expr) => &expr.span,
      ASTExpression::Unary(expr) => &expr.span,
      ASTExpression::Variable(expr) => &expr.span,
    }
  }

  pub fn children(&self) -> Vec<NodeId> {
    match self {
      ASTExpression::Assignment(expr) => vec![expr.target, expr.value],
      ASTExpression::Binary(expr) => vec![expr.left, expr.right],
      ASTExpression::Cast(expr) => vec![expr.expression],
      ASTExpression::Call(expr) => {
        let mut children = vec![expr.callee];
        children.extend(expr.arguments.iter().copied());
        children
      },
      ASTExpression::Grouped(expr) => vec![expr.expression],
      ASTExpression::MemberAccess(expr) => vec![expr.object],
      ASTExpression::Unary(expr) => vec![expr.operand],
      ASTExpression::Literal(_) | ASTExpression::Variable(_) => Vec::new(),
    }
  }
}
