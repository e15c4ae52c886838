use autoclean_type::span::Span;

use crate::NodeId;

#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq)]
pub enum ASTBinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Equal,
  NotEqual,
  Less,
  LessEqual,
  Greater,
  GreaterEqual,
  And,
  Or,
}

impl ASTBinaryOperator {
  pub fn as_str(&self) -> &'static str {
    match self {
      ASTBinaryOperator::Add => "+",
      ASTBinaryOperator::Subtract => "-",
      ASTBinaryOperator::Multiply => "*",
      ASTBinaryOperator::Divide => "/",
      ASTBinaryOperator::Equal => "==",
      ASTBinaryOperator::NotEqual => "!=",
      ASTBinaryOperator::Less => "<",
      ASTBinaryOperator::LessEqual => "<=",
      ASTBinaryOperator::Greater => ">",
      ASTBinaryOperator::GreaterEqual => ">=",
      ASTBinaryOperator::And => "&&",
      ASTBinaryOperator::Or => "||",
    }
  }

  pub fn from_symbol(symbol: &str) -> Option<Self> {
    let op = match symbol {
      "+" => ASTBinaryOperator::Add,
      "-" => ASTBinaryOperator::Subtract,
      "*" => ASTBinaryOperator::Multiply,
      "/" => ASTBinaryOperator::Divide,
      "==" => ASTBinaryOperator::Equal,
      "!=" => ASTBinaryOperator::NotEqual,
      "<" => ASTBinaryOperator::Less,
      "<=" => ASTBinaryOperator::LessEqual,
      ">" => ASTBinaryOperator::Greater,
      ">=" => ASTBinaryOperator::GreaterEqual,
      "&&" => ASTBinaryOperator::And,
      "||" => ASTBinaryOperator::Or,
      _ => return None,
    };

    Some(op)
  }
}

#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct ASTBinary {
  pub left: NodeId,
  pub operator: ASTBinaryOperator,
  pub right: NodeId,
  pub span: Span,
}

impl ASTBinary {
  pub fn new(
    left: NodeId,
    operator: ASTBinaryOperator,
    right: NodeId,
    span: Span,
  ) -> Self {
    Self {
      left,
      operator,
      right,
      span,
    }
  }
}
