pub mod attribute;
pub mod display;
pub mod expressions;
pub mod maker;
pub mod metadata;
pub mod statements;
pub mod tree;
pub mod type_;

use autoclean_type::{Id, span::Span};

use crate::{attribute::ASTAttribute, expressions::ASTExpression, statements::ASTStatement};

pub type NodeId = Id<ASTNode>;

#[derive(Debug, PartialEq, Clone)]
pub enum ASTNode {
  Expression(ASTExpression),
  Statement(ASTStatement),
  Attribute(ASTAttribute),
}

impl ASTNode {
  pub fn span(&self) -> &Span {
    match self {
      ASTNode::Expression(expr) => expr.span(),
      ASTNode::Statement(stmt) => stmt.span(),
      ASTNode::Attribute(attr) => &attr.span,
    }
  }

  /// Direct children in source order.
  pub fn children(&self) -> Vec<NodeId> {
    match self {
      ASTNode::Expression(expr) => expr.children(),
      ASTNode::Statement(stmt) => stmt.children(),
      ASTNode::Attribute(_) => Vec::new(),
    }
  }
}
