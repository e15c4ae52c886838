use autoclean_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTSwitch {
  pub selector: NodeId,
  pub cases: Vec<NodeId>,
  pub span: Span,
}

impl ASTSwitch {
  pub fn new(
    selector: NodeId,
    cases: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { selector, cases, span }
  }
}

/// One arm of a switch. `label` is `None` for `default:`.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTCase {
  pub label: Option<NodeId>,
  pub statements: Vec<NodeId>,
  pub span: Span,
}

impl ASTCase {
  pub fn new(
    label: Option<NodeId>,
    statements: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      label,
      statements,
      span,
    }
  }
}
