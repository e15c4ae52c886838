use autoclean_type::span::Span;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTFor {
  pub init: Option<NodeId>,
  pub condition: Option<NodeId>,
  pub update: Option<NodeId>,
  pub body: NodeId,
  pub span: Span,
}

impl ASTFor {
  pub fn new(
    init: Option<NodeId>,
    condition: Option<NodeId>,
    update: Option<NodeId>,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self {
      init,
      condition,
      update,
      body,
      span,
    }
  }
}
