use autoclean_type::span::Span;

use crate::NodeId;

/// `try { body } catch (...) { ... } finally { finalizer }`
///
/// `body` and `finalizer` point at block statements.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTTry {
  pub body: NodeId,
  pub catches: Vec<NodeId>,
  pub finalizer: Option<NodeId>,
  pub span: Span,
}

impl ASTTry {
  pub fn new(
    body: NodeId,
    catches: Vec<NodeId>,
    finalizer: Option<NodeId>,
    span: Span,
  ) -> Self {
    Self {
      body,
      catches,
      finalizer,
      span,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTCatch {
  pub parameter: NodeId,
  pub body: NodeId,
  pub span: Span,
}

impl ASTCatch {
  pub fn new(
    parameter: NodeId,
    body: NodeId,
    span: Span,
  ) -> Self {
    Self { parameter, body, span }
  }
}
