use autoclean_type::{span::Span, symbol::SymbolId};

use crate::NodeId;

/// Member access expression: `object.member`
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTMemberAccess {
  pub object: NodeId,
  pub member: SymbolId,
  pub span: Span,
}

impl ASTMemberAccess {
  pub fn new(
    object: NodeId,
    member: SymbolId,
    span: Span,
  ) -> Self {
    Self { object, member, span }
  }
}
