use autoclean_type::{span::Span, symbol::SymbolId};

use crate::NodeId;

/// A type declaration. Items are field declarations and methods.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTRecord {
  pub name: SymbolId,
  pub items: Vec<NodeId>,
  pub span: Span,
}

impl ASTRecord {
  pub fn new(
    name: SymbolId,
    items: Vec<NodeId>,
    span: Span,
  ) -> Self {
    Self { name, items, span }
  }
}
