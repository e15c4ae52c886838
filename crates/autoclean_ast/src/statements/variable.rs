use autoclean_type::{span::Span, symbol::SymbolId};

use crate::{NodeId, metadata::ASTMetadata, type_::ASTTypeSyntax};

/// A variable declaration. The same node shape is used for locals, fields,
/// parameters and catch parameters; the position is derived from the parent
/// (see [`crate::tree::SyntaxTree::kind`]).
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTVariable {
  pub name: SymbolId,
  pub type_: ASTTypeSyntax,
  pub value: Option<NodeId>,
  pub attributes: Vec<NodeId>,
  pub metadata: ASTMetadata,
  pub span: Span,
}

impl ASTVariable {
  pub fn new(
    name: SymbolId,
    type_: ASTTypeSyntax,
    value: Option<NodeId>,
    attributes: Vec<NodeId>,
    metadata: ASTMetadata,
    span: Span,
  ) -> Self {
    Self {
      name,
      type_,
      value,
      attributes,
      metadata,
      span,
    }
  }
}
