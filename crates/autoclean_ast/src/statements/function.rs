use autoclean_type::{span::Span, symbol::SymbolId};

use crate::{NodeId, metadata::ASTMetadata, type_::ASTTypeSyntax};

/// A method or free function. The body statements are owned directly by the
/// function rather than by a nested block node, so a local declared at the
/// top of the body has the function as its direct parent.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTFunction {
  pub name: SymbolId,
  pub parameters: Vec<NodeId>,
  pub return_type: ASTTypeSyntax,
  /// `None` for abstract or extern declarations.
  pub body: Option<Vec<NodeId>>,
  pub metadata: ASTMetadata,
  pub span: Span,
}

impl ASTFunction {
  pub fn new(
    name: SymbolId,
    parameters: Vec<NodeId>,
    return_type: ASTTypeSyntax,
    body: Option<Vec<NodeId>>,
    metadata: ASTMetadata,
    span: Span,
  ) -> Self {
    Self {
      name,
      parameters,
      return_type,
      body,
      metadata,
      span,
    }
  }
}
