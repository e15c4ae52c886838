use autoclean_type::{span::Span, symbol::SymbolId};

/// An annotation such as `@cleanup("release")` attached to a declaration.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct ASTAttribute {
  pub name: SymbolId,
  pub args: Vec<ASTAttributeArg>,
  pub span: Span,
  /// Set once a handler has consumed this attribute so the host never
  /// dispatches it again.
  pub processed: bool,
}

impl ASTAttribute {
  pub fn new(
    name: SymbolId,
    args: Vec<ASTAttributeArg>,
    span: Span,
  ) -> Self {
    Self {
      name,
      args,
      span,
      processed: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub enum ASTAttributeArg {
  IntLiteral(i64, Span),
  StringLiteral(String, Span),
}

impl ASTAttributeArg {
  pub fn span(&self) -> &Span {
    match self {
      ASTAttributeArg::IntLiteral(_, span) | ASTAttributeArg::StringLiteral(_, span) => span,
    }
  }
}
