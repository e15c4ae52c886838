use autoclean_type::symbol::SymbolId;

#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub enum ASTTypeSyntax {
  Void,
  /// `var`: type taken from the initializer.
  Inferred,
  Named(SymbolId),
}
