use autoclean_type::span::Span;

#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub enum ASTLiteralValue {
  /// The absent-value sentinel.
  Null,
  Boolean(bool),
  Int(i64),
  String(String),
}

impl std::fmt::Display for ASTLiteralValue {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      ASTLiteralValue::Null => write!(f, "null"),
      ASTLiteralValue::Boolean(value) => write!(f, "{}", value),
      ASTLiteralValue::Int(value) => write!(f, "{}", value),
      ASTLiteralValue::String(value) => write!(f, "{:?}", value),
    }
  }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ASTLiteral {
  pub value: ASTLiteralValue,
  pub span: Span,
}

impl ASTLiteral {
  pub fn new(
    value: ASTLiteralValue,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}
