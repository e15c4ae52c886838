use autoclean_ast::{
  ASTNode, NodeId,
  attribute::ASTAttributeArg,
  tree::SyntaxTree,
};
use autoclean_config::CleanupOptions;
use autoclean_diagnostics::message::DiagnosticMessage;
use autoclean_type::span::Span;

/// Parsed `@cleanup` payload: the zero-argument method to call on the
/// declared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupDirective {
  pub method: String,
  pub span: Span,
}

impl CleanupDirective {
  /// Reads the single optional string argument of the attribute. No argument
  /// means the configured default method. The result may be the empty
  /// string; rejecting that is up to the pass.
  pub fn from_attribute(
    tree: &SyntaxTree,
    attribute: &NodeId,
    options: &CleanupOptions,
  ) -> Result<Self, DiagnosticMessage> {
    let ASTNode::Attribute(attr) = tree.get(attribute) else {
      return Err(DiagnosticMessage::CleanupNotOnLocal {
        span: tree.get(attribute).span().clone(),
      });
    };

    match attr.args.as_slice() {
      [] => Ok(Self {
        method: options.default_method.clone(),
        span: attr.span.clone(),
      }),
      [ASTAttributeArg::StringLiteral(method, span)] => Ok(Self {
        method: method.clone(),
        span: span.clone(),
      }),
      [ASTAttributeArg::IntLiteral(_, span)] => Err(DiagnosticMessage::CleanupNameNotString { span: span.clone() }),
      args => Err(DiagnosticMessage::CleanupTooManyArguments {
        count: args.len(),
        span: attr.span.clone(),
      }),
    }
  }
}
