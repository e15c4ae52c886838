//! Construction of the generated cleanup code.
//!
//! The guard wraps the variable in a call to the configured barrier before
//! comparing it with `null`:
//!
//! ```text
//! if (autoclean.Runtime.preventNullAnalysis(handle) != null) {
//!   handle.close();
//! }
//! ```
//!
//! The barrier is an identity function. Its only contract is that code after
//! it must not assume the value is non-null, which keeps a downstream flow
//! analysis from folding the guard away based on the initializer. Without a
//! barrier the guard compares the variable directly.

use autoclean_ast::{
  NodeId,
  expressions::{binary::ASTBinaryOperator, literal::ASTLiteralValue},
  maker::TreeMaker,
  tree::SyntaxTree,
};
use autoclean_type::symbol::SymbolId;

/// `if (<barrier>(name) != null) { name.<method>(); }`
///
/// `barrier` holds the interned segments of the dotted barrier path and must
/// not be empty when present.
pub fn build_cleanup_guard(
  tree: &mut SyntaxTree,
  name: SymbolId,
  method: SymbolId,
  barrier: Option<&[SymbolId]>,
) -> NodeId {
  let mut maker = TreeMaker::new(tree);

  let receiver = maker.ident(name);
  let selector = maker.select(receiver, method);
  let call = maker.call(selector, Vec::new());
  let cleanup = maker.exec(call);
  let then_branch = maker.block(vec![cleanup]);

  let checked = match barrier {
    Some(segments) => {
      let callee = maker.chain_dots(segments);
      let argument = maker.ident(name);
      maker.call(callee, vec![argument])
    },
    None => maker.ident(name),
  };
  let null = maker.literal(ASTLiteralValue::Null);
  let condition = maker.binary(checked, ASTBinaryOperator::NotEqual, null);

  maker.if_(condition, then_branch, None)
}

/// `try { <tail> } finally { <guard> }`. The tail ids are moved, not copied.
pub fn build_try_finally(
  tree: &mut SyntaxTree,
  tail: Vec<NodeId>,
  guard: NodeId,
) -> NodeId {
  let mut maker = TreeMaker::new(tree);

  let body = maker.block(tail);
  let finalizer = maker.block(vec![guard]);

  maker.try_(body, Vec::new(), Some(finalizer))
}
