use autoclean_type::{span::Span, symbol::SymbolId};

use crate::{
  ASTNode, NodeId,
  expressions::{
    ASTExpression,
    binary::{ASTBinary, ASTBinaryOperator},
    call::ASTCallExpression,
    literal::{ASTLiteral, ASTLiteralValue},
    member_access::ASTMemberAccess,
    variable::ASTVariableExpression,
  },
  statements::{
    ASTStatement, block::ASTBlock, expression_statement::ASTExpressionStatement, if_statement::ASTIf,
    try_statement::ASTTry,
  },
  tree::SyntaxTree,
};

/// Factory for compiler-generated nodes.
///
/// Everything built here carries [`Span::synthetic`], so diagnostics never
/// anchor on generated code. Nodes are allocated detached; the caller splices
/// them into an owner and rebuilds parent links.
pub struct TreeMaker<'a> {
  tree: &'a mut SyntaxTree,
}

impl<'a> TreeMaker<'a> {
  pub fn new(tree: &'a mut SyntaxTree) -> Self {
    Self { tree }
  }

  fn expression(
    &mut self,
    expr: ASTExpression,
  ) -> NodeId {
    self.tree.alloc(ASTNode::Expression(expr))
  }

  fn statement(
    &mut self,
    stmt: ASTStatement,
  ) -> NodeId {
    self.tree.alloc(ASTNode::Statement(stmt))
  }

  pub fn ident(
    &mut self,
    name: SymbolId,
  ) -> NodeId {
    self.expression(ASTExpression::Variable(ASTVariableExpression::new(name, Span::synthetic())))
  }

  /// `object.member`
  pub fn select(
    &mut self,
    object: NodeId,
    member: SymbolId,
  ) -> NodeId {
    self.expression(ASTExpression::MemberAccess(ASTMemberAccess::new(object, member, Span::synthetic())))
  }

  /// Builds `a.b.c` from `[a, b, c]`.
  ///
  /// # Panics
  /// Panics if `segments` is empty.
  pub fn chain_dots(
    &mut self,
    segments: &[SymbolId],
  ) -> NodeId {
    let (first, rest) = segments.split_first().expect("chain_dots needs at least one segment");
    let mut expr = self.ident(*first);

    for segment in rest {
      expr = self.select(expr, *segment);
    }

    expr
  }

  pub fn call(
    &mut self,
    callee: NodeId,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    self.expression(ASTExpression::Call(ASTCallExpression::new(callee, arguments, Span::synthetic())))
  }

  pub fn binary(
    &mut self,
    left: NodeId,
    operator: ASTBinaryOperator,
    right: NodeId,
  ) -> NodeId {
    self.expression(ASTExpression::Binary(ASTBinary::new(left, operator, right, Span::synthetic())))
  }

  pub fn literal(
    &mut self,
    value: ASTLiteralValue,
  ) -> NodeId {
    self.expression(ASTExpression::Literal(ASTLiteral::new(value, Span::synthetic())))
  }

  /// Expression statement.
  pub fn exec(
    &mut self,
    expression: NodeId,
  ) -> NodeId {
    self.statement(ASTStatement::Expression(ASTExpressionStatement::new(expression, Span::synthetic())))
  }

  pub fn block(
    &mut self,
    statements: Vec<NodeId>,
  ) -> NodeId {
    self.statement(ASTStatement::Block(ASTBlock::new(statements, Span::synthetic())))
  }

  pub fn if_(
    &mut self,
    condition: NodeId,
    then_branch: NodeId,
    else_branch: Option<NodeId>,
  ) -> NodeId {
    self.statement(ASTStatement::If(ASTIf::new(condition, then_branch, else_branch, Span::synthetic())))
  }

  pub fn try_(
    &mut self,
    body: NodeId,
    catches: Vec<NodeId>,
    finalizer: Option<NodeId>,
  ) -> NodeId {
    self.statement(ASTStatement::Try(ASTTry::new(body, catches, finalizer, Span::synthetic())))
  }
}
