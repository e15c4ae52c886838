#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use autoclean_ast::{
  ASTNode, NodeId,
  attribute::{ASTAttribute, ASTAttributeArg},
  display::format_tree,
  expressions::{
    ASTExpression,
    assignment::{ASTAssignment, ASTAssignmentOperator},
    call::ASTCallExpression,
    cast::ASTCast,
    literal::{ASTLiteral, ASTLiteralValue},
    member_access::ASTMemberAccess,
    variable::ASTVariableExpression,
  },
  metadata::ASTMetadata,
  statements::{
    ASTStatement,
    block::ASTBlock,
    expression_statement::ASTExpressionStatement,
    for_statement::ASTFor,
    function::ASTFunction,
    record::ASTRecord,
    switch_statement::{ASTCase, ASTSwitch},
    variable::ASTVariable,
  },
  tree::SyntaxTree,
  type_::ASTTypeSyntax,
};
use autoclean_cleanup::{CleanupHandler, CleanupOutcome};
use autoclean_config::{AutocleanConfig, CleanupOptions};
use autoclean_diagnostics::diagnostic_report::Diagnostic;
use autoclean_type::{BytePosition, Store, file::FileId, span::Span, symbol::SymbolTable};

/// Hand-builds trees with distinct real spans for every node.
pub struct TreeBuilder {
  pub nodes: Store<ASTNode>,
  pub symbols: Rc<RefCell<SymbolTable>>,
  offset: u32,
}

impl TreeBuilder {
  pub fn new() -> Self {
    Self {
      nodes: Store::new(),
      symbols: Rc::new(RefCell::new(SymbolTable::new())),
      offset: 0,
    }
  }

  pub fn span(&mut self) -> Span {
    self.offset += 2;
    Span::new(FileId::new(0), BytePosition(self.offset), BytePosition(self.offset + 1))
  }

  fn expr(
    &mut self,
    expr: ASTExpression,
  ) -> NodeId {
    self.nodes.alloc(ASTNode::Expression(expr))
  }

  fn stmt(
    &mut self,
    stmt: ASTStatement,
  ) -> NodeId {
    self.nodes.alloc(ASTNode::Statement(stmt))
  }

  pub fn ident(
    &mut self,
    name: &str,
  ) -> NodeId {
    let name = self.symbols.borrow_mut().intern(name);
    let span = self.span();
    self.expr(ASTExpression::Variable(ASTVariableExpression::new(name, span)))
  }

  pub fn call(
    &mut self,
    callee: &str,
    arguments: Vec<NodeId>,
  ) -> NodeId {
    let callee = self.ident(callee);
    let span = self.span();
    self.expr(ASTExpression::Call(ASTCallExpression::new(callee, arguments, span)))
  }

  /// `receiver.method()`
  pub fn method_call(
    &mut self,
    receiver: &str,
    method: &str,
  ) -> NodeId {
    let object = self.ident(receiver);
    let member = self.symbols.borrow_mut().intern(method);
    let span = self.span();
    let callee = self.expr(ASTExpression::MemberAccess(ASTMemberAccess::new(object, member, span)));
    let span = self.span();
    self.expr(ASTExpression::Call(ASTCallExpression::new(callee, vec![], span)))
  }

  pub fn assign(
    &mut self,
    target: &str,
    value: NodeId,
  ) -> NodeId {
    self.assign_op(target, ASTAssignmentOperator::Assign, value)
  }

  /// `target op value`, e.g. `log += handle`.
  pub fn assign_op(
    &mut self,
    target: &str,
    operator: ASTAssignmentOperator,
    value: NodeId,
  ) -> NodeId {
    let target = self.ident(target);
    let span = self.span();
    self.expr(ASTExpression::Assignment(ASTAssignment::new(target, value, operator, span)))
  }

  pub fn cast(
    &mut self,
    ty: &str,
    expression: NodeId,
  ) -> NodeId {
    let ty = ASTTypeSyntax::Named(self.symbols.borrow_mut().intern(ty));
    let span = self.span();
    self.expr(ASTExpression::Cast(ASTCast::new(span, ty, expression)))
  }

  pub fn int(
    &mut self,
    value: i64,
  ) -> NodeId {
    let span = self.span();
    self.expr(ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Int(value), span)))
  }

  pub fn exec(
    &mut self,
    expression: NodeId,
  ) -> NodeId {
    let span = self.span();
    self.stmt(ASTStatement::Expression(ASTExpressionStatement::new(expression, span)))
  }

  /// `callee(arg);`
  pub fn call_stmt(
    &mut self,
    callee: &str,
    arg: &str,
  ) -> NodeId {
    let arg = self.ident(arg);
    let call = self.call(callee, vec![arg]);
    self.exec(call)
  }

  pub fn cleanup(
    &mut self,
    args: Vec<ASTAttributeArg>,
  ) -> NodeId {
    let name = self.symbols.borrow_mut().intern("cleanup");
    let span = self.span();
    self.nodes.alloc(ASTNode::Attribute(ASTAttribute::new(name, args, span)))
  }

  pub fn string_arg(
    &mut self,
    value: &str,
  ) -> ASTAttributeArg {
    ASTAttributeArg::StringLiteral(value.to_string(), self.span())
  }

  pub fn int_arg(
    &mut self,
    value: i64,
  ) -> ASTAttributeArg {
    ASTAttributeArg::IntLiteral(value, self.span())
  }

  pub fn local(
    &mut self,
    ty: &str,
    name: &str,
    value: Option<NodeId>,
    attributes: Vec<NodeId>,
  ) -> NodeId {
    let name = self.symbols.borrow_mut().intern(name);
    let ty = ASTTypeSyntax::Named(self.symbols.borrow_mut().intern(ty));
    let span = self.span();
    self.stmt(ASTStatement::Variable(ASTVariable::new(
      name,
      ty,
      value,
      attributes,
      ASTMetadata::NONE,
      span,
    )))
  }

  /// `@cleanup(<method>) <ty> <name> = <init>();`, returning `(attribute, declaration)`.
  pub fn cleanup_local(
    &mut self,
    ty: &str,
    name: &str,
    method: Option<&str>,
    init: &str,
  ) -> (NodeId, NodeId) {
    let args = match method {
      Some(method) => vec![self.string_arg(method)],
      None => vec![],
    };
    let attr = self.cleanup(args);
    let value = self.call(init, vec![]);
    let decl = self.local(ty, name, Some(value), vec![attr]);
    (attr, decl)
  }

  pub fn block(
    &mut self,
    statements: Vec<NodeId>,
  ) -> NodeId {
    let span = self.span();
    self.stmt(ASTStatement::Block(ASTBlock::new(statements, span)))
  }

  pub fn method(
    &mut self,
    name: &str,
    parameters: Vec<NodeId>,
    body: Vec<NodeId>,
  ) -> NodeId {
    let name = self.symbols.borrow_mut().intern(name);
    let span = self.span();
    self.stmt(ASTStatement::Function(ASTFunction::new(
      name,
      parameters,
      ASTTypeSyntax::Void,
      Some(body),
      ASTMetadata::NONE,
      span,
    )))
  }

  pub fn record(
    &mut self,
    name: &str,
    items: Vec<NodeId>,
  ) -> NodeId {
    let name = self.symbols.borrow_mut().intern(name);
    let span = self.span();
    self.stmt(ASTStatement::Record(ASTRecord::new(name, items, span)))
  }

  pub fn case(
    &mut self,
    label: Option<NodeId>,
    statements: Vec<NodeId>,
  ) -> NodeId {
    let span = self.span();
    self.stmt(ASTStatement::Case(ASTCase::new(label, statements, span)))
  }

  pub fn switch(
    &mut self,
    selector: &str,
    cases: Vec<NodeId>,
  ) -> NodeId {
    let selector = self.ident(selector);
    let span = self.span();
    self.stmt(ASTStatement::Switch(ASTSwitch::new(selector, cases, span)))
  }

  pub fn for_loop(
    &mut self,
    init: Option<NodeId>,
    body: NodeId,
  ) -> NodeId {
    let span = self.span();
    self.stmt(ASTStatement::For(ASTFor::new(init, None, None, body, span)))
  }

  pub fn finish(
    self,
    roots: Vec<NodeId>,
  ) -> (SyntaxTree, Rc<RefCell<SymbolTable>>) {
    (SyntaxTree::new(self.nodes, roots), self.symbols)
  }
}

pub struct Expansion {
  pub outcome: CleanupOutcome,
  pub diagnostics: Vec<Diagnostic>,
}

pub fn expand_with(
  tree: &mut SyntaxTree,
  symbols: &Rc<RefCell<SymbolTable>>,
  attribute: NodeId,
  options: CleanupOptions,
) -> Expansion {
  let mut config = AutocleanConfig::silent();
  config.cleanup = options;

  let mut handler = CleanupHandler::new(tree, symbols.clone(), &config);
  let outcome = handler.expand(attribute);

  Expansion {
    outcome,
    diagnostics: handler.into_diagnostics(),
  }
}

pub fn expand(
  tree: &mut SyntaxTree,
  symbols: &Rc<RefCell<SymbolTable>>,
  attribute: NodeId,
) -> Expansion {
  expand_with(tree, symbols, attribute, CleanupOptions::default())
}

pub fn render(
  tree: &SyntaxTree,
  symbols: &Rc<RefCell<SymbolTable>>,
) -> String {
  format_tree(tree, &symbols.borrow())
}

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
  diagnostics.iter().map(|d| d.error_code.as_str()).collect()
}
