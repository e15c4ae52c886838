//! JSON fixture format and its lowering into the arena tree.
//!
//! A fixture is what a front end would hand over after parsing: a list of
//! top-level items, each tagged by `kind`.
//!
//! ```json
//! { "items": [
//!   { "kind": "method", "name": "main", "body": [
//!     { "kind": "var", "type": "Handle", "name": "handle",
//!       "attributes": [{ "name": "cleanup", "args": ["release"] }],
//!       "value": { "kind": "call", "callee": { "kind": "name", "name": "open" } } },
//!     { "kind": "expr", "expr": { "kind": "call",
//!       "callee": { "kind": "name", "name": "use" },
//!       "args": [{ "kind": "name", "name": "handle" }] } }
//!   ] }
//! ] }
//! ```
//!
//! Every lowered node gets a one-byte span at a fresh offset, in source order,
//! so diagnostics can point at individual nodes.

use std::{cell::RefCell, rc::Rc};

use autoclean_ast::{
  ASTNode, NodeId,
  attribute::{ASTAttribute, ASTAttributeArg},
  expressions::{
    ASTExpression,
    assignment::{ASTAssignment, ASTAssignmentOperator},
    binary::{ASTBinary, ASTBinaryOperator},
    call::ASTCallExpression,
    cast::ASTCast,
    grouped::ASTGrouped,
    literal::{ASTLiteral, ASTLiteralValue},
    member_access::ASTMemberAccess,
    unary::{ASTUnary, UnaryOperator},
    variable::ASTVariableExpression,
  },
  metadata::ASTMetadata,
  statements::{
    ASTStatement,
    block::ASTBlock,
    expression_statement::ASTExpressionStatement,
    for_statement::ASTFor,
    function::ASTFunction,
    if_statement::ASTIf,
    record::ASTRecord,
    return_statement::ASTReturn,
    switch_statement::{ASTCase, ASTSwitch},
    try_statement::{ASTCatch, ASTTry},
    variable::ASTVariable,
    while_statement::ASTWhile,
  },
  type_::ASTTypeSyntax,
};
use autoclean_type::{BytePosition, Store, file::FileId, span::Span, symbol::SymbolTable};
use serde::{Deserialize, Serialize};

use crate::error::DriverError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
  pub items: Vec<FixtureStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureStatement {
  Record {
    name: String,
    #[serde(default)]
    items: Vec<FixtureStatement>,
  },
  Method {
    name: String,
    #[serde(default)]
    params: Vec<FixtureParam>,
    #[serde(default, rename = "returns")]
    return_type: Option<String>,
    /// `None` for abstract methods.
    #[serde(default)]
    body: Option<Vec<FixtureStatement>>,
    #[serde(default)]
    modifiers: Vec<String>,
  },
  Var {
    name: String,
    #[serde(default, rename = "type")]
    type_: Option<String>,
    #[serde(default)]
    value: Option<FixtureExpression>,
    #[serde(default)]
    attributes: Vec<FixtureAttribute>,
    #[serde(default)]
    modifiers: Vec<String>,
  },
  Expr {
    expr: FixtureExpression,
  },
  Block {
    body: Vec<FixtureStatement>,
  },
  If {
    cond: FixtureExpression,
    then: Box<FixtureStatement>,
    #[serde(default, rename = "else")]
    else_: Option<Box<FixtureStatement>>,
  },
  While {
    cond: FixtureExpression,
    body: Box<FixtureStatement>,
  },
  For {
    #[serde(default)]
    init: Option<Box<FixtureStatement>>,
    #[serde(default)]
    cond: Option<FixtureExpression>,
    #[serde(default)]
    update: Option<FixtureExpression>,
    body: Box<FixtureStatement>,
  },
  Switch {
    selector: FixtureExpression,
    cases: Vec<FixtureCase>,
  },
  Try {
    body: Vec<FixtureStatement>,
    #[serde(default)]
    catches: Vec<FixtureCatch>,
    #[serde(default)]
    finally: Option<Vec<FixtureStatement>>,
  },
  Return {
    #[serde(default)]
    value: Option<FixtureExpression>,
  },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureParam {
  pub name: String,
  #[serde(rename = "type")]
  pub type_: String,
  #[serde(default)]
  pub attributes: Vec<FixtureAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
  /// `None` is the `default:` arm.
  #[serde(default)]
  pub label: Option<FixtureExpression>,
  pub body: Vec<FixtureStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCatch {
  pub param: FixtureParam,
  pub body: Vec<FixtureStatement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureAttribute {
  pub name: String,
  #[serde(default)]
  pub args: Vec<FixtureArg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureArg {
  Int(i64),
  Str(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureExpression {
  Name {
    name: String,
  },
  Null,
  Bool {
    value: bool,
  },
  Int {
    value: i64,
  },
  Str {
    value: String,
  },
  Call {
    callee: Box<FixtureExpression>,
    #[serde(default)]
    args: Vec<FixtureExpression>,
  },
  Member {
    object: Box<FixtureExpression>,
    member: String,
  },
  Assign {
    target: Box<FixtureExpression>,
    value: Box<FixtureExpression>,
    #[serde(default = "default_assign_op")]
    op: String,
  },
  Binary {
    left: Box<FixtureExpression>,
    op: String,
    right: Box<FixtureExpression>,
  },
  Unary {
    op: String,
    operand: Box<FixtureExpression>,
  },
  Cast {
    #[serde(rename = "type")]
    type_: String,
    expr: Box<FixtureExpression>,
  },
  Group {
    expr: Box<FixtureExpression>,
  },
}

fn default_assign_op() -> String {
  "=".to_string()
}

/// Builds arena nodes from a parsed [`Fixture`].
pub struct FixtureLowering {
  nodes: Store<ASTNode>,
  symbols: Rc<RefCell<SymbolTable>>,
  file: FileId,
  offset: u32,
}

impl FixtureLowering {
  pub fn new(
    symbols: Rc<RefCell<SymbolTable>>,
    file: FileId,
  ) -> Self {
    Self {
      nodes: Store::new(),
      symbols,
      file,
      offset: 0,
    }
  }

  /// Consumes the lowering and returns the arena and its roots.
  pub fn lower(
    mut self,
    fixture: &Fixture,
  ) -> Result<(Store<ASTNode>, Vec<NodeId>), DriverError> {
    let roots = self.statements(&fixture.items)?;
    Ok((self.nodes, roots))
  }

  fn next_span(&mut self) -> Span {
    let start = self.offset;
    self.offset += 1;
    Span::new(self.file, BytePosition(start), BytePosition(start + 1))
  }

  fn intern(
    &self,
    name: &str,
  ) -> autoclean_type::symbol::SymbolId {
    self.symbols.borrow_mut().intern(name)
  }

  fn statement_node(
    &mut self,
    stmt: ASTStatement,
  ) -> NodeId {
    self.nodes.alloc(ASTNode::Statement(stmt))
  }

  fn expression_node(
    &mut self,
    expr: ASTExpression,
  ) -> NodeId {
    self.nodes.alloc(ASTNode::Expression(expr))
  }

  fn type_syntax(
    &self,
    name: Option<&str>,
  ) -> ASTTypeSyntax {
    match name {
      None | Some("var") => ASTTypeSyntax::Inferred,
      Some("void") => ASTTypeSyntax::Void,
      Some(name) => ASTTypeSyntax::Named(self.intern(name)),
    }
  }

  fn metadata(modifiers: &[String]) -> Result<ASTMetadata, DriverError> {
    let mut metadata = ASTMetadata::NONE;

    for keyword in modifiers {
      let flag = ASTMetadata::from_keyword(keyword)
        .ok_or_else(|| DriverError::Fixture(format!("unknown modifier '{}'", keyword)))?;
      metadata |= flag;
    }

    Ok(metadata)
  }

  fn statements(
    &mut self,
    statements: &[FixtureStatement],
  ) -> Result<Vec<NodeId>, DriverError> {
    statements.iter().map(|stmt| self.statement(stmt)).collect()
  }

  fn block(
    &mut self,
    statements: &[FixtureStatement],
  ) -> Result<NodeId, DriverError> {
    let span = self.next_span();
    let statements = self.statements(statements)?;
    Ok(self.statement_node(ASTStatement::Block(ASTBlock::new(statements, span))))
  }

  fn attributes(
    &mut self,
    attributes: &[FixtureAttribute],
  ) -> Vec<NodeId> {
    attributes
      .iter()
      .map(|attr| {
        let span = self.next_span();
        let args = attr
          .args
          .iter()
          .map(|arg| match arg {
            FixtureArg::Int(value) => ASTAttributeArg::IntLiteral(*value, self.next_span()),
            FixtureArg::Str(value) => ASTAttributeArg::StringLiteral(value.clone(), self.next_span()),
          })
          .collect();
        let name = self.intern(&attr.name);
        self.nodes.alloc(ASTNode::Attribute(ASTAttribute::new(name, args, span)))
      })
      .collect()
  }

  fn param(
    &mut self,
    param: &FixtureParam,
  ) -> NodeId {
    let span = self.next_span();
    let attributes = self.attributes(&param.attributes);
    let name = self.intern(&param.name);
    let type_ = self.type_syntax(Some(&param.type_));

    self.statement_node(ASTStatement::Variable(ASTVariable::new(
      name,
      type_,
      None,
      attributes,
      ASTMetadata::NONE,
      span,
    )))
  }

  fn statement(
    &mut self,
    stmt: &FixtureStatement,
  ) -> Result<NodeId, DriverError> {
    let span = self.next_span();

    let lowered = match stmt {
      FixtureStatement::Record { name, items } => {
        let items = self.statements(items)?;
        ASTStatement::Record(ASTRecord::new(self.intern(name), items, span))
      },
      FixtureStatement::Method {
        name,
        params,
        return_type,
        body,
        modifiers,
      } => {
        let parameters = params.iter().map(|param| self.param(param)).collect();
        let body = match body {
          Some(body) => Some(self.statements(body)?),
          None => None,
        };
        let return_type = match return_type {
          Some(name) => self.type_syntax(Some(name)),
          None => ASTTypeSyntax::Void,
        };

        ASTStatement::Function(ASTFunction::new(
          self.intern(name),
          parameters,
          return_type,
          body,
          Self::metadata(modifiers)?,
          span,
        ))
      },
      FixtureStatement::Var {
        name,
        type_,
        value,
        attributes,
        modifiers,
      } => {
        let attributes = self.attributes(attributes);
        let value = match value {
          Some(value) => Some(self.expression(value)?),
          None => None,
        };

        ASTStatement::Variable(ASTVariable::new(
          self.intern(name),
          self.type_syntax(type_.as_deref()),
          value,
          attributes,
          Self::metadata(modifiers)?,
          span,
        ))
      },
      FixtureStatement::Expr { expr } => {
        let expression = self.expression(expr)?;
        ASTStatement::Expression(ASTExpressionStatement::new(expression, span))
      },
      FixtureStatement::Block { body } => {
        let statements = self.statements(body)?;
        ASTStatement::Block(ASTBlock::new(statements, span))
      },
      FixtureStatement::If { cond, then, else_ } => {
        let condition = self.expression(cond)?;
        let then_branch = self.statement(then)?;
        let else_branch = match else_ {
          Some(else_) => Some(self.statement(else_)?),
          None => None,
        };
        ASTStatement::If(ASTIf::new(condition, then_branch, else_branch, span))
      },
      FixtureStatement::While { cond, body } => {
        let condition = self.expression(cond)?;
        let body = self.statement(body)?;
        ASTStatement::While(ASTWhile::new(condition, body, span))
      },
      FixtureStatement::For {
        init,
        cond,
        update,
        body,
      } => {
        let init = match init {
          Some(init) => Some(self.statement(init)?),
          None => None,
        };
        let condition = match cond {
          Some(cond) => Some(self.expression(cond)?),
          None => None,
        };
        let update = match update {
          Some(update) => Some(self.expression(update)?),
          None => None,
        };
        let body = self.statement(body)?;
        ASTStatement::For(ASTFor::new(init, condition, update, body, span))
      },
      FixtureStatement::Switch { selector, cases } => {
        let selector = self.expression(selector)?;
        let mut arms = Vec::with_capacity(cases.len());

        for case in cases {
          let case_span = self.next_span();
          let label = match &case.label {
            Some(label) => Some(self.expression(label)?),
            None => None,
          };
          let statements = self.statements(&case.body)?;
          arms.push(self.statement_node(ASTStatement::Case(ASTCase::new(label, statements, case_span))));
        }

        ASTStatement::Switch(ASTSwitch::new(selector, arms, span))
      },
      FixtureStatement::Try { body, catches, finally } => {
        let body = self.block(body)?;
        let mut clauses = Vec::with_capacity(catches.len());

        for catch in catches {
          let catch_span = self.next_span();
          let parameter = self.param(&catch.param);
          let catch_body = self.block(&catch.body)?;
          clauses.push(self.statement_node(ASTStatement::Catch(ASTCatch::new(parameter, catch_body, catch_span))));
        }

        let finalizer = match finally {
          Some(finally) => Some(self.block(finally)?),
          None => None,
        };

        ASTStatement::Try(ASTTry::new(body, clauses, finalizer, span))
      },
      FixtureStatement::Return { value } => {
        let expression = match value {
          Some(value) => Some(self.expression(value)?),
          None => None,
        };
        ASTStatement::Return(ASTReturn::new(expression, span))
      },
    };

    Ok(self.statement_node(lowered))
  }

  fn expression(
    &mut self,
    expr: &FixtureExpression,
  ) -> Result<NodeId, DriverError> {
    let span = self.next_span();

    let lowered = match expr {
      FixtureExpression::Name { name } => ASTExpression::Variable(ASTVariableExpression::new(self.intern(name), span)),
      FixtureExpression::Null => ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Null, span)),
      FixtureExpression::Bool { value } => ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Boolean(*value), span)),
      FixtureExpression::Int { value } => ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::Int(*value), span)),
      FixtureExpression::Str { value } => {
        ASTExpression::Literal(ASTLiteral::new(ASTLiteralValue::String(value.clone()), span))
      },
      FixtureExpression::Call { callee, args } => {
        let callee = self.expression(callee)?;
        let arguments = args
          .iter()
          .map(|arg| self.expression(arg))
          .collect::<Result<Vec<_>, _>>()?;
        ASTExpression::Call(ASTCallExpression::new(callee, arguments, span))
      },
      FixtureExpression::Member { object, member } => {
        let object = self.expression(object)?;
        ASTExpression::MemberAccess(ASTMemberAccess::new(object, self.intern(member), span))
      },
      FixtureExpression::Assign { target, value, op } => {
        let operator = match op.as_str() {
          "=" => ASTAssignmentOperator::Assign,
          "+=" => ASTAssignmentOperator::AddAssign,
          "-=" => ASTAssignmentOperator::SubAssign,
          "*=" => ASTAssignmentOperator::MulAssign,
          "/=" => ASTAssignmentOperator::DivAssign,
          other => return Err(DriverError::Fixture(format!("unknown assignment operator '{}'", other))),
        };
        let target = self.expression(target)?;
        let value = self.expression(value)?;
        ASTExpression::Assignment(ASTAssignment::new(target, value, operator, span))
      },
      FixtureExpression::Binary { left, op, right } => {
        let operator = ASTBinaryOperator::from_symbol(op)
          .ok_or_else(|| DriverError::Fixture(format!("unknown binary operator '{}'", op)))?;
        let left = self.expression(left)?;
        let right = self.expression(right)?;
        ASTExpression::Binary(ASTBinary::new(left, operator, right, span))
      },
      FixtureExpression::Unary { op, operand } => {
        let operator = match op.as_str() {
          "!" => UnaryOperator::Not,
          "-" => UnaryOperator::Negate,
          other => return Err(DriverError::Fixture(format!("unknown unary operator '{}'", other))),
        };
        let operand = self.expression(operand)?;
        ASTExpression::Unary(ASTUnary::new(operator, operand, span))
      },
      FixtureExpression::Cast { type_, expr } => {
        let target_type = self.type_syntax(Some(type_));
        let expression = self.expression(expr)?;
        ASTExpression::Cast(ASTCast::new(span, target_type, expression))
      },
      FixtureExpression::Group { expr } => {
        let expression = self.expression(expr)?;
        ASTExpression::Grouped(ASTGrouped::new(expression, span))
      },
    };

    Ok(self.expression_node(lowered))
  }
}
