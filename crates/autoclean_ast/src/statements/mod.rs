use autoclean_type::span::Span;

use crate::{
  NodeId,
  statements::{
    block::ASTBlock, expression_statement::ASTExpressionStatement, for_statement::ASTFor, function::ASTFunction,
    if_statement::ASTIf, record::ASTRecord, return_statement::ASTReturn, switch_statement::{ASTCase, ASTSwitch},
    try_statement::{ASTCatch, ASTTry}, variable::ASTVariable, while_statement::ASTWhile,
  },
};

pub mod block;
pub mod expression_statement;
pub mod for_statement;
pub mod function;
pub mod if_statement;
pub mod record;
pub mod return_statement;
pub mod switch_statement;
pub mod try_statement;
pub mod variable;
pub mod while_statement;

#[derive(Debug, PartialEq, Clone)]
pub enum ASTStatement {
  Expression(ASTExpressionStatement),
  Variable(ASTVariable),
  Function(ASTFunction),
  Record(ASTRecord),
  Block(ASTBlock),
  If(ASTIf),
  While(ASTWhile),
  For(ASTFor),
  Switch(ASTSwitch),
  Case(ASTCase),
  Try(ASTTry),
  Catch(ASTCatch),
  Return(ASTReturn),
}

impl ASTStatement {
  pub fn span(&self) -> &Span {
    match self {
      ASTStatement::Expression(stmt) => &stmt.span,
      ASTStatement::Variable(stmt) => &stmt.span,
      ASTStatement::Function(stmt) => &stmt.span,
      ASTStatement::Record(stmt) => &stmt.span,
      ASTStatement::Block(stmt) => &stmt.span,
      ASTStatement::If(stmt) => &stmt.span,
      ASTStatement::While(stmt) => &stmt.span,
      ASTStatement::For(stmt) => &stmt.span,
      ASTStatement::Switch(stmt) => &stmt.span,
      ASTStatement::Case(stmt) => &stmt.span,
      ASTStatement::Try(stmt) => &stmt.span,
      ASTStatement::Catch(stmt) => &stmt.span,
      ASTStatement::Return(stmt) => &stmt.span,
    }
  }

  pub fn children(&self) -> Vec<NodeId> {
    match self {
      ASTStatement::Expression(stmt) => vec![stmt.expression],
      ASTStatement::Variable(var) => {
        let mut children = var.attributes.clone();
        children.extend(var.value);
        children
      },
      ASTStatement::Function(func) => {
        let mut children = func.parameters.clone();
        if let Some(body) = &func.body {
          children.extend(body.iter().copied());
        }
        children
      },
      ASTStatement::Record(record) => record.items.clone(),
      ASTStatement::Block(block) => block.statements.clone(),
      ASTStatement::If(stmt) => {
        let mut children = vec![stmt.condition, stmt.then_branch];
        children.extend(stmt.else_branch);
        children
      },
      ASTStatement::While(stmt) => vec![stmt.condition, stmt.body],
      ASTStatement::For(stmt) => {
        let mut children = Vec::new();
        children.extend(stmt.init);
        children.extend(stmt.condition);
        children.extend(stmt.update);
        children.push(stmt.body);
        children
      },
      ASTStatement::Switch(stmt) => {
        let mut children = vec![stmt.selector];
        children.extend(stmt.cases.iter().copied());
        children
      },
      ASTStatement::Case(case) => {
        let mut children = Vec::new();
        children.extend(case.label);
        children.extend(case.statements.iter().copied());
        children
      },
      ASTStatement::Try(stmt) => {
        let mut children = vec![stmt.body];
        children.extend(stmt.catches.iter().copied());
        children.extend(stmt.finalizer);
        children
      },
      ASTStatement::Catch(catch) => vec![catch.parameter, catch.body],
      ASTStatement::Return(stmt) => stmt.expression.into_iter().collect(),
    }
  }
}
