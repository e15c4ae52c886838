//! Arena-backed syntax tree with parent links.
//!
//! Nodes never move once allocated; rewrites replace child lists in place and
//! then call [`SyntaxTree::rebuild`] so the parent index matches the new shape.

use std::collections::HashMap;

use autoclean_type::{Store, span::Span};

use crate::{ASTNode, NodeId, statements::ASTStatement};

/// Structural role of a node, derived from where it sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
  Record,
  Field,
  Method,
  Parameter,
  /// A variable declared among statements (block, case arm, method body,
  /// `for` initializer).
  Local,
  Attribute,
  Statement,
  Expression,
}

pub struct SyntaxTree {
  nodes: Store<ASTNode>,
  roots: Vec<NodeId>,
  parents: HashMap<NodeId, NodeId>,
}

impl SyntaxTree {
  pub fn new(
    nodes: Store<ASTNode>,
    roots: Vec<NodeId>,
  ) -> Self {
    let mut tree = Self {
      nodes,
      roots,
      parents: HashMap::new(),
    };

    for root in tree.roots.clone() {
      tree.rebuild(root);
    }

    tree
  }

  pub fn roots(&self) -> &[NodeId] {
    &self.roots
  }

  pub fn nodes(&self) -> &Store<ASTNode> {
    &self.nodes
  }

  pub fn get(
    &self,
    id: &NodeId,
  ) -> &ASTNode {
    self.nodes.get(id)
  }

  pub fn get_mut(
    &mut self,
    id: NodeId,
  ) -> &mut ASTNode {
    self.nodes.get_mut(id)
  }

  /// Allocate a detached node. It gets a parent once an owner references it
  /// and [`SyntaxTree::rebuild`] runs over that owner.
  pub fn alloc(
    &mut self,
    node: ASTNode,
  ) -> NodeId {
    self.nodes.alloc(node)
  }

  /// Direct structural parent.
  pub fn parent(
    &self,
    id: &NodeId,
  ) -> Option<NodeId> {
    self.parents.get(id).copied()
  }

  /// Span of a node that came from user source. Generated nodes carry the
  /// synthetic file and have no location to report against.
  pub fn locate(
    &self,
    id: &NodeId,
  ) -> Option<Span> {
    if !self.nodes.contains(id) {
      return None;
    }

    let span = self.nodes.get(id).span();
    if span.is_synthetic() {
      None
    } else {
      Some(span.clone())
    }
  }

  pub fn kind(
    &self,
    id: &NodeId,
  ) -> NodeKind {
    match self.nodes.get(id) {
      ASTNode::Attribute(_) => NodeKind::Attribute,
      ASTNode::Expression(_) => NodeKind::Expression,
      ASTNode::Statement(ASTStatement::Record(_)) => NodeKind::Record,
      ASTNode::Statement(ASTStatement::Function(_)) => NodeKind::Method,
      ASTNode::Statement(ASTStatement::Variable(_)) => self.variable_kind(id),
      ASTNode::Statement(_) => NodeKind::Statement,
    }
  }

  fn variable_kind(
    &self,
    id: &NodeId,
  ) -> NodeKind {
    let Some(parent) = self.parent(id) else {
      return NodeKind::Field;
    };

    match self.nodes.get(&parent) {
      ASTNode::Statement(ASTStatement::Record(_)) => NodeKind::Field,
      ASTNode::Statement(ASTStatement::Function(func)) if func.parameters.contains(id) => NodeKind::Parameter,
      ASTNode::Statement(ASTStatement::Catch(catch)) if catch.parameter == *id => NodeKind::Parameter,
      _ => NodeKind::Local,
    }
  }

  pub fn is_processed(
    &self,
    attribute: &NodeId,
  ) -> bool {
    matches!(self.nodes.get(attribute), ASTNode::Attribute(attr) if attr.processed)
  }

  /// Idempotent. Non-attribute ids are ignored.
  pub fn mark_processed(
    &mut self,
    attribute: NodeId,
  ) {
    if let ASTNode::Attribute(attr) = self.nodes.get_mut(attribute) {
      attr.processed = true;
    }
  }

  /// Re-link parents for every node reachable from `id`.
  pub fn rebuild(
    &mut self,
    id: NodeId,
  ) {
    let mut stack = vec![id];

    while let Some(current) = stack.pop() {
      for child in self.nodes.get(&current).children() {
        self.parents.insert(child, current);
        stack.push(child);
      }
    }
  }

  /// Every node reachable from the roots, in source order (pre-order).
  pub fn walk(&self) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

    while let Some(current) = stack.pop() {
      order.push(current);
      let children = self.nodes.get(&current).children();
      stack.extend(children.into_iter().rev());
    }

    order
  }
}

#[cfg(test)]
mod tests {
  use autoclean_type::{BytePosition, file::FileId, symbol::SymbolTable};

  use super::*;
  use crate::{
    attribute::ASTAttribute,
    expressions::{ASTExpression, variable::ASTVariableExpression},
    metadata::ASTMetadata,
    statements::{function::ASTFunction, record::ASTRecord, variable::ASTVariable},
    type_::ASTTypeSyntax,
  };

  fn span(n: u32) -> Span {
    Span::new(FileId::new(0), BytePosition(n), BytePosition(n + 1))
  }

  #[test]
  fn classifies_variables_by_parent() {
    let mut symbols = SymbolTable::new();
    let mut nodes = Store::new();

    let param = nodes.alloc(ASTNode::Statement(ASTStatement::Variable(ASTVariable::new(
      symbols.intern("p"),
      ASTTypeSyntax::Named(symbols.intern("int")),
      None,
      vec![],
      ASTMetadata::NONE,
      span(1),
    ))));
    let init = nodes.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariableExpression::new(
      symbols.intern("p"),
      span(2),
    ))));
    let attr = nodes.alloc(ASTNode::Attribute(ASTAttribute::new(symbols.intern("cleanup"), vec![], span(3))));
    let local = nodes.alloc(ASTNode::Statement(ASTStatement::Variable(ASTVariable::new(
      symbols.intern("x"),
      ASTTypeSyntax::Inferred,
      Some(init),
      vec![attr],
      ASTMetadata::NONE,
      span(4),
    ))));
    let method = nodes.alloc(ASTNode::Statement(ASTStatement::Function(ASTFunction::new(
      symbols.intern("run"),
      vec![param],
      ASTTypeSyntax::Void,
      Some(vec![local]),
      ASTMetadata::NONE,
      span(5),
    ))));
    let field = nodes.alloc(ASTNode::Statement(ASTStatement::Variable(ASTVariable::new(
      symbols.intern("f"),
      ASTTypeSyntax::Inferred,
      None,
      vec![],
      ASTMetadata::NONE,
      span(6),
    ))));
    let record = nodes.alloc(ASTNode::Statement(ASTStatement::Record(ASTRecord::new(
      symbols.intern("Holder"),
      vec![field, method],
      span(7),
    ))));

    let tree = SyntaxTree::new(nodes, vec![record]);

    assert_eq!(tree.kind(&param), NodeKind::Parameter);
    assert_eq!(tree.kind(&local), NodeKind::Local);
    assert_eq!(tree.kind(&field), NodeKind::Field);
    assert_eq!(tree.kind(&method), NodeKind::Method);
    assert_eq!(tree.kind(&attr), NodeKind::Attribute);
    assert_eq!(tree.parent(&attr), Some(local));
    assert_eq!(tree.parent(&local), Some(method));
    assert_eq!(tree.walk(), vec![record, field, method, param, local, attr, init]);
  }

  #[test]
  fn synthetic_nodes_are_not_locatable() {
    let mut symbols = SymbolTable::new();
    let mut nodes = Store::new();
    let real = nodes.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariableExpression::new(
      symbols.intern("a"),
      span(10),
    ))));
    let generated = nodes.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariableExpression::new(
      symbols.intern("a"),
      Span::synthetic(),
    ))));
    let tree = SyntaxTree::new(nodes, vec![real, generated]);

    assert_eq!(tree.locate(&real), Some(span(10)));
    assert_eq!(tree.locate(&generated), None);
  }

  #[test]
  fn mark_processed_is_idempotent() {
    let mut symbols = SymbolTable::new();
    let mut nodes = Store::new();
    let attr = nodes.alloc(ASTNode::Attribute(ASTAttribute::new(symbols.intern("cleanup"), vec![], span(0))));
    let mut tree = SyntaxTree::new(nodes, vec![attr]);

    assert!(!tree.is_processed(&attr));
    tree.mark_processed(attr);
    tree.mark_processed(attr);
    assert!(tree.is_processed(&attr));
  }
}
