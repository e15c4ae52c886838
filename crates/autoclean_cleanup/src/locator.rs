use autoclean_ast::{
  ASTNode, NodeId,
  statements::{ASTStatement, function::ASTFunction},
  tree::SyntaxTree,
};

/// A construct that directly owns a statement list a `@cleanup` local can
/// live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
  Block(NodeId),
  CaseArm(NodeId),
  MethodBody(NodeId),
}

impl Container {
  pub fn classify(
    tree: &SyntaxTree,
    node: NodeId,
  ) -> Option<Self> {
    match tree.get(&node) {
      ASTNode::Statement(ASTStatement::Block(_)) => Some(Container::Block(node)),
      ASTNode::Statement(ASTStatement::Case(_)) => Some(Container::CaseArm(node)),
      ASTNode::Statement(ASTStatement::Function(func)) if func.body.is_some() => Some(Container::MethodBody(node)),
      _ => None,
    }
  }

  pub fn node(&self) -> NodeId {
    match self {
      Container::Block(id) | Container::CaseArm(id) | Container::MethodBody(id) => *id,
    }
  }

  pub fn statements<'t>(
    &self,
    tree: &'t SyntaxTree,
  ) -> &'t [NodeId] {
    match (self, tree.get(&self.node())) {
      (Container::Block(_), ASTNode::Statement(ASTStatement::Block(block))) => block.statements.as_slice(),
      (Container::CaseArm(_), ASTNode::Statement(ASTStatement::Case(case))) => case.statements.as_slice(),
      (
        Container::MethodBody(_),
        ASTNode::Statement(ASTStatement::Function(ASTFunction { body: Some(body), .. })),
      ) => body.as_slice(),
      _ => unreachable!("{:?} no longer matches the node it was classified from", self),
    }
  }

  /// Overwrites the owned list. Parent links are stale until the caller
  /// rebuilds from [`Container::node`].
  pub fn replace_statements(
    &self,
    tree: &mut SyntaxTree,
    statements: Vec<NodeId>,
  ) {
    match (self, tree.get_mut(self.node())) {
      (Container::Block(_), ASTNode::Statement(ASTStatement::Block(block))) => block.statements = statements,
      (Container::CaseArm(_), ASTNode::Statement(ASTStatement::Case(case))) => case.statements = statements,
      (
        Container::MethodBody(_),
        ASTNode::Statement(ASTStatement::Function(ASTFunction { body: Some(body), .. })),
      ) => *body = statements,
      _ => unreachable!("{:?} no longer matches the node it was classified from", self),
    }
  }
}

/// The container directly owning `declaration`, if its parent is one.
pub fn locate_sequence(
  tree: &SyntaxTree,
  declaration: &NodeId,
) -> Option<Container> {
  tree.parent(declaration).and_then(|parent| Container::classify(tree, parent))
}
