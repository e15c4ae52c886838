use autoclean_ast::NodeId;

/// A statement list cut right after the cleanup declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSequence {
  /// Everything up to and including the declaration.
  pub prefix: Vec<NodeId>,
  /// Everything after the declaration, in original order.
  pub tail: Vec<NodeId>,
}

/// Splits `statements` at `declaration`, matched by node identity.
///
/// Returns `None` when the declaration is not in the list.
pub fn split_at_declaration(
  statements: &[NodeId],
  declaration: NodeId,
) -> Option<SplitSequence> {
  let position = statements.iter().position(|stmt| *stmt == declaration)?;
  let (prefix, tail) = statements.split_at(position + 1);

  Some(SplitSequence {
    prefix: prefix.to_vec(),
    tail: tail.to_vec(),
  })
}

#[cfg(test)]
mod tests {
  use autoclean_type::Id;

  use super::*;

  fn ids(range: std::ops::Range<u32>) -> Vec<NodeId> {
    range.map(Id::new).collect()
  }

  #[test]
  fn splits_after_the_declaration() {
    let statements = ids(0..5);
    let split = split_at_declaration(&statements, Id::new(1)).unwrap();

    assert_eq!(split.prefix, ids(0..2));
    assert_eq!(split.tail, ids(2..5));
  }

  #[test]
  fn declaration_last_leaves_empty_tail() {
    let statements = ids(0..3);
    let split = split_at_declaration(&statements, Id::new(2)).unwrap();

    assert_eq!(split.prefix, statements);
    assert!(split.tail.is_empty());
  }

  #[test]
  fn missing_declaration_is_none() {
    assert_eq!(split_at_declaration(&ids(0..3), Id::new(8)), None);
  }
}
