use std::{collections::HashMap, path::PathBuf};

use crate::{Id, Store};

pub type FileId = Id<SourceFile>;

impl FileId {
  /// Sentinel FileId for compiler-generated nodes.
  /// Uses u32::MAX to never collide with real file indices (which start at 0).
  pub const SYNTHETIC: FileId = FileId::new(u32::MAX);
}

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceFile {
  pub path: PathBuf,
}

impl std::fmt::Display for Id<SourceFile> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    if *self == FileId::SYNTHETIC {
      write!(f, "(file id: synthetic)")
    } else {
      write!(f, "(file id: {})", self.index())
    }
  }
}

pub struct SourceMap {
  files: Store<SourceFile>,
  by_path: HashMap<PathBuf, FileId>,
}

impl Default for SourceMap {
  fn default() -> Self {
    Self::new()
  }
}

impl SourceMap {
  pub fn new() -> Self {
    Self {
      files: Store::new(),
      by_path: HashMap::new(),
    }
  }

  pub fn add_file<P: Into<PathBuf>>(
    &mut self,
    path: P,
  ) -> FileId {
    let path = path.into();
    if let Some(id) = self.by_path.get(&path) {
      return *id;
    }

    let id = self.files.alloc(SourceFile { path: path.clone() });
    self.by_path.insert(path, id);
    id
  }

  /// Returns `None` for the synthetic file and for unknown ids.
  pub fn get(
    &self,
    id: &FileId,
  ) -> Option<&SourceFile> {
    if *id == FileId::SYNTHETIC || !self.files.contains(id) {
      return None;
    }

    Some(self.files.get(id))
  }
}
