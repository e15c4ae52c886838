use crate::{BytePosition, file::FileId};

/// Byte range in one file. Generated nodes use [`Span::synthetic`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
  pub start: BytePosition,
  pub end: BytePosition,
  pub file: FileId,
}

impl Span {
  /// # Panics
  /// Panics in debug builds if `start > end`.
  pub fn new(
    file: FileId,
    start: BytePosition,
    end: BytePosition,
  ) -> Self {
    debug_assert!(start <= end, "inverted span {}..{}", start, end);
    Self { file, start, end }
  }

  pub fn synthetic() -> Self {
    Self {
      file: FileId::SYNTHETIC,
      start: BytePosition(0),
      end: BytePosition(0),
    }
  }

  pub fn is_synthetic(&self) -> bool {
    self.file == FileId::SYNTHETIC
  }

  pub fn len(&self) -> usize {
    self.end.0.saturating_sub(self.start.0) as usize
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl std::fmt::Display for Span {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    if self.is_synthetic() {
      return write!(f, "<generated>");
    }

    write!(f, "{}..{} in {}", self.start, self.end, self.file)
  }
}
