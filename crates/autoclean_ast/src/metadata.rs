use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ASTMetadata: u32 {
        const NONE     = 0;
        const FINAL    = 1 << 0;
        const STATIC   = 1 << 1;
        const PUBLIC   = 1 << 2;
        const PRIVATE  = 1 << 3;
        const ABSTRACT = 1 << 4;
    }
}

impl Default for ASTMetadata {
  fn default() -> Self {
    ASTMetadata::NONE
  }
}

impl ASTMetadata {
  /// Modifier keywords in canonical order, e.g. `["public", "static"]`.
  pub fn keywords(&self) -> Vec<&'static str> {
    let mut keywords = Vec::new();

    if self.contains(ASTMetadata::PUBLIC) {
      keywords.push("public");
    }
    if self.contains(ASTMetadata::PRIVATE) {
      keywords.push("private");
    }
    if self.contains(ASTMetadata::ABSTRACT) {
      keywords.push("abstract");
    }
    if self.contains(ASTMetadata::STATIC) {
      keywords.push("static");
    }
    if self.contains(ASTMetadata::FINAL) {
      keywords.push("final");
    }

    keywords
  }

  pub fn from_keyword(keyword: &str) -> Option<Self> {
    match keyword {
      "public" => Some(ASTMetadata::PUBLIC),
      "private" => Some(ASTMetadata::PRIVATE),
      "abstract" => Some(ASTMetadata::ABSTRACT),
      "static" => Some(ASTMetadata::STATIC),
      "final" => Some(ASTMetadata::FINAL),
      _ => None,
    }
  }
}
