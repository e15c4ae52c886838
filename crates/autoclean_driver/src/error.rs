use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum DriverError {
  Io { path: PathBuf, source: io::Error },
  Json { path: PathBuf, source: serde_json::Error },
  Config { path: PathBuf, source: toml::de::Error },
  /// The fixture parsed but cannot be lowered into a tree.
  Fixture(String),
  /// The rewrite finished with this many error diagnostics.
  Diagnostics(usize),
}

impl fmt::Display for DriverError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DriverError::Io { path, source } => write!(f, "failed to read '{}': {}", path.display(), source),
      DriverError::Json { path, source } => write!(f, "invalid fixture '{}': {}", path.display(), source),
      DriverError::Config { path, source } => write!(f, "invalid config '{}': {}", path.display(), source),
      DriverError::Fixture(message) => write!(f, "invalid fixture: {}", message),
      DriverError::Diagnostics(count) => write!(f, "aborting due to {} previous error(s)", count),
    }
  }
}

impl std::error::Error for DriverError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      DriverError::Io { source, .. } => Some(source),
      DriverError::Json { source, .. } => Some(source),
      DriverError::Config { source, .. } => Some(source),
      DriverError::Fixture(_) | DriverError::Diagnostics(_) => None,
    }
  }
}
