mod error;
pub mod fixture;
mod pipeline;
mod summary;

pub use error::DriverError;
pub use pipeline::{
  CompileOutput, DirectiveReport, ExpandResult, compile_file, expand, expand_file, find_directives, load_config,
  load_fixture,
};
pub use summary::format_summary;
