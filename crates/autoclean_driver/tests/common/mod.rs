#![allow(dead_code)]

use std::path::PathBuf;

use autoclean_config::AutocleanConfig;
use autoclean_driver::{CompileOutput, expand_file};
use tempfile::TempDir;

pub struct Workspace {
  pub dir: TempDir,
}

impl Workspace {
  pub fn new() -> Self {
    Self {
      dir: TempDir::new().expect("temp dir"),
    }
  }

  pub fn write(
    &self,
    name: &str,
    content: &str,
  ) -> PathBuf {
    let path = self.dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
  }
}

/// `void main() { <body> }` as fixture JSON.
pub fn method_fixture(body: &str) -> String {
  format!(
    r#"{{ "items": [{{ "kind": "method", "name": "main", "body": [{}] }}] }}"#,
    body
  )
}

pub fn cleanup_var(
  name: &str,
  args: &str,
) -> String {
  format!(
    r#"{{ "kind": "var", "type": "Handle", "name": "{}",
         "attributes": [{{ "name": "cleanup", "args": [{}] }}],
         "value": {{ "kind": "call", "callee": {{ "kind": "name", "name": "open" }} }} }}"#,
    name, args
  )
}

pub fn call_stmt(
  callee: &str,
  arg: &str,
) -> String {
  format!(
    r#"{{ "kind": "expr", "expr": {{ "kind": "call",
         "callee": {{ "kind": "name", "name": "{}" }},
         "args": [{{ "kind": "name", "name": "{}" }}] }} }}"#,
    callee, arg
  )
}

pub fn run(
  config: &AutocleanConfig,
  json: &str,
) -> CompileOutput {
  let workspace = Workspace::new();
  let path = workspace.write("fixture.json", json);
  expand_file(config, path.to_str().expect("utf-8 path")).expect("fixture should load")
}
