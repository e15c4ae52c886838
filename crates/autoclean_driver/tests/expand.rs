mod common;

use std::sync::Arc;

use autoclean_cleanup::CleanupOutcome;
use autoclean_config::{AutocleanConfig, CleanupOptions};
use autoclean_driver::{DriverError, compile_file, format_summary, load_config};
use common::{Workspace, call_stmt, cleanup_var, method_fixture, run};
use insta::assert_snapshot;

fn config_with(options: CleanupOptions) -> AutocleanConfig {
  let mut config = AutocleanConfig::silent();
  config.cleanup = options;
  config
}

#[test]
fn rewrites_fixture_end_to_end() {
  let body = format!("{}, {}", cleanup_var("handle", r#""release""#), call_stmt("use", "handle"));
  let output = run(&AutocleanConfig::silent(), &method_fixture(&body));

  assert!(output.expansion.diagnostics.is_empty());
  assert_snapshot!(output.render(), @r#"
  void main() {
    @cleanup("release") Handle handle = open();
    try {
      use(handle);
    } finally {
      if (autoclean.Runtime.preventNullAnalysis(handle) != null) {
        handle.release();
      }
    }
  }
  "#);
}

#[test]
fn directives_are_reported_in_tree_order() {
  let json = format!(
    r#"{{ "items": [{{ "kind": "record", "name": "Holder", "items": [
      {field},
      {{ "kind": "method", "name": "main", "body": [{local}, {call}] }}
    ] }}] }}"#,
    field = cleanup_var("shared", ""),
    local = cleanup_var("handle", ""),
    call = call_stmt("use", "handle"),
  );
  let output = run(&AutocleanConfig::silent(), &json);

  let reports = &output.expansion.reports;
  assert_eq!(reports.len(), 2);
  assert_eq!(reports[0].variable, "shared");
  assert_eq!(reports[0].outcome, CleanupOutcome::Rejected { code: "C0002".to_string() });
  assert_eq!(reports[1].variable, "handle");
  assert_eq!(reports[1].method, "close");
  assert!(matches!(reports[1].outcome, CleanupOutcome::Rewritten { protected: 1, .. }));
  assert_eq!(output.expansion.error_count(), 1);

  let summary = format_summary(reports);
  assert!(summary.contains("rejected (C0002)"));
  assert!(summary.contains("rewritten, 1 protected"));
}

#[test]
fn locations_point_into_the_fixture() {
  let body = format!("{}, {}", cleanup_var("handle", r#""""#), call_stmt("use", "handle"));
  let output = run(&AutocleanConfig::silent(), &method_fixture(&body));

  assert_eq!(output.expansion.diagnostics[0].error_code, "C0001");
  assert!(output.expansion.reports[0].location.contains("fixture.json:"));
}

#[test]
fn nested_declarations_expand_outer_first() {
  let body = format!(
    "{}, {}, {}",
    cleanup_var("first", ""),
    cleanup_var("second", r#""flush""#),
    call_stmt("use", "second")
  );
  let output = run(&AutocleanConfig::silent(), &method_fixture(&body));

  let text = output.render();
  let outer = text.find("first.close();").expect("outer cleanup");
  let inner = text.find("second.flush();").expect("inner cleanup");
  assert!(inner < outer);
  assert_eq!(text.matches("try {").count(), 2);
}

#[test]
fn custom_attribute_name_is_dispatched() {
  let json = method_fixture(&cleanup_var("handle", "")).replace(r#""name": "cleanup""#, r#""name": "scoped""#);
  let options = CleanupOptions {
    attribute_name: "scoped".to_string(),
    ..CleanupOptions::default()
  };
  let output = run(&config_with(options), &json);

  assert_eq!(output.expansion.reports.len(), 1);
  assert!(output.render().contains("try {"));
}

#[test]
fn other_attributes_are_ignored() {
  let json = method_fixture(&cleanup_var("handle", "")).replace(r#""name": "cleanup""#, r#""name": "deprecated""#);
  let output = run(&AutocleanConfig::silent(), &json);

  assert!(output.expansion.reports.is_empty());
  assert!(!output.render().contains("try"));
}

#[test]
fn config_file_overrides_defaults() {
  let workspace = Workspace::new();
  let path = workspace.write(
    "autoclean.toml",
    "[cleanup]\ndefault_method = \"dispose\"\nbarrier = \"\"\n",
  );

  let options = load_config(&path).unwrap();
  assert_eq!(options.default_method, "dispose");
  assert_eq!(options.barrier_segments(), None);

  let body = format!("{}, {}", cleanup_var("handle", ""), call_stmt("use", "handle"));
  let output = run(&config_with(options), &method_fixture(&body));

  let text = output.render();
  assert!(text.contains("if (handle != null) {"), "{}", text);
  assert!(text.contains("handle.dispose();"));
}

#[test]
fn missing_config_is_an_io_error() {
  let workspace = Workspace::new();
  let result = load_config(&workspace.dir.path().join("absent.toml"));

  assert!(matches!(result, Err(DriverError::Io { .. })));
}

#[test]
fn malformed_config_is_reported() {
  let workspace = Workspace::new();
  let path = workspace.write("autoclean.toml", "[cleanup]\ncheck_usage = \"yes\"\n");

  assert!(matches!(load_config(&path), Err(DriverError::Config { .. })));
}

#[test]
fn malformed_fixture_is_reported() {
  let workspace = Workspace::new();
  let path = workspace.write("broken.json", r#"{ "items": [{ "kind": "nonsense" }] }"#);

  let result = compile_file(Arc::new(AutocleanConfig::silent()), path.to_str().unwrap());

  match result {
    Err(err @ DriverError::Json { .. }) => assert!(err.to_string().contains("broken.json")),
    Err(other) => panic!("unexpected error: {}", other),
    Ok(_) => panic!("fixture should not load"),
  }
}

#[test]
fn compile_file_fails_on_rejected_directive() {
  let workspace = Workspace::new();
  let body = r#"{ "kind": "var", "type": "Handle", "name": "handle",
                  "attributes": [{ "name": "cleanup", "args": [1] }] }"#;
  let path = workspace.write("reject.json", &method_fixture(body));

  let result = compile_file(Arc::new(AutocleanConfig::silent()), path.to_str().unwrap());

  assert!(matches!(result, Err(DriverError::Diagnostics(1))));
}

#[test]
fn warnings_do_not_fail_compilation() {
  let workspace = Workspace::new();
  let alias = r#"{ "kind": "var", "type": "Handle", "name": "alias",
                   "value": { "kind": "name", "name": "handle" } }"#;
  let body = format!("{}, {}", cleanup_var("handle", ""), alias);
  let path = workspace.write("warn.json", &method_fixture(&body));

  let output = compile_file(Arc::new(AutocleanConfig::silent()), path.to_str().unwrap()).unwrap();

  assert_eq!(output.expansion.diagnostics.len(), 1);
  assert_eq!(output.expansion.diagnostics[0].error_code, "C0100");
}
