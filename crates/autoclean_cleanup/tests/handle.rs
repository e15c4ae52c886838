mod common;

use autoclean_cleanup::{CleanupHandler, CleanupOutcome};
use autoclean_config::AutocleanConfig;
use common::{TreeBuilder, codes};

#[test]
fn handle_reports_every_attribute_as_handled() {
  let mut b = TreeBuilder::new();
  let (good, decl) = b.cleanup_local("Handle", "handle", None, "open");
  let use_handle = b.call_stmt("use", "handle");
  let main = b.method("main", vec![], vec![decl, use_handle]);
  let bad = b.cleanup(vec![]);
  let uninit = b.local("Handle", "other", None, vec![bad]);
  let broken = b.method("broken", vec![], vec![uninit]);
  let (mut tree, symbols) = b.finish(vec![main, broken]);
  let config = AutocleanConfig::silent();

  let mut handler = CleanupHandler::new(&mut tree, symbols.clone(), &config);

  assert!(handler.handle(good));
  assert!(handler.handle(bad));
  assert_eq!(codes(handler.diagnostics()), vec!["C0003"]);

  assert!(handler.handle(good));
  assert!(handler.handle(bad));
  assert_eq!(handler.diagnostics().len(), 1);

  assert_eq!(handler.expand(good), CleanupOutcome::AlreadyProcessed);
  assert_eq!(handler.expand(bad), CleanupOutcome::AlreadyProcessed);
}
