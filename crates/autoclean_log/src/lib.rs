//! Stderr logging gated by [`AutocleanConfig`].
//!
//! Stdout is reserved for dumps, so everything here goes to stderr. Three
//! families of macros:
//! - progress lines: `phase_log!`, `phase_ok!`, `phase_warn!`
//! - per-component traces selected with `--debug-trace`: `trace_dbg!`
//! - verbosity-gated chatter: `log_dbg!` (`-vv`), `log_trc!` (`-vvv`)

use autoclean_config::{AutocleanConfig, DebugTrace};

#[doc(hidden)]
pub use colored;

/// How much the user asked to see, from nothing to every trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
  Silent,
  Phases,
  Info,
  Debug,
  Trace,
}

/// `--quiet` wins over everything; `--debug` implies at least `Debug`.
pub fn verbosity(config: &AutocleanConfig) -> Verbosity {
  if config.quiet {
    return Verbosity::Silent;
  }

  let from_flags = match config.verbose {
    0 => Verbosity::Phases,
    1 => Verbosity::Info,
    2 => Verbosity::Debug,
    _ => Verbosity::Trace,
  };

  if config.debug {
    from_flags.max(Verbosity::Debug)
  } else {
    from_flags
  }
}

pub fn enabled(
  config: &AutocleanConfig,
  level: Verbosity,
) -> bool {
  verbosity(config) >= level
}

pub fn debug_trace_enabled(
  config: &AutocleanConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Fixture => "fixture",
    DebugTrace::Cleanup => "cleanup",
    DebugTrace::Usage => "usage",
  }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __phase_line {
  ($config:expr, $color:ident, $indent:expr, $fmt:literal $(, $arg:expr)*) => {{
    if $crate::enabled($config, $crate::Verbosity::Phases) {
      use $crate::colored::Colorize;
      eprintln!(
        "{:indent$}{} {}",
        "",
        "-->".$color().bold(),
        format!($fmt $(, $arg)*),
        indent = $indent
      );
    }
  }};
}

/// Progress line, indented under the current step.
///
/// ```ignore
/// phase_log!(&config, "Expanding... {}", file_path);
/// phase_log!(&config, indent = 8, "directive {}", name);
/// ```
#[macro_export]
macro_rules! phase_log {
  ($config:expr, indent = $indent:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::__phase_line!($config, bright_green, $indent, $fmt $(, $arg)*)
  };

  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::__phase_line!($config, bright_green, 4, $fmt $(, $arg)*)
  };
}

/// Final line of a successful run.
#[macro_export]
macro_rules! phase_ok {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::__phase_line!($config, bright_green, 0, $fmt $(, $arg)*)
  };
}

/// Final line of a run that produced warnings.
#[macro_export]
macro_rules! phase_warn {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::__phase_line!($config, bright_yellow, 0, $fmt $(, $arg)*)
  };
}

/// `debug[cleanup]: Located -> Split`
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    let trace = $trace;
    if $crate::debug_trace_enabled($config, trace) {
      eprintln!("debug[{}]: {}", $crate::trace_name(trace), format!($fmt $(, $arg)*));
    }
  }};
}

#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::enabled($config, $crate::Verbosity::Debug) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}

#[macro_export]
macro_rules! log_trc {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::enabled($config, $crate::Verbosity::Trace) {
      eprintln!("trace: {}", format!($fmt $(, $arg)*));
    }
  }};
}
