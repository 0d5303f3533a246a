//! Shared plumbing of the batch binaries: logging setup, project root discovery
//! and the exit path for missing inputs
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::errors::ArchaismError;

#[macro_use]
pub mod macros;
pub mod test;

/// Install the global `tracing` subscriber; `RUST_LOG` overrides the default `info` level
pub fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// The project root: the first positional argument, or the working directory
pub fn project_root() -> PathBuf {
  let mut input_args = env::args();
  let _ = input_args.next(); // skip process name
  match input_args.next() {
    Some(path) => PathBuf::from(path),
    None => PathBuf::from("."),
  }
}

/// Report `error` on stderr and terminate with status 1
pub fn exit_with(error: &ArchaismError) -> ! {
  println_stderr!("error: {}", error);
  process::exit(1)
}
