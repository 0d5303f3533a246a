//! Reporting macros
/// Write a line to stderr, the channel the binaries use for fatal reports.
/// A closed stderr is ignored: there is nobody left to tell.
#[macro_export]
macro_rules! println_stderr(
    ($($arg:tt)*) => ({
      use std::io::Write;
      let stderr = ::std::io::stderr();
      let mut handle = stderr.lock();
      let _ = writeln!(handle, $($arg)*);
    })
);
