//! Output utilities for shell commands with BrokenPipe handling.
//!
//! Shell output may be piped into something like `head` that closes the pipe
//! early. Instead of erroring, the enclosing function returns `Ok(())`.

/// Print with newline, handling BrokenPipe gracefully.
///
/// Returns `Ok(())` early if BrokenPipe is encountered.
/// Propagates other IO errors.
#[macro_export]
macro_rules! print_line {
    ($($arg:tt)*) => {{
        use std::io::Write;
        match writeln!(std::io::stdout(), $($arg)*) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }};
}

pub use print_line;
