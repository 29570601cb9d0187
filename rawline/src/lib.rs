//! Line input from POSIX terminals with control over echo.
//!
//! The terminal is switched to raw mode for the duration of a read and the
//! line is edited by the library: erase, word erase and kill use the bytes
//! bound in the terminal's own settings, and end-of-input (usually ^D) on an
//! empty line cancels the read. The previous terminal mode is always
//! restored before a read returns.
//!
//! ```no_run
//! use rawline::{read_line, Echo, ReadOutcome};
//!
//! match read_line(Echo::Masked, 0)? {
//!     ReadOutcome::Line(password) => println!("\n{} bytes", password.len()),
//!     ReadOutcome::EndOfInput => println!("\ncancelled"),
//! }
//! # Ok::<(), rawline::TermError>(())
//! ```

mod buffer;
mod control;
mod echo;
mod editor;
mod error;
pub mod menu;
mod platform;
pub mod prompt;
pub mod pty;
mod reader;

#[cfg(test)]
mod fake_device;
#[cfg(test)]
mod prompt_tests;

pub use self::buffer::LineBuffer;
pub use self::control::{ControlChars, Key};
pub use self::echo::{Echo, EchoRenderer};
pub use self::editor::{read_line_with, LineSource};
pub use self::error::{Result, TermError};
pub use self::prompt::Prompt;
pub use self::reader::{LineReader, ReadOutcome};

#[cfg(target_family = "unix")]
pub use self::editor::{get_char, get_line, get_password, read_line, Console};
#[cfg(target_family = "unix")]
pub use self::menu::menu;
#[cfg(target_family = "unix")]
pub use self::prompt::{select, yes_no};
#[cfg(target_family = "unix")]
pub use self::pty::{get_size, is_terminal, make_raw, Tty};
