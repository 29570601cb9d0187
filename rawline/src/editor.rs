use std::io::{Read, Write};

use super::echo::Echo;
use super::error::Result;
use super::pty::{ModeControl, RawMode};
use super::reader::{LineReader, ReadOutcome};

/// Something that hands out edited lines. Implemented by [`Console`] for the
/// process terminal; the prompt helpers are written against this trait.
pub trait LineSource {
    fn read_line(&mut self, echo: Echo, limit: usize) -> Result<ReadOutcome>;
}

/// Reads one line from `input` while `device` is held in raw mode. The mode
/// is restored before returning, whatever the outcome. A read error wins
/// over a restore error.
pub fn read_line_with<D, R, W>(
    device: &mut D,
    input: R,
    display: W,
    echo: Echo,
    limit: usize,
) -> Result<ReadOutcome>
where
    D: ModeControl,
    R: Read,
    W: Write,
{
    let raw = RawMode::enter(device)?;
    let controls = raw.control_chars();
    let outcome = LineReader::new(input, display, controls, echo, limit).read_line();
    let restored = raw.restore();
    let outcome = outcome?;
    restored?;
    Ok(outcome)
}

/// Settles a read followed by the newline that ends the input line. Errors
/// of the read take precedence over a failed newline.
pub(crate) fn finish_read(outcome: Result<ReadOutcome>, newline: Result<()>) -> Result<Vec<u8>> {
    let line = outcome?.into_line()?;
    newline?;
    Ok(line)
}

#[cfg(target_family = "unix")]
pub use self::console::*;

#[cfg(target_family = "unix")]
mod console {
    use std::io::{self, Write};

    use super::{finish_read, read_line_with, LineSource};
    use crate::echo::Echo;
    use crate::error::{Result, TermError};
    use crate::platform::LINEFEED;
    use crate::pty::{ensure_terminal, Tty};
    use crate::reader::ReadOutcome;

    /// The process terminal: configured and read through stdin, echoed to
    /// stdout.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Console;

    impl LineSource for Console {
        fn read_line(&mut self, echo: Echo, limit: usize) -> Result<ReadOutcome> {
            read_line(echo, limit)
        }
    }

    /// Reads a line from the terminal. `limit` > 0 submits the line once that
    /// many characters have been typed.
    pub fn read_line(echo: Echo, limit: usize) -> Result<ReadOutcome> {
        ensure_terminal()?;
        let mut tty = Tty::stdin();
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_line_with(&mut tty, stdin.lock(), stdout.lock(), echo, limit)
    }

    fn finish_line() -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(&[LINEFEED]).map_err(TermError::Display)?;
        stdout.flush().map_err(TermError::Display)
    }

    /// Gets one line of input.
    pub fn get_line() -> Result<String> {
        let outcome = read_line(Echo::Normal, 0);
        let line = finish_read(outcome, finish_line())?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Gets one line of input, masked with `*`.
    pub fn get_password() -> Result<Vec<u8>> {
        let outcome = read_line(Echo::Masked, 0);
        finish_read(outcome, finish_line())
    }

    /// Gets one character. Submitting without typing one yields `'\n'`.
    pub fn get_char(echo: bool) -> Result<char> {
        let mode = if echo { Echo::Normal } else { Echo::Silent };
        let line = read_line(mode, 1)?.into_line()?;
        Ok(String::from_utf8_lossy(&line)
            .chars()
            .next()
            .unwrap_or(LINEFEED as char))
    }
}
