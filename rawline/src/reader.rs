use std::io::{self, ErrorKind, Read, Write};
use tracing::trace;

use super::buffer::{encoded_len, LineBuffer};
use super::control::{ControlChars, Key};
use super::echo::{Echo, EchoRenderer};
use super::error::{Result, TermError};

/// How a line read ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The line was submitted. Does not include the terminator.
    Line(Vec<u8>),
    /// End-of-input was typed on an empty line.
    EndOfInput,
}

impl ReadOutcome {
    pub fn into_line(self) -> Result<Vec<u8>> {
        match self {
            ReadOutcome::Line(line) => Ok(line),
            ReadOutcome::EndOfInput => Err(TermError::EndOfInput),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Reading,
    Completed,
    EndOfInput,
}

/// One key press as read from the device: a single control byte or the
/// bytes of one encoded character.
struct Unit {
    bytes: [u8; 4],
    len: usize,
}

impl Unit {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Builds one line from a device that is already in raw mode.
pub struct LineReader<R: Read, W: Write> {
    input: R,
    echo: EchoRenderer<W>,
    controls: ControlChars,
    limit: usize,
    buffer: LineBuffer,
    pending: Option<u8>,
    state: State,
}

impl<R: Read, W: Write> LineReader<R, W> {
    /// `limit` is the number of characters after which the line is submitted
    /// without a terminator; 0 means no limit.
    pub fn new(input: R, display: W, controls: ControlChars, echo: Echo, limit: usize) -> Self {
        Self {
            input,
            echo: EchoRenderer::new(echo, display),
            controls,
            limit,
            buffer: LineBuffer::new(),
            pending: None,
            state: State::Reading,
        }
    }

    pub fn read_line(mut self) -> Result<ReadOutcome> {
        while self.state == State::Reading {
            let unit = self.read_unit()?;
            self.consume(&unit)?;
        }
        match self.state {
            State::EndOfInput => Ok(ReadOutcome::EndOfInput),
            _ => Ok(ReadOutcome::Line(self.buffer.into_bytes())),
        }
    }

    fn transition(&mut self, state: State) {
        self.state = state;
    }

    fn consume(&mut self, unit: &Unit) -> Result<()> {
        let key = self.controls.classify(unit.bytes[0]);
        trace!(?key, len = unit.len, "input unit");
        match key {
            Key::EndOfInput => {
                if self.buffer.is_empty() {
                    self.transition(State::EndOfInput);
                } else {
                    self.transition(State::Completed);
                }
            }
            Key::Submit => self.transition(State::Completed),
            Key::Erase => {
                let width = self.buffer.erase_last_char();
                self.echo.on_erase(width).map_err(TermError::Display)?;
            }
            Key::Kill => {
                let width = self.buffer.erase_all();
                self.echo.on_erase(width).map_err(TermError::Display)?;
            }
            Key::WordErase => {
                let width = self.buffer.erase_last_word();
                self.echo.on_erase(width).map_err(TermError::Display)?;
            }
            Key::Other => {
                if self.buffer.append(unit.as_bytes()) {
                    self.echo
                        .on_accept(unit.as_bytes())
                        .map_err(TermError::Display)?;
                    if self.limit > 0 && self.buffer.char_count() == self.limit {
                        self.transition(State::Completed);
                    }
                }
            }
        }
        Ok(())
    }

    /// Reads a control byte or a whole encoded character. A broken sequence
    /// comes back as a unit the buffer rejects; the byte that broke it is
    /// kept as the lead of the next unit.
    fn read_unit(&mut self) -> Result<Unit> {
        let lead = match self.pending.take() {
            Some(byte) => byte,
            None => self.read_byte()?,
        };
        let mut unit = Unit {
            bytes: [lead, 0, 0, 0],
            len: 1,
        };
        if self.controls.classify(lead) != Key::Other {
            return Ok(unit);
        }
        let expected = encoded_len(lead).unwrap_or(1);
        while unit.len < expected {
            let byte = self.read_byte()?;
            if byte & 0xc0 != 0x80 {
                self.pending = Some(byte);
                break;
            }
            unit.bytes[unit.len] = byte;
            unit.len += 1;
        }
        Ok(unit)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => {
                    return Err(TermError::Read(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "terminal closed",
                    )))
                }
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(TermError::Read(e)),
            }
        }
    }
}
