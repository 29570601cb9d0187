use std::io;

#[derive(thiserror::Error, Debug)]
pub enum TermError {
    #[error("stdin and stdout must be connected to a terminal")]
    NotATerminal,

    #[error("failed to configure terminal")]
    Configuration(#[source] io::Error),

    #[error("failed to read from terminal")]
    Read(#[source] io::Error),

    #[error("failed to write to terminal")]
    Display(#[source] io::Error),

    /// Input was cancelled with the end-of-input key on an empty line.
    #[error("end of input")]
    EndOfInput,

    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
}

impl TermError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TermError::EndOfInput)
    }
}

pub type Result<T> = std::result::Result<T, TermError>;
