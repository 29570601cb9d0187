use super::platform::{CARRIAGE_RETURN, LINEFEED, VDISABLE};

/// Byte values bound to the editing functions in the terminal's
/// control-character table. Read once per invocation from the captured mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlChars {
    pub eof: u8,
    pub erase: u8,
    pub kill: u8,
    pub werase: u8,
}

/// What a single input unit means to the line editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    EndOfInput,
    Submit,
    Erase,
    Kill,
    WordErase,
    /// Anything that is not a control byte; the unit's bytes still have to
    /// pass the graphic-character check before they are accepted.
    Other,
}

impl Default for ControlChars {
    /// The usual cooked-mode bindings: ^D, DEL, ^U, ^W.
    fn default() -> Self {
        Self {
            eof: 0x04,
            erase: 0x7f,
            kill: 0x15,
            werase: 0x17,
        }
    }
}

impl ControlChars {
    #[cfg(target_family = "unix")]
    pub fn from_termios(mode: &termios::Termios) -> Self {
        Self {
            eof: mode.c_cc[termios::VEOF],
            erase: mode.c_cc[termios::VERASE],
            kill: mode.c_cc[termios::VKILL],
            werase: mode.c_cc[termios::os::target::VWERASE],
        }
    }

    /// Classifies the first byte of an input unit. The order of the checks
    /// decides which function wins when two slots share a byte value.
    pub fn classify(&self, byte: u8) -> Key {
        if matches(self.eof, byte) {
            Key::EndOfInput
        } else if byte == LINEFEED || byte == CARRIAGE_RETURN {
            Key::Submit
        } else if matches(self.erase, byte) {
            Key::Erase
        } else if matches(self.kill, byte) {
            Key::Kill
        } else if matches(self.werase, byte) {
            Key::WordErase
        } else {
            Key::Other
        }
    }
}

fn matches(slot: u8, byte: u8) -> bool {
    slot != VDISABLE && slot == byte
}
