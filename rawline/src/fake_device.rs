// In-memory stand-in for a terminal's line discipline.

use std::io;

use super::control::ControlChars;
use super::pty::ModeControl;

#[derive(Clone, Debug, PartialEq)]
pub struct FakeMode {
    pub raw: bool,
    pub flags: u32,
    pub controls: ControlChars,
}

pub struct FakeDevice {
    pub mode: FakeMode,
    pub fail_get: bool,
    pub fail_set_raw: bool,
    pub fail_restore: bool,
    pub sets: usize,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self {
            mode: FakeMode {
                raw: false,
                flags: 0b1011,
                controls: ControlChars::default(),
            },
            fail_get: false,
            fail_set_raw: false,
            fail_restore: false,
            sets: 0,
        }
    }
}

impl ModeControl for FakeDevice {
    type Mode = FakeMode;

    fn get_mode(&self) -> io::Result<FakeMode> {
        if self.fail_get {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(self.mode.clone())
    }

    fn set_mode(&mut self, mode: &FakeMode) -> io::Result<()> {
        self.sets += 1;
        if mode.raw && self.fail_set_raw {
            // Half-applied before failing.
            self.mode.flags = 0;
            return Err(io::Error::new(io::ErrorKind::Other, "tcsetattr failed"));
        }
        if !mode.raw && self.fail_restore {
            return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
        }
        self.mode = mode.clone();
        Ok(())
    }

    fn make_raw(mode: &FakeMode) -> FakeMode {
        FakeMode {
            raw: true,
            flags: mode.flags & 1,
            controls: mode.controls,
        }
    }

    fn control_chars(mode: &FakeMode) -> ControlChars {
        mode.controls
    }
}
