use std::io;
use tracing::{debug, warn};

use super::control::ControlChars;
use super::error::{Result, TermError};

/// A device whose line discipline can be read and replaced.
pub trait ModeControl {
    type Mode: Clone;

    fn get_mode(&self) -> io::Result<Self::Mode>;
    fn set_mode(&mut self, mode: &Self::Mode) -> io::Result<()>;

    /// Derives the raw variant of `mode`.
    fn make_raw(mode: &Self::Mode) -> Self::Mode;
    fn control_chars(mode: &Self::Mode) -> ControlChars;
}

/// Holds a device in raw mode. The captured mode is put back by
/// [`RawMode::restore`], or on drop if that was never called.
pub struct RawMode<'a, D: ModeControl> {
    device: &'a mut D,
    original: D::Mode,
    restored: bool,
}

impl<'a, D: ModeControl> RawMode<'a, D> {
    pub fn enter(device: &'a mut D) -> Result<Self> {
        let original = device.get_mode().map_err(TermError::Configuration)?;
        let raw = D::make_raw(&original);
        if let Err(e) = device.set_mode(&raw) {
            // The call may have been partially applied.
            if let Err(rollback) = device.set_mode(&original) {
                warn!("failed to roll back terminal mode: {}", rollback);
            }
            return Err(TermError::Configuration(e));
        }
        debug!("entered raw mode");
        Ok(Self {
            device,
            original,
            restored: false,
        })
    }

    pub fn original(&self) -> &D::Mode {
        &self.original
    }

    pub fn control_chars(&self) -> ControlChars {
        D::control_chars(&self.original)
    }

    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        self.device
            .set_mode(&self.original)
            .map_err(TermError::Configuration)?;
        debug!("restored terminal mode");
        Ok(())
    }
}

impl<'a, D: ModeControl> Drop for RawMode<'a, D> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        match self.device.set_mode(&self.original) {
            Ok(()) => debug!("restored terminal mode on drop"),
            Err(e) => warn!("failed to restore terminal mode: {}", e),
        }
    }
}

#[cfg(target_family = "unix")]
pub use self::unix::*;

#[cfg(target_family = "unix")]
mod unix {
    use std::io;
    use std::os::unix::io::RawFd;
    use termios::{self, Termios};

    use super::{ModeControl, RawMode};
    use crate::control::ControlChars;
    use crate::error::{Result, TermError};

    pub const STDIN_FD: RawFd = 0;
    pub const STDOUT_FD: RawFd = 1;

    /// A terminal file descriptor. Not closed on drop.
    #[derive(Clone, Copy, Debug)]
    pub struct Tty {
        fd: RawFd,
    }

    impl Tty {
        pub fn new(fd: RawFd) -> Self {
            Self { fd }
        }

        pub fn stdin() -> Self {
            Self::new(STDIN_FD)
        }

        pub fn fd(&self) -> RawFd {
            self.fd
        }
    }

    impl ModeControl for Tty {
        type Mode = Termios;

        fn get_mode(&self) -> io::Result<Termios> {
            Termios::from_fd(self.fd)
        }

        fn set_mode(&mut self, mode: &Termios) -> io::Result<()> {
            termios::tcsetattr(self.fd, termios::TCSANOW, mode)
        }

        fn make_raw(mode: &Termios) -> Termios {
            let mut raw = *mode;
            raw.c_iflag &= !(termios::IGNBRK
                | termios::BRKINT
                | termios::PARMRK
                | termios::ISTRIP
                | termios::INLCR
                | termios::IGNCR
                | termios::ICRNL
                | termios::IXON);
            raw.c_oflag &= !termios::OPOST;
            raw.c_lflag &= !(termios::ECHO
                | termios::ECHONL
                | termios::ICANON
                | termios::ISIG
                | termios::IEXTEN);
            raw.c_cflag &= !(termios::CSIZE | termios::PARENB);
            raw.c_cflag |= termios::CS8;
            raw.c_cc[termios::VMIN] = 1;
            raw.c_cc[termios::VTIME] = 0;
            raw
        }

        fn control_chars(mode: &Termios) -> ControlChars {
            ControlChars::from_termios(mode)
        }
    }

    /// Puts `tty` into raw mode. Drop the guard, or call `restore`, to get
    /// the previous mode back.
    pub fn make_raw(tty: &mut Tty) -> Result<RawMode<'_, Tty>> {
        RawMode::enter(tty)
    }

    pub fn is_terminal(fd: RawFd) -> bool {
        Termios::from_fd(fd).is_ok()
    }

    /// Both ends of the console must be a terminal for the editor to work.
    pub fn ensure_terminal() -> Result<()> {
        if is_terminal(STDIN_FD) && is_terminal(STDOUT_FD) {
            Ok(())
        } else {
            Err(TermError::NotATerminal)
        }
    }

    /// Returns (columns, rows).
    pub fn get_size(fd: RawFd) -> Result<(u16, u16)> {
        use terminal_size::{terminal_size_using_fd, Height, Width};

        match terminal_size_using_fd(fd) {
            Some((Width(w), Height(h))) => Ok((w, h)),
            None => Err(TermError::NotATerminal),
        }
    }
}
