// Per-platform values that the termios crate does not export.

/// Value of a control-character slot whose function is switched off
/// (`_POSIX_VDISABLE`).
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "solaris",
    target_os = "illumos"
))]
pub const VDISABLE: u8 = 0x00;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "solaris",
    target_os = "illumos"
)))]
pub const VDISABLE: u8 = 0xff;

pub const LINEFEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
