use std::io::{self, Write};

pub const MASK_CHAR: u8 = b'*';

/// What is shown on screen while input is typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Echo {
    /// Characters are printed as typed.
    Normal,
    /// Nothing is printed.
    Silent,
    /// A `*` is printed for each character.
    Masked,
}

impl Default for Echo {
    fn default() -> Self {
        Echo::Normal
    }
}

pub struct EchoRenderer<W: Write> {
    policy: Echo,
    display: W,
}

impl<W: Write> EchoRenderer<W> {
    pub fn new(policy: Echo, display: W) -> Self {
        Self { policy, display }
    }

    pub fn on_accept(&mut self, unit: &[u8]) -> io::Result<()> {
        match self.policy {
            Echo::Normal => self.display.write_all(unit)?,
            Echo::Masked => self.display.write_all(&[MASK_CHAR])?,
            Echo::Silent => return Ok(()),
        }
        self.display.flush()
    }

    /// Moves the cursor back `width` columns and clears to end of line.
    pub fn on_erase(&mut self, width: usize) -> io::Result<()> {
        if self.policy == Echo::Silent || width == 0 {
            return Ok(());
        }
        write!(self.display, "\x1b[{}D\x1b[K", width)?;
        self.display.flush()
    }

    pub fn into_inner(self) -> W {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(policy: Echo, f: impl FnOnce(&mut EchoRenderer<Vec<u8>>)) -> Vec<u8> {
        let mut renderer = EchoRenderer::new(policy, Vec::new());
        f(&mut renderer);
        renderer.into_inner()
    }

    #[test]
    fn test_accept() {
        let unit = "€".as_bytes();
        assert_eq!(render(Echo::Normal, |r| r.on_accept(unit).unwrap()), unit);
        assert_eq!(render(Echo::Masked, |r| r.on_accept(unit).unwrap()), b"*");
        assert!(render(Echo::Silent, |r| r.on_accept(unit).unwrap()).is_empty());
    }

    #[test]
    fn test_erase() {
        assert_eq!(
            render(Echo::Normal, |r| r.on_erase(3).unwrap()),
            b"\x1b[3D\x1b[K"
        );
        assert_eq!(
            render(Echo::Masked, |r| r.on_erase(12).unwrap()),
            b"\x1b[12D\x1b[K"
        );
        assert!(render(Echo::Silent, |r| r.on_erase(3).unwrap()).is_empty());
    }

    #[test]
    fn test_erase_zero_width_is_silent() {
        assert!(render(Echo::Normal, |r| r.on_erase(0).unwrap()).is_empty());
        assert!(render(Echo::Masked, |r| r.on_erase(0).unwrap()).is_empty());
    }
}
