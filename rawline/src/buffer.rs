/// The line being edited. Always holds whole UTF-8 characters; every erase
/// works on character boundaries and reports the number of display columns
/// it removed (one per character).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `unit` if it is exactly one graphic character.
    pub fn append(&mut self, unit: &[u8]) -> bool {
        match decode_graphic(unit) {
            Some(c) => {
                self.text.push(c);
                true
            }
            None => false,
        }
    }

    pub fn erase_last_char(&mut self) -> usize {
        match self.text.pop() {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Removes trailing whitespace and the word in front of it.
    pub fn erase_last_word(&mut self) -> usize {
        let mut erased = 0;
        while self.text.ends_with(char::is_whitespace) {
            self.text.pop();
            erased += 1;
        }
        while !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.pop();
            erased += 1;
        }
        erased
    }

    pub fn erase_all(&mut self) -> usize {
        let erased = self.char_count();
        self.text.clear();
        erased
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}

/// Decodes `unit` as a single printable character.
pub fn decode_graphic(unit: &[u8]) -> Option<char> {
    let s = std::str::from_utf8(unit).ok()?;
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_control() {
        return None;
    }
    Some(c)
}

/// Length of the UTF-8 sequence introduced by `lead`, or `None` for bytes
/// that cannot start one.
pub fn encoded_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}
