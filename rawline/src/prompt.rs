use std::io::Write;
use std::str::FromStr;

use super::echo::Echo;
use super::editor::LineSource;
use super::error::{Result, TermError};

// Cursor up, cursor to column 1, erase line.
const RESET_PROMPT: &[u8] = b"\x1b[A\x1b[G\x1b[K";

/// A question that is asked until the answer converts. An empty answer
/// returns the default if one is set and asks again otherwise.
///
/// ```no_run
/// let age: u32 = rawline::Prompt::new("Age: ").read()?;
/// # Ok::<(), rawline::TermError>(())
/// ```
pub struct Prompt<'a, T> {
    text: &'a str,
    echo: Echo,
    limit: usize,
    default: Option<T>,
}

impl<'a, T> Prompt<'a, T> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            echo: Echo::Normal,
            limit: 0,
            default: None,
        }
    }

    pub fn echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub fn run<S, W, F, E>(mut self, source: &mut S, display: &mut W, mut conv: F) -> Result<T>
    where
        S: LineSource,
        W: Write,
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        loop {
            write_flush(display, self.text.as_bytes())?;
            let outcome = source.read_line(self.echo, self.limit);
            write_flush(display, b"\n")?;
            let line = outcome?.into_line()?;
            let line = String::from_utf8_lossy(&line).into_owned();
            if line.is_empty() {
                if let Some(value) = self.default.take() {
                    return Ok(value);
                }
            } else if let Ok(value) = conv(line.as_str()) {
                return Ok(value);
            }
            write_flush(display, RESET_PROMPT)?;
        }
    }

    #[cfg(target_family = "unix")]
    pub fn read_with<F, E>(self, conv: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        let stdout = std::io::stdout();
        let mut display = stdout.lock();
        self.run(&mut super::editor::Console, &mut display, conv)
    }

    #[cfg(target_family = "unix")]
    pub fn read(self) -> Result<T>
    where
        T: FromStr,
    {
        self.read_with(|s| s.trim().parse::<T>())
    }
}

fn write_flush<W: Write>(display: &mut W, data: &[u8]) -> Result<()> {
    display.write_all(data).map_err(TermError::Display)?;
    display.flush().map_err(TermError::Display)
}

/// Accepts one character out of `options` and returns its index. An upper
/// case option is the default.
pub fn select_from<S, W>(
    source: &mut S,
    display: &mut W,
    prompt: &str,
    options: &str,
) -> Result<usize>
where
    S: LineSource,
    W: Write,
{
    let mut default = None;
    for (i, c) in options.chars().enumerate() {
        if c.is_uppercase() {
            if default.is_some() {
                return Err(TermError::InvalidOptions("only one default option allowed"));
            }
            default = Some(i);
        }
    }
    let options: Vec<String> = options
        .chars()
        .map(|c| c.to_lowercase().collect())
        .collect();
    let mut prompt = Prompt::new(prompt).limit(1);
    if let Some(i) = default {
        prompt = prompt.default(i);
    }
    prompt.run(source, display, |s| {
        let s = s.to_lowercase();
        options.iter().position(|o| *o == s).ok_or(())
    })
}

/// Asks a yes/no question. `options` holds exactly two characters, yes
/// first; an upper case one is the default.
///
/// `yes_no("Exit?", "yN")` shows `Exit? [yN] `.
pub fn yes_no_from<S, W>(
    source: &mut S,
    display: &mut W,
    prompt: &str,
    options: &str,
) -> Result<bool>
where
    S: LineSource,
    W: Write,
{
    if options.chars().count() != 2 {
        return Err(TermError::InvalidOptions("exactly 2 options required"));
    }
    let prompt = format!("{} [{}] ", prompt.trim_end_matches(' '), options);
    let idx = select_from(source, display, &prompt, options)?;
    Ok(idx == 0)
}

#[cfg(target_family = "unix")]
pub fn select(prompt: &str, options: &str) -> Result<usize> {
    let stdout = std::io::stdout();
    select_from(&mut super::editor::Console, &mut stdout.lock(), prompt, options)
}

#[cfg(target_family = "unix")]
pub fn yes_no(prompt: &str, options: &str) -> Result<bool> {
    let stdout = std::io::stdout();
    yes_no_from(&mut super::editor::Console, &mut stdout.lock(), prompt, options)
}
