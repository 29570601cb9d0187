use std::io::Write;

use super::editor::LineSource;
use super::error::{Result, TermError};
use super::prompt::Prompt;

const FIELD_SEP: &str = " | ";
const OPT_SEP: &str = ") ";
const CURSOR_UP: &str = "\x1b[A";

pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Rows and columns of the option grid. With `columns` = 0 the grid is as
/// tall as the screen allows. There are never more columns than options.
pub fn grid(opt_cnt: usize, columns: usize, height: usize, with_title: bool) -> (usize, usize) {
    if columns == 0 {
        let reserved = if with_title { 4 } else { 2 };
        let rows = height.saturating_sub(reserved).min(opt_cnt).max(1);
        (rows, div_ceil(opt_cnt, rows))
    } else {
        let cols = columns.min(opt_cnt).max(1);
        (div_ceil(opt_cnt, cols), cols)
    }
}

fn div_ceil(a: usize, b: usize) -> usize {
    a / b + usize::from(a % b != 0)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn center(s: &str, width: usize) -> String {
    let len = char_len(s);
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Lays out `options` column-major for a screen `width` columns wide and
/// `height` rows tall.
pub fn render(
    title: &str,
    options: &[&str],
    columns: usize,
    (width, height): (usize, usize),
) -> String {
    let opt_cnt = options.len();
    if opt_cnt == 0 {
        return String::new();
    }
    let (rows, cols) = grid(opt_cnt, columns, height, !title.is_empty());
    let idx_width = opt_cnt.to_string().len();
    let seps = FIELD_SEP.len().saturating_mul(cols - 1);
    let room = width.saturating_sub(seps) / cols;
    let longest = options.iter().map(|o| char_len(o)).max().unwrap_or(0);
    let opt_width = room
        .saturating_sub(idx_width + OPT_SEP.len())
        .min(longest)
        .max(1);

    let mut out = String::new();
    if !title.is_empty() {
        let menu_width = (idx_width + OPT_SEP.len() + opt_width)
            .saturating_mul(cols)
            .saturating_add(seps);
        out.push_str(&center(title, menu_width));
        out.push('\n');
        out.push_str(&"=".repeat(menu_width.max(char_len(title))));
        out.push('\n');
    }
    for row in 0..rows {
        for col in 0..cols {
            let i = col * rows + row;
            if i >= opt_cnt {
                break;
            }
            if col > 0 {
                out.push_str(FIELD_SEP);
            }
            out.push_str(&format!(
                "{:>iw$}{}{:<ow$.ow$}",
                i + 1,
                OPT_SEP,
                options[i],
                iw = idx_width,
                ow = opt_width
            ));
        }
        out.push('\n');
    }
    out
}

/// Prints a menu and returns the index of the chosen option.
pub fn menu_from<S, W>(
    source: &mut S,
    display: &mut W,
    size: (usize, usize),
    prompt: &str,
    title: &str,
    options: &[&str],
    columns: usize,
) -> Result<usize>
where
    S: LineSource,
    W: Write,
{
    if options.is_empty() {
        return Err(TermError::InvalidOptions("menu needs at least one option"));
    }
    let text = render(title, options, columns, size);
    write!(display, "{}\n{}", text, CURSOR_UP).map_err(TermError::Display)?;
    let count = options.len();
    Prompt::new(prompt).run(source, display, |s| match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(n - 1),
        _ => Err(()),
    })
}

#[cfg(target_family = "unix")]
pub fn menu(prompt: &str, title: &str, options: &[&str], columns: usize) -> Result<usize> {
    use super::pty::{ensure_terminal, get_size, STDOUT_FD};

    ensure_terminal()?;
    let (width, height) = get_size(STDOUT_FD).unwrap_or(FALLBACK_SIZE);
    let stdout = std::io::stdout();
    menu_from(
        &mut super::editor::Console,
        &mut stdout.lock(),
        (width as usize, height as usize),
        prompt,
        title,
        options,
        columns,
    )
}
