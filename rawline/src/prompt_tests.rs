use std::collections::VecDeque;

use super::echo::Echo;
use super::editor::LineSource;
use super::error::{Result, TermError};
use super::prompt::*;
use super::reader::ReadOutcome;

/// Replays canned outcomes and records how it was called.
struct Script {
    outcomes: VecDeque<ReadOutcome>,
    calls: Vec<(Echo, usize)>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            outcomes: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.as_bytes().to_vec()))
                .collect(),
            calls: vec![],
        }
    }
}

impl LineSource for Script {
    fn read_line(&mut self, echo: Echo, limit: usize) -> Result<ReadOutcome> {
        self.calls.push((echo, limit));
        Ok(self.outcomes.pop_front().unwrap_or(ReadOutcome::EndOfInput))
    }
}

#[test]
fn test_prompt_parses() {
    let mut script = Script::new(&["42"]);
    let mut display = Vec::new();
    let value: u32 = Prompt::new("Age: ")
        .run(&mut script, &mut display, |s| s.parse::<u32>())
        .unwrap();
    assert_eq!(value, 42);
    assert_eq!(display, b"Age: \n");
    assert_eq!(script.calls, vec![(Echo::Normal, 0)]);
}

#[test]
fn test_prompt_retries_until_valid() {
    let mut script = Script::new(&["", "abc", "7"]);
    let mut display = Vec::new();
    let value: u32 = Prompt::new("> ")
        .run(&mut script, &mut display, |s| s.parse::<u32>())
        .unwrap();
    assert_eq!(value, 7);
    assert_eq!(
        display,
        b"> \n\x1b[A\x1b[G\x1b[K> \n\x1b[A\x1b[G\x1b[K> \n".to_vec()
    );
}

#[test]
fn test_prompt_default_on_empty() {
    let mut script = Script::new(&[""]);
    let mut display = Vec::new();
    let value = Prompt::new("Name: ")
        .default("anon".to_string())
        .run(&mut script, &mut display, |s| Ok::<_, ()>(s.to_string()))
        .unwrap();
    assert_eq!(value, "anon");
}

#[test]
fn test_prompt_passes_echo_and_limit() {
    let mut script = Script::new(&["pw"]);
    let mut display = Vec::new();
    Prompt::new("Password: ")
        .echo(Echo::Masked)
        .limit(8)
        .run(&mut script, &mut display, |s| Ok::<_, ()>(s.to_string()))
        .unwrap();
    assert_eq!(script.calls, vec![(Echo::Masked, 8)]);
}

#[test]
fn test_prompt_end_of_input() {
    let mut script = Script::new(&[]);
    let mut display = Vec::new();
    let result = Prompt::new("? ").run(&mut script, &mut display, |s| s.parse::<i64>());
    assert!(matches!(result, Err(TermError::EndOfInput)));
}

#[test]
fn test_select() {
    let mut script = Script::new(&["X", "B"]);
    let mut display = Vec::new();
    let idx = select_from(&mut script, &mut display, "Pick: ", "abc").unwrap();
    assert_eq!(idx, 1);
    assert_eq!(script.calls, vec![(Echo::Normal, 1), (Echo::Normal, 1)]);
}

#[test]
fn test_select_default() {
    let mut script = Script::new(&[""]);
    let mut display = Vec::new();
    let idx = select_from(&mut script, &mut display, "Pick: ", "aBc").unwrap();
    assert_eq!(idx, 1);
}

#[test]
fn test_select_rejects_two_defaults() {
    let mut script = Script::new(&["a"]);
    let mut display = Vec::new();
    let result = select_from(&mut script, &mut display, "Pick: ", "ABc");
    assert!(matches!(result, Err(TermError::InvalidOptions(_))));
    assert!(script.calls.is_empty());
}

#[test]
fn test_yes_no() {
    let mut script = Script::new(&["y", "", "N"]);
    let mut display = Vec::new();
    assert!(yes_no_from(&mut script, &mut display, "Exit?  ", "yN").unwrap());
    assert!(!yes_no_from(&mut script, &mut display, "Exit?", "yN").unwrap());
    assert!(!yes_no_from(&mut script, &mut display, "Exit?", "yN").unwrap());
    assert!(display.starts_with(b"Exit? [yN] \n"));
}

#[test]
fn test_yes_no_needs_two_options() {
    let mut script = Script::new(&["y"]);
    let mut display = Vec::new();
    let result = yes_no_from(&mut script, &mut display, "Exit?", "ynq");
    assert!(matches!(result, Err(TermError::InvalidOptions(_))));
}

#[test]
fn test_menu_returns_zero_based_index() {
    use super::menu::menu_from;

    let mut script = Script::new(&["0", "4", "3"]);
    let mut display = Vec::new();
    let options = ["red", "green", "blue"];
    let idx = menu_from(&mut script, &mut display, (80, 24), "Color: ", "", &options, 0).unwrap();
    assert_eq!(idx, 2);
    assert_eq!(script.calls.len(), 3);
    let shown = String::from_utf8(display).unwrap();
    assert!(shown.starts_with("1) red  \n2) green\n3) blue \n\n\x1b[AColor: "));
}

#[test]
fn test_menu_without_options() {
    use super::menu::menu_from;

    let mut script = Script::new(&["1"]);
    let mut display = Vec::new();
    let result = menu_from(&mut script, &mut display, (80, 24), "> ", "Empty", &[], 0);
    assert!(matches!(result, Err(TermError::InvalidOptions(_))));
}
