use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rawline::pty::ensure_terminal;
use rawline::{make_raw, Echo, Prompt, ReadOutcome, TermError, Tty};
use std::fmt::Display;
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Read one line
    Line {
        #[clap(short, long, default_value_t = 0)]
        limit: usize,
    },
    /// Read a password, masked with `*`
    Password {
        /// Print nothing while typing
        #[clap(short, long)]
        silent: bool,
    },
    /// Read a single character
    Char {
        #[clap(long)]
        no_echo: bool,
    },
    /// Read an integer, asking again until one is given
    Number {
        #[clap(default_value = "Number: ")]
        prompt: String,
        #[clap(short, long)]
        default: Option<i64>,
    },
    YesNo {
        prompt: String,
        #[clap(default_value = "yN")]
        options: String,
    },
    Select {
        prompt: String,
        options: String,
    },
    Menu {
        #[clap(short, long, default_value = "")]
        title: String,
        /// 0 fits the menu to the terminal height
        #[clap(short, long, default_value_t = 0)]
        columns: usize,
        #[clap(multiple_values = true, required = true)]
        options: Vec<String>,
    },
    /// Show the byte values of keys until end-of-input
    RawDump,
}

#[derive(Parser, Debug)]
#[clap(version)]
#[clap(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Log filter, takes precedence over RUST_LOG
    #[clap(long)]
    pub log: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

pub fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub struct App {
    command: Commands,
}

impl App {
    pub fn new(args: Cli) -> Self {
        Self {
            command: args.command,
        }
    }

    pub fn run(self) -> Result<()> {
        debug!(command = ?self.command, "running");
        match self.command {
            Commands::Line { limit } => {
                print_flush("Line: ")?;
                let outcome = rawline::read_line(Echo::Normal, limit);
                println!();
                match outcome? {
                    ReadOutcome::Line(line) => report(String::from_utf8_lossy(&line)),
                    ReadOutcome::EndOfInput => cancelled(),
                }
            }
            Commands::Password { silent } => {
                let echo = if silent { Echo::Silent } else { Echo::Masked };
                let result = Prompt::new("Password: ")
                    .echo(echo)
                    .read_with(|s| Ok::<_, ()>(s.chars().count()));
                finish(result, |n| format!("{} characters", n))
            }
            Commands::Char { no_echo } => {
                print_flush("Key: ")?;
                let result = rawline::get_char(!no_echo);
                println!();
                finish(result, |c| format!("{:?}", c))
            }
            Commands::Number { prompt, default } => {
                let mut number = Prompt::<i64>::new(&prompt);
                if let Some(default) = default {
                    number = number.default(default);
                }
                finish(number.read(), |n| n.to_string())
            }
            Commands::YesNo { prompt, options } => {
                finish(rawline::yes_no(&prompt, &options), |yes| yes.to_string())
            }
            Commands::Select { prompt, options } => {
                let result = rawline::select(&prompt, &options);
                finish(result, |i| {
                    format!("{} ({})", i, options.chars().nth(i).unwrap_or(' '))
                })
            }
            Commands::Menu {
                title,
                columns,
                options,
            } => {
                let options: Vec<&str> = options.iter().map(|s| s.as_str()).collect();
                let result = rawline::menu("Choice: ", &title, &options, columns);
                finish(result, |i| options[i].to_string())
            }
            Commands::RawDump => raw_dump(),
        }
    }
}

fn print_flush(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn report(value: impl Display) -> Result<()> {
    println!("[ask]: {}", value.to_string().green());
    Ok(())
}

fn cancelled() -> Result<()> {
    println!("[ask]: {}", "Cancelled".yellow());
    Ok(())
}

fn finish<T, F, S>(result: rawline::Result<T>, show: F) -> Result<()>
where
    F: FnOnce(T) -> S,
    S: Display,
{
    match result {
        Ok(value) => report(show(value)),
        Err(TermError::EndOfInput) => cancelled(),
        Err(e) => Err(e).context("Failed to read from terminal"),
    }
}

fn caret(byte: u8) -> String {
    match byte {
        0x00..=0x1f => format!("^{}", (byte + 0x40) as char),
        0x7f => "^?".to_string(),
        0x20..=0x7e => (byte as char).to_string(),
        _ => "..".to_string(),
    }
}

/// Echoes the code of every byte typed until the end-of-input key.
fn raw_dump() -> Result<()> {
    ensure_terminal()?;
    let mut tty = Tty::stdin();
    let raw = make_raw(&mut tty).context("Failed to enter raw mode")?;
    let controls = raw.control_chars();

    // Output post-processing is off, lines need an explicit \r.
    let mut stdout = io::stdout();
    write!(
        stdout,
        "eof {}  erase {}  kill {}  werase {}\r\n",
        caret(controls.eof),
        caret(controls.erase),
        caret(controls.kill),
        caret(controls.werase)
    )?;
    stdout.flush()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut byte = [0u8; 1];
    loop {
        let size = input.read(&mut byte).context("read error")?;
        if size == 0 || byte[0] == controls.eof {
            break;
        }
        write!(stdout, "{:#04x} {}\r\n", byte[0], caret(byte[0]).cyan())?;
        stdout.flush()?;
    }
    raw.restore()?;
    Ok(())
}
