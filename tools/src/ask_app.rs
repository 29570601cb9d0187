use anyhow::Result;

#[cfg(target_family = "unix")]
mod ask;

#[cfg(target_family = "unix")]
fn main() -> Result<()> {
    use clap::Parser;

    let cli = ask::Cli::parse();
    ask::init_logging(cli.log.as_deref());
    ask::App::new(cli).run()
}

#[cfg(not(target_family = "unix"))]
fn main() -> Result<()> {
    anyhow::bail!("ask needs a POSIX terminal")
}
