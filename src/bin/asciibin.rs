use clap::Parser;
use env_logger::Env;

use std::io;
use std::path::PathBuf;

use asciibin::report;
use asciibin::types::ReadMode;

/// Print the contents of files as 8-bit binary digit strings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Files to convert
    files: Vec<PathBuf>,
    /// How to read each file
    #[arg(short, long, value_enum, default_value_t = ReadMode::Binary)]
    mode: ReadMode,
    /// Log progress to stderr at debug level
    #[arg(short, long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "error" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut out = io::stdout().lock();
    report::run(&args.files, args.mode, &mut out)?;
    Ok(())
}
