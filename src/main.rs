use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::{Style, Term};
use env_logger::Builder;
use log::LevelFilter;
use pwgen::config::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, DEFAULT_SYMBOLS};
use pwgen::{Format, Generator, Keystream, PwgenError, Settings, Wordlist};

#[derive(Parser)]
#[command(
    name = "pwgen",
    version,
    author,
    about = "Generate passwords from a format of words, numbers and symbols"
)]
struct Cli {
    /// Input wordlist, one word per line
    wordlist: PathBuf,

    /// Password format. w = word; n = number; s = symbol; ? = optional
    format: String,

    /// Amount of passwords to generate
    #[arg(long, allow_negative_numbers = true)]
    amount: i64,

    /// Min password length
    #[arg(long, default_value_t = DEFAULT_MIN_LEN, allow_negative_numbers = true)]
    minlen: i64,

    /// Max password length
    #[arg(long, default_value_t = DEFAULT_MAX_LEN, allow_negative_numbers = true)]
    maxlen: i64,

    /// Symbols to use
    #[arg(long, default_value = DEFAULT_SYMBOLS)]
    symbols: String,

    /// Seed for randomness
    #[arg(long)]
    seed: Option<String>,

    /// Hide retry notices
    #[arg(short, long, conflicts_with = "debug")]
    quiet: bool,

    /// Debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    init_logger(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Off
    } else if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::new(
        cli.amount,
        cli.minlen,
        cli.maxlen,
        &cli.symbols,
        cli.seed.clone(),
    )?;

    let format = Format::parse(&cli.format)?;

    if format.uses_symbols() && settings.symbols.is_empty() {
        return Err(PwgenError::EmptySymbols.into());
    }

    let mut rng = Keystream::new(settings.seed.as_deref())?;
    log::debug!(
        "format {} ({} tokens), {} seeded",
        format,
        format.required_tokens(),
        if settings.is_seeded() { "is" } else { "not" }
    );

    let mut wordlist = Wordlist::load(&cli.wordlist)?;

    if format.uses_words() && wordlist.is_empty() {
        return Err(PwgenError::EmptyWordlist.into());
    }

    wordlist.shuffle(&mut rng);

    let generator = Generator::from_settings(&format, &wordlist, &settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for password in generator.passwords(&mut rng) {
        let password = password?;
        writeln!(out, "{}", &*password).context("Failed to write password")?;
        out.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}

fn report(err: &anyhow::Error) {
    let style = if supports_color::on(supports_color::Stream::Stderr).is_some() {
        Style::new().for_stderr().red().bold()
    } else {
        Style::new()
    };

    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {:#}", style.apply_to("ERROR:"), err));
}
