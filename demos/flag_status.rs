use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flag_registry::Registry;
use log::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Load a flag file and report whether flags are enabled for some evaluation keys.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON array of flag records, relative to the working directory
    #[arg(short, long, default_value = "demos/flags.json")]
    file: PathBuf,

    /// Flag and evaluation key to check, as `flag:key`
    #[arg(
        short,
        long = "check",
        value_parser = parse_check,
        default_values = ["new_feature:user123", "beta_feature:user456"]
    )]
    checks: Vec<(String, String)>,
}

fn parse_check(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((flag, key)) if !flag.is_empty() => Ok((flag.to_string(), key.to_string())),
        _ => Err(format!("expected `flag:key`, got `{}`", s)),
    }
}

fn display_name(flag: &str) -> String {
    let words: Vec<String> = flag
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect();
    let mut name = words.join(" ");
    if let Some(first) = name.get(..1) {
        name = first.to_uppercase() + &name[1..];
    }
    name
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let registry = Registry::new();
    if let Err(e) = registry.load_from_file(&cli.file) {
        eprintln!("Error loading flags from {}: {}", cli.file.display(), e);
        return ExitCode::FAILURE;
    }

    for (flag, key) in &cli.checks {
        let detail = registry.evaluate(flag, key);
        debug!("{} for {}: {:?}", flag, key, detail.reason);

        let status = if detail.enabled { "enabled" } else { "disabled" };
        println!("{} is {} for {}", display_name(flag), status, key);
    }

    ExitCode::SUCCESS
}
