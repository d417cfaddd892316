//! CLI entrypoint for calrange
//!
//! This is the main binary that wires configuration, the clock and the
//! output formatter into the command runner.

use anyhow::{Result, bail};
use calrange_presentation::{
    Cli, CommandRunner, ConfigLoader, ConsoleFormatter, JsonFormatter, OutputFormat,
    OutputFormatter,
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting calrange");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let output = match (cli.output, config.output.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(configured)) => configured.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to text", e);
            OutputFormat::Text
        }),
        (None, None) => OutputFormat::Text,
    };

    let command = match cli.command {
        Some(command) => command,
        None => bail!("A command is required. Run with --help for usage."),
    };

    // === Dependency Injection ===
    let clock = config.calendar.clock(cli.today);
    let formatter: Box<dyn OutputFormatter> = match output {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    let runner = CommandRunner::new(clock.as_ref(), formatter.as_ref(), &config.output);
    let rendered = runner.run(command)?;

    println!("{}", rendered.trim_end());

    Ok(())
}
