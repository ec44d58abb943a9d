use clap::Parser;
use tracing_subscriber::EnvFilter;

use worldcup::cli::Cli;
use worldcup::error::Error;

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries match blocks
    let default_level = if cli.verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let config = cli.config();
    let stdout = std::io::stdout();
    worldcup::run(&config, &mut stdout.lock())
}
