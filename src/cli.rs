use clap::Parser;

use crate::feed::DEFAULT_BASE_URL;
use crate::render::Background;

/// Print a colourised summary of football matches: countdown, live progress or final result.
#[derive(Debug, Parser)]
#[command(name = "worldcup", version)]
pub struct Cli {
    /// Which matches to fetch, appended verbatim to `/matches/` (e.g. `today`, `current`,
    /// `tomorrow`). Fetches every match when omitted.
    pub date: Option<String>,
    /// Background of the terminal the palette should suit.
    #[arg(long, short, value_enum, default_value_t = Background::Dark)]
    pub background: Background,
    /// Base URL of the match feed.
    #[arg(long, env = "WORLDCUP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Disable ANSI colours.
    #[arg(long)]
    pub no_color: bool,
    /// Log progress to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub background: Background,
    pub base_url: String,
    pub color: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            endpoint: self.date.clone().unwrap_or_default(),
            background: self.background,
            base_url: self.base_url.clone(),
            color: !self.no_color,
        }
    }
}
