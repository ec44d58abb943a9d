pub mod classify;
pub mod cli;
pub mod error;
pub mod feed;
pub mod humanize;
pub mod model;
pub mod render;

use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::cli::Config;
use crate::error::Error;
use crate::feed::Feed;
use crate::render::Renderer;

/// Render every match of a feed, in feed order, against a fixed instant.
pub fn render_feed(feed: &Feed, renderer: &Renderer, now: DateTime<Utc>) -> Vec<String> {
    feed.matches()
        .iter()
        .filter_map(|game| {
            let block = renderer.render_match(game, now);
            if block.is_none() {
                debug!(datetime = ?game.datetime, "Skipping match without a usable kickoff time");
            }
            block
        })
        .collect()
}

/// Fetch the configured endpoint and print one block per match to `out`.
#[instrument(level = "info", skip(out))]
pub fn run(config: &Config, out: &mut impl Write) -> Result<(), Error> {
    if !config.color {
        colored::control::set_override(false);
    }

    let feed = Feed::fetch(&config.base_url, &config.endpoint)?;
    let renderer = Renderer::new(config.background);
    let blocks = render_feed(&feed, &renderer, Utc::now());
    info!(printed = blocks.len(), skipped = feed.skipped(), "Rendered matches");

    for block in blocks {
        writeln!(out, "{}", block)?;
    }
    Ok(())
}
