use chrono::{DateTime, TimeDelta, Utc};

use crate::humanize::natural_time;
use crate::model::game::Match;

/// Assumed length of a match. Stoppage time is not modelled.
pub const MATCH_SECONDS: f64 = 60.0 * 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Future,
    Now,
    Past,
}

impl Status {
    /// Played or being played.
    pub fn has_started(self) -> bool {
        matches!(self, Status::Now | Status::Past)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub status: Status,
    /// Completion percentage, 0..=100.
    pub percentage: u8,
}

/// Seconds between kickoff and `now`; negative while the match lies in the future.
pub fn elapsed_seconds(kickoff: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - kickoff).num_milliseconds() as f64 / 1000.0
}

/// Classify by elapsed seconds: `<= 0` is future, `> 5400` is past, anything between is live.
pub fn classify(elapsed_seconds: f64) -> Status {
    if elapsed_seconds > 0.0 {
        if elapsed_seconds > MATCH_SECONDS {
            Status::Past
        } else {
            Status::Now
        }
    } else {
        Status::Future
    }
}

pub fn completion(status: Status, elapsed_seconds: f64) -> u8 {
    match status {
        Status::Future => 0,
        Status::Past => 100,
        Status::Now => (elapsed_seconds / 60.0 / 90.0 * 100.0).floor().clamp(0.0, 100.0) as u8,
    }
}

pub fn progress(elapsed_seconds: f64) -> Progress {
    let status = classify(elapsed_seconds);
    Progress { status, percentage: completion(status, elapsed_seconds) }
}

/// "Draw" or "{winner} won".
pub fn match_result(winner: Option<&str>) -> String {
    match winner {
        Some("Draw") => "Draw".to_string(),
        Some(team) => format!("{} won", team),
        None => "Result unknown".to_string(),
    }
}

/// Human-readable line describing where the match stands relative to now.
pub fn status_message(status: Status, kickoff: DateTime<Utc>, now: DateTime<Utc>, winner: Option<&str>) -> String {
    let delta: TimeDelta = now - kickoff;
    match status {
        Status::Now => {
            let minutes = (elapsed_seconds(kickoff, now) / 60.0).floor() as i64;
            format!("Being played now: {} minutes gone", minutes)
        }
        Status::Past => format!("Played {}. {}", natural_time(delta), match_result(winner)),
        Status::Future => format!("Will be played {}", natural_time(delta)),
    }
}

/// Everything the renderer needs to know about a match at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub progress: Progress,
    pub message: String,
}

/// Classify a match against `now`. `None` when the record carries no usable kickoff time.
pub fn classify_match(game: &Match, now: DateTime<Utc>) -> Option<Classification> {
    let kickoff = game.kickoff()?;
    let progress = progress(elapsed_seconds(kickoff, now));
    let message = status_message(progress.status, kickoff, now, game.winner.as_deref());
    Some(Classification { progress, message })
}
