use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::team::Team;

/// One record of the match feed. Everything except the two teams may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub datetime: Option<String>,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub winner: Option<String>,
}

impl Match {
    /// Kickoff time in UTC. RFC 3339 first; a naive `YYYY-MM-DDTHH:MM:SS` is taken as UTC.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        let raw = self.datetime.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .map(|naive| Utc.from_utc_datetime(&naive))
            })
            .ok()
    }
}
