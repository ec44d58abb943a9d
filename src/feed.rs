use serde_json::Value;
use tracing::{debug, info, info_span, instrument};

use crate::error::Error;
use crate::model::game::Match;

/// Default host of the match feed.
pub const DEFAULT_BASE_URL: &str = "http://worldcup.sfg.io";

/// The validated list of matches returned by one feed request, in feed order.
#[derive(Debug, Default)]
pub struct Feed {
    matches: Vec<Match>,
    skipped: usize,
}

impl Feed {
    /// Build the request URL for an endpoint segment. The segment is used verbatim.
    pub fn url(base_url: &str, endpoint: &str) -> String {
        format!("{}/matches/{}", base_url.trim_end_matches('/'), endpoint)
    }

    /// Fetch `{base_url}/matches/{endpoint}` and keep the renderable records.
    #[instrument(level = "info", skip(base_url))]
    pub fn fetch(base_url: &str, endpoint: &str) -> Result<Self, Error> {
        let url = Self::url(base_url, endpoint);
        let response = {
            let _span = info_span!("feed_fetch", url = %url).entered();
            ureq::get(&url).call()?
        };
        info!(status = response.status().as_u16(), url = %url, "Fetched match feed");
        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string()?;
        Self::from_json(&body)
    }

    /// Build a feed from a raw JSON response body (no network).
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let records = match serde_json::from_str::<Value>(body)? {
            Value::Array(records) => records,
            other => {
                return Err(Error::InvalidFeed(format!(
                    "expected a JSON array of matches, got {}",
                    json_kind(&other)
                )));
            }
        };

        let total = records.len();
        let mut matches = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            if !is_renderable(&record) {
                debug!(index, "Skipping record without home_team/away_team objects");
                continue;
            }
            match serde_json::from_value::<Match>(record) {
                Ok(m) => matches.push(m),
                Err(e) => debug!(index, error = %e, "Skipping record that failed to decode"),
            }
        }

        let skipped = total - matches.len();
        info!(count = matches.len(), skipped, "Validated match feed");
        Ok(Feed { matches, skipped })
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of records dropped by validation or decoding.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// A record is renderable when it is an object whose `home_team` and `away_team` are both objects.
pub fn is_renderable(record: &Value) -> bool {
    let Value::Object(fields) = record else {
        return false;
    };
    matches!(fields.get("home_team"), Some(Value::Object(_)))
        && matches!(fields.get("away_team"), Some(Value::Object(_)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
