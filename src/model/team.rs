use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub goals: Option<u32>,
}

impl Team {
    /// Country name, or a placeholder when the feed has not decided the team yet.
    pub fn country_name(&self) -> &str {
        self.country.as_deref().unwrap_or("To Be Determined")
    }

    pub fn goal_count(&self) -> u32 {
        self.goals.unwrap_or(0)
    }
}
