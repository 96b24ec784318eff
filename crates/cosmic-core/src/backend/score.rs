//! Score and leaderboard wire contract.
//!
//! Field names are camelCase on the wire for bit compatibility with the
//! existing backend. The plausibility bound lives here so both sides of the
//! contract agree on it: the client can pre-check a payload it is about to
//! send, the server rejects anything above the bound.

use serde::{Deserialize, Serialize};

/// Points the bound allows per level reached.
const PLAUSIBLE_PER_LEVEL: u64 = 10_000;
/// Points the bound allows per alien defeated.
const PLAUSIBLE_PER_KILL: u64 = 200;

/// Body of `POST /api/game/save-score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub score: u64,
    #[serde(default)]
    pub aliens_defeated: u32,
    #[serde(default = "default_level")]
    pub level_reached: u32,
    /// Seconds survived.
    #[serde(default)]
    pub survival_time: u32,
    /// Whole percent, 0–100.
    #[serde(default)]
    pub accuracy: u32,
    #[serde(default)]
    pub shots_fired: u32,
    #[serde(default)]
    pub shots_hit: u32,
    #[serde(default)]
    pub powerups_collected: u32,
    #[serde(default = "default_combo")]
    pub max_combo: f32,
    #[serde(default = "default_mode")]
    pub game_mode: String,
    #[serde(default = "default_mode")]
    pub difficulty: String,
}

fn default_level() -> u32 {
    1
}

fn default_combo() -> f32 {
    1.0
}

fn default_mode() -> String {
    "normal".to_string()
}

impl ScoreSubmission {
    /// The anti-cheat ceiling: `levelReached × 10000 + aliensDefeated × 200`.
    pub fn max_reasonable_score(&self) -> u64 {
        self.level_reached as u64 * PLAUSIBLE_PER_LEVEL
            + self.aliens_defeated as u64 * PLAUSIBLE_PER_KILL
    }

    /// Whether the server will accept this score.
    pub fn is_plausible(&self) -> bool {
        self.score <= self.max_reasonable_score()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Body of the save-score success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScoreResponse {
    pub message: String,
    pub new_high_score: bool,
}

/// One row of `GET /api/game/leaderboard`, sorted descending by highScore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub high_score: u64,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Server-side ceiling on `?limit=`.
pub const LEADERBOARD_MAX_LIMIT: usize = 50;
/// Rows returned when no limit is given.
pub const LEADERBOARD_DEFAULT_LIMIT: usize = 10;

/// Resolve a requested leaderboard limit the way the server does:
/// default when absent, clamped to the ceiling otherwise.
pub fn clamp_leaderboard_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(LEADERBOARD_DEFAULT_LIMIT)
        .min(LEADERBOARD_MAX_LIMIT)
}
