//! Auth wire contract: request/response payloads and the machine-readable
//! error codes the backend classifies failures into. Contract only — token
//! issuance and verification stay on the server.

use serde::{Deserialize, Serialize};

/// Machine-readable auth failure classes, surfaced as 401/403 alongside a
/// human message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    NoToken,
    InvalidToken,
    TokenExpired,
    UserNotFound,
    AccountDeactivated,
}

impl AuthErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthErrorCode::NoToken => "NO_TOKEN",
            AuthErrorCode::InvalidToken => "INVALID_TOKEN",
            AuthErrorCode::TokenExpired => "TOKEN_EXPIRED",
            AuthErrorCode::UserNotFound => "USER_NOT_FOUND",
            AuthErrorCode::AccountDeactivated => "ACCOUNT_DEACTIVATED",
        }
    }
}

/// Error envelope every failing endpoint returns: a human message plus a
/// machine-readable `error` code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn auth(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: code.as_str().to_string(),
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Per-user settings persisted with the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub difficulty: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            difficulty: "normal".to_string(),
        }
    }
}

/// The user record fields the game client consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub high_score: u64,
    #[serde(default)]
    pub total_games_played: u32,
    /// Seconds across all rounds.
    #[serde(default)]
    pub total_play_time: u64,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Success body of register (201) and login (200).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Success body of `GET /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserProfile,
}
