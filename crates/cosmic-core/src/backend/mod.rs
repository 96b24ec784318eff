//! Backend REST contract types — interfaces only.
//!
//! The engine never talks HTTP; the bridge serializes these payloads and
//! the browser posts them. A failed save degrades to a notification on the
//! JS side; nothing here retries or panics.

pub mod auth;
pub mod score;

pub use auth::{AuthErrorCode, AuthResponse, ErrorResponse, LoginRequest, RegisterRequest, UserProfile, UserSettings, VerifyResponse};
pub use score::{
    clamp_leaderboard_limit, LeaderboardEntry, SaveScoreResponse, ScoreSubmission,
    LEADERBOARD_DEFAULT_LIMIT, LEADERBOARD_MAX_LIMIT,
};
