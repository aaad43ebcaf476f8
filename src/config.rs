//! Configuration management for the Moodify backend.
//!
//! This module loads all runtime configuration from environment variables
//! into a single [`Config`] struct, built once at startup and shared with
//! every request handler as an `Arc<Config>`. Request logic never reads
//! the environment directly.
//!
//! A `.env` file in the working directory is honored when present (loaded
//! in `main` before [`Config::from_env`] runs). Spotify endpoint URLs and
//! the frontend location carry defaults and only need to be set when
//! pointing the backend at a non-production Spotify or a relocated
//! frontend, e.g. in tests.

use std::env;

/// Port the HTTP server binds when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI registered with Spotify; must point at this
    /// backend's `/callback` route.
    pub redirect_uri: String,
    /// Base URL of the browser frontend the callback redirects back to.
    pub frontend_url: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Spotify authorization endpoint.
    pub auth_url: String,
    /// Spotify token endpoint (code exchange and refresh).
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
}

impl Config {
    /// Builds a `Config` from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and
    /// `SPOTIFY_REDIRECT_URI` are required. `FRONTEND_URL`, `PORT`,
    /// `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL` and
    /// `SPOTIFY_API_URL` fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a required variable is
    /// missing, or when `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_REDIRECT_URI")?,
            frontend_url: or_default("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            port: port_from_env()?,
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL),
        })
    }
}

fn require(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{} must be set", key))
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn port_from_env() -> Result<u16, String> {
    match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("PORT must be a port number, got '{}'", raw)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
