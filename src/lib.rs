//! Moodify Backend Library
//!
//! This library implements the backend for the Moodify emotion-detection
//! player. It mediates the Spotify OAuth2 authorization-code flow for a
//! browser frontend and relays emotion-seeded recommendation queries to
//! the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers for the public endpoints
//! - `config` - Configuration loaded once from environment variables
//! - `error` - Upstream failure taxonomy
//! - `moods` - Static emotion-to-seed lookup table
//! - `server` - Axum router and server startup
//! - `spotify` - Spotify Web API client (token and recommendation calls)
//! - `types` - Response schemas for the upstream calls
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use moodify_backend::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("configuration");
//!     server::start_api_server(Arc::new(config)).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod moods;
pub mod server;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by
/// the provided message. Used for general status updates such as the
/// startup banner.
///
/// # Example
///
/// ```
/// info!("Backend server running on http://localhost:{}", port);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable startup errors only; request handlers never
/// terminate the process.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, in particular failed upstream calls that
/// are about to surface as an HTTP 500 to the caller.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
