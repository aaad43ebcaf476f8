//! # API Module
//!
//! HTTP endpoints of the Moodify backend. Each handler performs at most
//! one outbound Spotify call and maps any failure to a fixed 500 response;
//! there is no shared mutable state across requests.
//!
//! ## Endpoints
//!
//! - [`login`] - Redirects the browser to Spotify's authorization page
//!   with the full scope list.
//! - [`callback`] - Exchanges the authorization code for tokens and
//!   bounces the browser back to the frontend with the tokens as query
//!   parameters.
//! - [`refresh_token`] - Exchanges a refresh token for a fresh access
//!   token and returns the token response as JSON.
//! - [`recommendations`] - Looks up the emotion's seed profile and relays
//!   a recommendation query on behalf of the caller.
//! - [`health`] - Health check for monitoring.
//!
//! Query parameters are taken as-is; missing ones are forwarded upstream
//! as empty values rather than rejected locally.

mod callback;
mod health;
mod login;
mod recommendations;
mod refresh;

pub use callback::{callback, frontend_redirect_url};
pub use health::health;
pub use login::login;
pub use recommendations::recommendations;
pub use refresh::refresh_token;
