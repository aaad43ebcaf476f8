//! # Spotify Integration Module
//!
//! Client layer for the three outbound Spotify Web API calls the backend
//! performs. It handles authentication headers, form encoding and typed
//! response decoding, leaving the HTTP surface to [`crate::api`].
//!
//! ## Submodules
//!
//! - [`auth`] - Authorization URL construction and the two token-endpoint
//!   calls (authorization-code exchange and refresh), both authenticated
//!   with a Basic header derived from the client credentials.
//! - [`recommendations`] - Seed-biased recommendation fetch with Bearer
//!   authentication from a caller-supplied access token.
//!
//! ## Error Handling
//!
//! Every call distinguishes transport failures, non-2xx vendor responses
//! and schema mismatches as [`crate::error::Error`] variants. No call is
//! retried; each request either succeeds or fails exactly once and the
//! route layer maps any failure to its fixed 500 response.
//!
//! ## API Coverage
//!
//! - `GET /authorize` - user authorization (URL built here, visited by the
//!   user's browser)
//! - `POST /api/token` - token exchange and refresh
//! - `GET /v1/recommendations` - seeded recommendations

pub mod auth;
pub mod recommendations;
