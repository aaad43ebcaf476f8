use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{
    config::Config,
    error::{Error, Result},
    types::TokenResponse,
};

/// Scopes requested from Spotify during authorization. The frontend player
/// needs playback control, streaming and playlist access.
pub const AUTH_SCOPES: [&str; 12] = [
    "user-read-playback-state",
    "user-modify-playback-state",
    "streaming",
    "app-remote-control",
    "user-read-currently-playing",
    "user-read-private",
    "user-read-recently-played",
    "playlist-read-private",
    "playlist-read-collaborative",
    "playlist-modify-public",
    "playlist-modify-private",
    "user-read-email",
];

/// Builds the Spotify authorization URL the browser is redirected to from
/// `/login`. Scopes are space-joined and percent-encoded, as is the
/// redirect URI.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
        auth_url = &config.auth_url,
        client_id = &config.client_id,
        scope = urlencoding::encode(&AUTH_SCOPES.join(" ")),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
    )
}

/// Basic authentication header value for the token endpoint:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(config: &Config) -> String {
    let credentials = format!("{}:{}", config.client_id, config.client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges an authorization code for access and refresh tokens.
///
/// An empty `code` (the callback was hit without one) is still forwarded;
/// Spotify rejects it and the rejection surfaces as
/// [`Error::UpstreamStatus`].
pub async fn exchange_code(config: &Config, code: &str) -> Result<TokenResponse> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header(header::AUTHORIZATION, basic_auth_header(config))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::UpstreamStatus(res.status()));
    }

    let body = res.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;
    Ok(token)
}

/// Obtains a fresh access token from a refresh token.
///
/// The response may omit `refresh_token`; the old one stays valid then.
pub async fn refresh_access_token(config: &Config, refresh_token: &str) -> Result<TokenResponse> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header(header::AUTHORIZATION, basic_auth_header(config))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::UpstreamStatus(res.status()));
    }

    let body = res.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;
    Ok(token)
}
