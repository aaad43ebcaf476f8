use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{config::Config, spotify, types::TokenResponse, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Response {
    // Spotify omits `code` when the user denies the grant; the empty code
    // is forwarded anyway and the token endpoint rejects it.
    let code = params.get("code").map(String::as_str).unwrap_or_default();

    match spotify::auth::exchange_code(&config, code).await {
        Ok(token) => (
            StatusCode::FOUND,
            [(header::LOCATION, frontend_redirect_url(&config, &token))],
        )
            .into_response(),
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve access token",
            )
                .into_response()
        }
    }
}

/// Builds the frontend URL the browser is bounced to after a successful
/// code exchange. Every interpolated value is percent-encoded.
pub fn frontend_redirect_url(config: &Config, token: &TokenResponse) -> String {
    format!(
        "{frontend}/emotion-detection?access_token={access_token}&refresh_token={refresh_token}&scope={scope}",
        frontend = &config.frontend_url,
        access_token = urlencoding::encode(&token.access_token),
        refresh_token = urlencoding::encode(token.refresh_token.as_deref().unwrap_or_default()),
        scope = urlencoding::encode(&token.scope),
    )
}
