use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{config::Config, spotify, warning};

pub async fn refresh_token(
    Query(params): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Response {
    let refresh_token = params
        .get("refresh_token")
        .map(String::as_str)
        .unwrap_or_default();

    match spotify::auth::refresh_access_token(&config, refresh_token).await {
        Ok(token) => Json(token).into_response(),
        Err(e) => {
            warning!("Token refresh failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to refresh access token" })),
            )
                .into_response()
        }
    }
}
