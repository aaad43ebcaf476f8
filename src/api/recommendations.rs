use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{config::Config, moods, spotify, warning};

pub async fn recommendations(
    Query(params): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Response {
    let access_token = params
        .get("access_token")
        .map(String::as_str)
        .unwrap_or_default();
    let emotion = params.get("emotion").map(String::as_str).unwrap_or_default();

    let seeds = moods::seeds_for(emotion);

    match spotify::recommendations::get_recommendations(&config, access_token, seeds).await {
        Ok(recommendations) => Json(recommendations).into_response(),
        Err(e) => {
            warning!("Recommendations fetch failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve recommendations" })),
            )
                .into_response()
        }
    }
}
