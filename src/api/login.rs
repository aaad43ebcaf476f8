use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{config::Config, spotify};

pub async fn login(Extension(config): Extension<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, spotify::auth::authorize_url(&config))],
    )
}
