use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{address, backoffice, diarist, schedule, websocket},
    docs::ApiDoc,
    state::AppState,
};

/// Builds the API routes together with the OpenAPI document describing them.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(backoffice::get_session))
        .routes(routes!(backoffice::refresh_session))
        .routes(routes!(backoffice::update_diarist_avatar))
        .routes(routes!(diarist::update_own_avatar))
        .routes(routes!(address::list_addresses))
        .routes(routes!(address::get_address, address::update_address))
        .routes(routes!(schedule::cancel_schedule))
        .routes(routes!(websocket::connect))
        .split_for_parts()
}
