//! OpenAPI document of the HTTP API.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{
    address::ADDRESS_TAG, backoffice::BACKOFFICE_TAG, diarist::DIARIST_TAG,
    schedule::SCHEDULE_TAG, websocket::REALTIME_TAG,
};

/// Base document; paths are added by the router as routes are registered.
#[derive(OpenApi)]
#[openapi(
    info(title = "Marinetes API"),
    modifiers(&BearerSecurity),
    tags(
        (name = BACKOFFICE_TAG, description = "Back-office operations for employees"),
        (name = DIARIST_TAG, description = "Diarist profile"),
        (name = ADDRESS_TAG, description = "Addresses of the authenticated user"),
        (name = SCHEDULE_TAG, description = "Schedules of the authenticated user"),
        (name = REALTIME_TAG, description = "Live events for diarists")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by authenticated routes.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
