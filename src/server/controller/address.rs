use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        address::{UpdateUserAddressDto, UserAddressDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::Authenticated,
        model::{address::UpdateUserAddressParam, user::User},
        service::address::AddressService,
        state::AppState,
    },
};

/// Tag for grouping user address endpoints in OpenAPI documentation
pub static ADDRESS_TAG: &str = "address";

/// List the authenticated user's addresses.
///
/// # Access Control
/// - `User` - Only their own addresses
///
/// # Returns
/// - `200 OK` - Addresses ordered by title
/// - `401 Unauthorized` - Not authenticated as a user
/// - `404 Not Found` - User record no longer exists
#[utoipa::path(
    get,
    path = "/api/users/me/addresses",
    tag = ADDRESS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User addresses", body = Vec<UserAddressDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Authenticated(user): Authenticated<User>,
) -> Result<impl IntoResponse, AppError> {
    let service = AddressService::new(&state.db);

    let addresses: Vec<UserAddressDto> = service
        .list(&user.id)
        .await?
        .into_iter()
        .map(|address| address.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(addresses)))
}

/// Get one of the authenticated user's addresses.
///
/// # Access Control
/// - `User` - Only addresses in their own collection
///
/// # Returns
/// - `200 OK` - The address
/// - `400 Bad Request` - Address is not one of the user's addresses
/// - `401 Unauthorized` - Not authenticated as a user
/// - `404 Not Found` - User record no longer exists
#[utoipa::path(
    get,
    path = "/api/users/me/addresses/{address_id}",
    tag = ADDRESS_TAG,
    security(("bearer" = [])),
    params(
        ("address_id" = String, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "User address", body = UserAddressDto),
        (status = 400, description = "Address does not belong to the user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_address(
    State(state): State<AppState>,
    Authenticated(user): Authenticated<User>,
    Path(address_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AddressService::new(&state.db);

    let address = service.get(&user.id, &address_id).await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

/// Update one of the authenticated user's addresses.
///
/// Fields absent from the body keep their value. An empty `complement` clears it.
///
/// # Access Control
/// - `User` - Only addresses in their own collection
///
/// # Returns
/// - `200 OK` - The updated address
/// - `400 Bad Request` - Address is not one of the user's addresses, or invalid values
/// - `401 Unauthorized` - Not authenticated as a user
/// - `404 Not Found` - User record no longer exists
#[utoipa::path(
    put,
    path = "/api/users/me/addresses/{address_id}",
    tag = ADDRESS_TAG,
    security(("bearer" = [])),
    params(
        ("address_id" = String, Path, description = "Address id")
    ),
    request_body = UpdateUserAddressDto,
    responses(
        (status = 200, description = "Updated address", body = UserAddressDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_address(
    State(state): State<AppState>,
    Authenticated(user): Authenticated<User>,
    Path(address_id): Path<String>,
    Json(payload): Json<UpdateUserAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AddressService::new(&state.db);

    let param = UpdateUserAddressParam::from_dto(payload);
    let address = service.update(&user.id, &address_id, param).await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}
