use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::AppError,
    producer::{DisabledProducer, EventProducer, KafkaRestProducer},
    router,
    state::AppState,
    storage::{AvatarStorage, AVATAR_FOLDER},
    util,
};

/// Largest accepted request body, sized for avatar uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connects to the database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for object storage and the event proxy.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Selects the event producer: the Kafka REST proxy when configured, otherwise the
/// disabled producer.
pub fn setup_producer(
    config: &Config,
    client: reqwest::Client,
) -> Result<Arc<dyn EventProducer>, AppError> {
    let Some(kafka_rest_url) = &config.kafka_rest_url else {
        tracing::warn!("KAFKA_REST_URL not set, events will not be published");
        return Ok(Arc::new(DisabledProducer));
    };

    let base_url = util::url::parse_base_url("KAFKA_REST_URL", kafka_rest_url)?;

    Ok(Arc::new(KafkaRestProducer::new(client, base_url)))
}

/// Selects the avatar storage: object storage when configured, otherwise the local upload
/// directory.
pub fn setup_avatar_storage(
    config: &Config,
    client: reqwest::Client,
) -> Result<AvatarStorage, AppError> {
    let Some(object_storage_url) = &config.object_storage_url else {
        return Ok(AvatarStorage::Local {
            upload_dir: config.upload_dir.clone(),
        });
    };

    let bucket_url = util::url::parse_base_url("OBJECT_STORAGE_URL", object_storage_url)?;

    Ok(AvatarStorage::Object { client, bucket_url })
}

/// Assembles the application: API routes, static avatar files, Swagger UI and the
/// middleware layers shared by every route.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Configuration providing the local upload directory
pub fn build_app(state: AppState, config: &Config) -> Router {
    let (api, openapi) = router::router();

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest_service(
            "/files/avatar",
            ServeDir::new(config.upload_dir.join(AVATAR_FOLDER)),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
