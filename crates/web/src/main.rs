use anyhow::Context;
use axum::{Extension, Router, http::HeaderValue, http::Method, http::header::CONTENT_TYPE};
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::account::handlers::register,
        features::account::handlers::login,
        features::account::handlers::logout,
        features::account::handlers::get_account,
        features::exercises::handlers::list_exercises,
        features::exercises::handlers::get_exercise,
        features::exercises::handlers::create_exercise,
        features::exercises::handlers::update_exercise,
        features::exercises::handlers::delete_exercise,
        features::muscle_groups::handlers::list_muscle_groups,
        features::muscle_groups::handlers::create_muscle_group,
        features::muscle_groups::handlers::delete_muscle_group,
        features::entries::handlers::list_entries,
        features::entries::handlers::get_entry,
        features::entries::handlers::create_entry,
        features::entries::handlers::update_entry,
        features::entries::handlers::delete_entry,
        features::sets::handlers::list_sets,
        features::sets::handlers::get_set,
        features::sets::handlers::create_set,
        features::sets::handlers::update_set,
        features::sets::handlers::delete_set,
        features::trainings::handlers::list_trainings,
        features::trainings::handlers::get_training,
        features::trainings::handlers::create_training,
        features::trainings::handlers::update_training,
        features::trainings::handlers::delete_training,
        features::training_exercises::handlers::create_training_exercise,
        features::training_exercises::handlers::update_training_exercise,
        features::training_exercises::handlers::delete_training_exercise,
        features::user_weights::handlers::list_user_weights,
        features::user_weights::handlers::get_user_weight,
        features::user_weights::handlers::create_user_weight,
        features::user_weights::handlers::update_user_weight,
        features::user_weights::handlers::delete_user_weight,
        features::enums::handlers::muscle_group_values,
        features::enums::handlers::muscle_role_values,
    ),
    components(
        schemas(
            storage::dto::account::RegisterRequest,
            storage::dto::account::LoginRequest,
            storage::dto::account::UserResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::UpdateExerciseRequest,
            storage::dto::exercise::MuscleGroupTag,
            storage::dto::exercise::CreateExerciseMuscleGroupRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::dto::exercise::ExerciseMuscleGroupResponse,
            storage::dto::entry::CreateExerciseEntryRequest,
            storage::dto::entry::UpdateExerciseEntryRequest,
            storage::dto::entry::ExerciseEntryResponse,
            storage::dto::set::CreateExerciseSetRequest,
            storage::dto::set::UpdateExerciseSetRequest,
            storage::dto::set::ExerciseSetResponse,
            storage::dto::training::CreateTrainingRequest,
            storage::dto::training::UpdateTrainingRequest,
            storage::dto::training::TrainingExerciseItem,
            storage::dto::training::CreateTrainingExerciseRequest,
            storage::dto::training::UpdateTrainingExerciseRequest,
            storage::dto::training::TrainingResponse,
            storage::dto::training::TrainingExerciseResponse,
            storage::dto::user_weight::CreateUserWeightRequest,
            storage::dto::user_weight::UpdateUserWeightRequest,
            storage::dto::user_weight::UserWeightResponse,
            storage::models::MuscleGroup,
            storage::models::MuscleRole,
        )
    ),
    tags(
        (name = "account", description = "Registration, login and session management"),
        (name = "exercises", description = "Exercise catalog endpoints"),
        (name = "exercise-muscle-groups", description = "Muscle-group tagging endpoints"),
        (name = "exercise-entries", description = "Logged exercise session endpoints"),
        (name = "exercise-sets", description = "Logged set endpoints with derived estimates"),
        (name = "trainings", description = "Training template endpoints"),
        (name = "training-exercises", description = "Training template composition endpoints"),
        (name = "user-weights", description = "Body-weight measurement endpoints"),
        (name = "enums", description = "Enumeration value endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new(auth::SESSION_COOKIE),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Liftbook API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origin
                .parse::<HeaderValue>()
                .context("ALLOWED_ORIGIN is not a valid origin")?,
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api/account", features::account::routes::routes())
        .nest("/api/exercises", features::exercises::routes::routes())
        .nest(
            "/api/exercise-muscle-groups",
            features::muscle_groups::routes::routes(),
        )
        .nest("/api/exercise-entries", features::entries::routes::routes())
        .nest("/api/exercise-sets", features::sets::routes::routes())
        .nest("/api/trainings", features::trainings::routes::routes())
        .nest(
            "/api/training-exercises",
            features::training_exercises::routes::routes(),
        )
        .nest("/api/user-weights", features::user_weights::routes::routes())
        .nest("/api/enums", features::enums::routes::routes())
        .layer(Extension(config.clone()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listen address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
