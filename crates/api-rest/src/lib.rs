//! # API REST
//!
//! REST API for the recipe catalog.
//!
//! Handles:
//! - HTTP endpoints with axum, one handler per `RecipeService` operation
//! - Mapping `RecipeError` kinds onto status codes with `{message}` bodies
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, request tracing)

#![warn(rust_2018_idioms)]

use api_shared::{HealthRes, HealthService, MessageRes};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use recipe_core::constants::DELETED_MESSAGE;
use recipe_core::{ErrorKind, Recipe, RecipeDraft, RecipeError, RecipeId, RecipeService};
use std::future::Future;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    recipe_service: RecipeService,
}

impl AppState {
    pub fn new(recipe_service: RecipeService) -> Self {
        Self { recipe_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_recipes,
        get_recipe,
        create_recipe,
        update_recipe,
        delete_recipe,
    ),
    components(schemas(HealthRes, MessageRes, Recipe, RecipeDraft))
)]
pub struct ApiDoc;

/// Builds the full router: recipe routes, health, Swagger UI, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
/// Returns an error if the HTTP server fails while running.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Every failure a handler can report.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a JSON object of the expected shape.
    MalformedBody(String),
    Recipe(RecipeError),
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        ApiError::Recipe(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MalformedBody(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Recipe(err) => {
                let status = match err.kind() {
                    ErrorKind::ClientFault => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::ServerFault => {
                        tracing::error!("recipe store error: {:?}", err);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
        };

        (status, Json(MessageRes { message })).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    responses(
        (status = 200, description = "Every recipe, in store order", body = [Recipe]),
        (status = 500, description = "Store unreachable", body = MessageRes)
    )
)]
/// List all recipes.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipe_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, description = "Recipe not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Recipe>> {
    Ok(Json(state.recipe_service.get(&RecipeId::new(id)).await?))
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Missing or empty field, or malformed body", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new recipe.
///
/// All four content fields are required. The response carries the store-assigned `_id`.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON, or
/// - any of `title`, `ingredients`, `instructions`, `category` is missing or empty.
#[axum::debug_handler]
async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let Json(draft) = body?;
    tracing::debug!("incoming recipe: {:?}", draft);

    let recipe = state.recipe_service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 400, description = "Missing or empty field, or malformed body", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Replace a recipe.
///
/// Update is total replacement: all four content fields are required, as for create.
#[axum::debug_handler]
async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> ApiResult<Json<Recipe>> {
    let Json(draft) = body?;
    let recipe = state
        .recipe_service
        .update(&RecipeId::new(id), draft)
        .await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageRes>> {
    state.recipe_service.delete(&RecipeId::new(id)).await?;
    Ok(Json(MessageRes::new(DELETED_MESSAGE)))
}
