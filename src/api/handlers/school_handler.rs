//! School handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use domain::{
    CreateSchool, SchoolResponse, UpdateSchool, EMAIL_TAKEN_MESSAGE, SCHOOL_UPDATED_MESSAGE,
    SUCCESS_MESSAGE,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// Create school routes
pub fn school_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/:id", get(get_school).put(update_school))
}

/// Get a school profile by ID
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SchoolResponse>> {
    let school = state.school_service.find_by_id(id).await?;
    Ok(Json(school))
}

/// Register a new school account
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSchool>,
) -> AppResult<&'static str> {
    if state.school_service.email_exists(&payload.email).await? {
        tracing::info!("email: {} already exists", payload.email);
        return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    tracing::info!(
        "email: {}, name: {}",
        payload.email,
        payload.school_name.as_deref().unwrap_or_default()
    );
    state.school_service.create_account(payload).await?;

    Ok(SUCCESS_MESSAGE)
}

/// Replace a school's profile fields
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateSchool>,
) -> AppResult<&'static str> {
    state.school_service.update_account(id, payload).await?;
    tracing::info!(id, "school profile updated");

    Ok(SCHOOL_UPDATED_MESSAGE)
}
