//! Student handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use domain::{
    CreateStudent, StudentResponse, EMAIL_TAKEN_MESSAGE, INVALID_EMAIL_MESSAGE, SUCCESS_MESSAGE,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/:id", get(get_student))
}

/// Get a student profile by ID
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.student_service.find_by_id(id).await?;
    Ok(Json(student))
}

/// Student login placeholder.
///
/// Accepts no credentials and always succeeds; it performs no authentication.
pub async fn login() -> &'static str {
    tracing::debug!("student login stub called");
    SUCCESS_MESSAGE
}

/// Register a new student account
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudent>,
) -> AppResult<&'static str> {
    let service = &state.student_service;

    if service.email_exists(&payload.email).await? {
        tracing::info!("email: {} already exists", payload.email);
        return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    if !service.validate_email_domain(&payload.email) {
        tracing::info!("You must enter a unimelb student email");
        return Err(AppError::conflict(INVALID_EMAIL_MESSAGE));
    }

    tracing::info!(
        "email: {}, number: {}",
        payload.email,
        payload.student_number
    );
    service.create_account(payload).await?;

    Ok(SUCCESS_MESSAGE)
}
