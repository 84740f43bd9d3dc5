//! Handlers for `/subjects`.
//!
//! Submissions are bound from `application/x-www-form-urlencoded` bodies and
//! reviewed before anything touches the store. A rejected submission is
//! answered with 422 and the bound form plus its failures; an accepted one
//! redirects to the list.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, warn};

use gestor_core::responses::{SubjectFormResponse, SubjectListResponse};
use gestor_core::{Assessment, CourseSubject, SubjectDraft, SubjectForm};

use super::{ApiError, AppState, SUBJECTS_PATH};

pub async fn list(State(state): State<AppState>) -> Result<Json<SubjectListResponse>, ApiError> {
    let subjects = state.store.list_all().await?;
    debug!(count = subjects.len(), "listing subjects");
    Ok(Json(subjects.into()))
}

/// Blank form for a new subject, with the default area pre-filled.
pub async fn new_form() -> Json<SubjectFormResponse> {
    Json(SubjectFormResponse {
        subject: SubjectDraft::default(),
        failures: Vec::new(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Form<SubjectForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(mut form) = payload.map_err(bad_form)?;
    // Ids are assigned by the store.
    form.id = None;

    let assessment = form.review();
    if !assessment.is_valid() {
        return Ok(rejected(assessment));
    }

    state.store.insert(&assessment.subject).await?;
    Ok(Redirect::to(SUBJECTS_PATH).into_response())
}

pub async fn detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CourseSubject>, ApiError> {
    fetch(&state, &raw_id).await.map(Json)
}

/// Edit form pre-filled with the stored subject.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<SubjectFormResponse>, ApiError> {
    let subject = fetch(&state, &raw_id).await?;
    Ok(Json(SubjectFormResponse {
        subject: subject.into(),
        failures: Vec::new(),
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Form<SubjectForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    let Form(form) = payload.map_err(bad_form)?;

    let mut assessment = form.review();
    if let Some(body_id) = assessment.subject.id {
        if body_id != id {
            return Err(ApiError::BadRequest(format!(
                "Form id {body_id} does not match subject {id}."
            )));
        }
    }
    assessment.subject.id = Some(id);

    if !assessment.is_valid() {
        return Ok(rejected(assessment));
    }

    state.store.replace(id, &assessment.subject).await?;
    Ok(Redirect::to(SUBJECTS_PATH).into_response())
}

/// Delete confirmation: the subject about to be removed.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CourseSubject>, ApiError> {
    fetch(&state, &raw_id).await.map(Json)
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id).await?;
    Ok(Redirect::to(SUBJECTS_PATH).into_response())
}

async fn fetch(state: &AppState, raw_id: &str) -> Result<CourseSubject, ApiError> {
    let id = parse_id(raw_id)?;
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("A subject id is required.".into()));
    }
    trimmed
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("'{raw}' is not a valid subject id.")))
}

fn bad_form(rejection: FormRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

fn rejected(assessment: Assessment) -> Response {
    warn!(
        failures = assessment.failures.len(),
        code = %assessment.subject.code,
        "subject submission rejected"
    );
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(SubjectFormResponse::from(assessment)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_padded_integers() {
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
    }

    #[test]
    fn parse_id_rejects_blank_and_garbage() {
        assert!(matches!(parse_id(""), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_id("abc"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(ApiError::BadRequest(_))));
    }
}
