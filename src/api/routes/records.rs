//! Read-only record listings, in the same order the terminal prints them.

use axum::{extract::State, routing::get, Json, Router};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::db::{Contact, Experience, Project, Skill};

/// Creates record routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/skills", get(list_skills))
        .route("/contacts", get(list_contacts))
        .route("/experiences", get(list_experience))
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.store.projects().await?))
}

/// Highest proficiency first.
async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(state.store.skills().await?))
}

/// Grouped by contact type, alphabetically.
async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.store.contacts().await?))
}

async fn list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(state.store.experience().await?))
}
