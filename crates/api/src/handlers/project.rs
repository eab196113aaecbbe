//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dcx_core::error::CoreError;
use dcx_core::listing::{non_empty_query, validate_project_limit};
use dcx_core::mode::ProjectMode;
use dcx_db::models::project::{
    CreateProject, CreateProjectResponse, NewProject, ProjectDetail, ProjectFilter,
    ProjectSummary, UpdateProject, UpdateProjectResponse,
};
use dcx_db::repositories::ProjectRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    /// Case-sensitive substring of the title. Empty means no filter.
    pub query: Option<String>,
    pub mode: Option<String>,
    pub limit: Option<i64>,
}

fn project_not_found(project_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: project_id.to_string(),
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<(StatusCode, Json<CreateProjectResponse>)> {
    input.validate()?;
    let mode: ProjectMode = input.mode.parse()?;

    let new_project = NewProject {
        title: input.title,
        mode,
        description: input.description,
    };
    let project = ProjectRepo::create(&state.pool, &new_project).await?;

    tracing::info!(
        project_id = %project.project_id,
        mode = %project.mode,
        "Project created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            project_id: project.project_id,
        }),
    ))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListProjectsParams>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    let limit = validate_project_limit(params.limit)?;
    let mode = params
        .mode
        .as_deref()
        .map(|m| m.parse::<ProjectMode>())
        .transpose()?;

    let filter = ProjectFilter {
        query: non_empty_query(params.query),
        mode,
        limit,
    };
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, &project_id)
        .await?
        .ok_or_else(|| project_not_found(&project_id))?;
    Ok(Json(project.into()))
}

/// PATCH /api/v1/projects/{project_id}
///
/// Writes `last_step` if given and only the step slots named in `steps`;
/// everything else is left as stored.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<UpdateProjectResponse>> {
    input.validate()?;
    let steps = input.steps.unwrap_or_default();

    let project = ProjectRepo::update(&state.pool, &project_id, input.last_step, &steps)
        .await?
        .ok_or_else(|| project_not_found(&project_id))?;

    tracing::info!(
        project_id = %project.project_id,
        last_step = project.last_step,
        slots = steps.len(),
        "Project updated"
    );

    Ok(Json(UpdateProjectResponse { status: "updated" }))
}
