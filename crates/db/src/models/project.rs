//! Project entity model and DTOs.

use dcx_core::mode::ProjectMode;
use dcx_core::steps::{StepPatch, StepSlots, MAX_LAST_STEP};
use dcx_core::types::{ProjectId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub project_id: ProjectId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub mode: ProjectMode,
    pub description: Option<String>,
    pub last_step: i64,
    pub step0: Option<String>,
    pub step1: Option<String>,
    pub step2: Option<String>,
    pub step3: Option<String>,
    pub step4: Option<String>,
    pub step5: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The six step columns as one record.
    pub fn steps(&self) -> StepSlots {
        StepSlots {
            step0: self.step0.clone(),
            step1: self.step1.clone(),
            step2: self.step2.clone(),
            step3: self.step3.clone(),
            step4: self.step4.clone(),
            step5: self.step5.clone(),
        }
    }
}

/// Full project view returned by `GET /projects/{project_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub project_id: ProjectId,
    pub title: String,
    pub mode: ProjectMode,
    pub description: Option<String>,
    pub last_step: i64,
    pub steps: StepSlots,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Project> for ProjectDetail {
    fn from(project: Project) -> Self {
        let steps = project.steps();
        Self {
            project_id: project.project_id,
            title: project.title,
            mode: project.mode,
            description: project.description,
            last_step: project.last_step,
            steps,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Listing row: never carries step content.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub mode: ProjectMode,
    pub last_step: i64,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `mode` stays a string here so an unknown value surfaces as a validation
/// error rather than a body deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub mode: String,
    pub description: Option<String>,
}

/// A validated project ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub mode: ProjectMode,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectResponse {
    pub project_id: ProjectId,
}

/// DTO for a partial update. Both fields are optional; unknown step keys
/// are dropped while deserializing `steps`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(range(
        min = 0,
        max = MAX_LAST_STEP,
        message = "last_step must be between 0 and 5"
    ))]
    pub last_step: Option<i64>,
    #[serde(default)]
    pub steps: Option<StepPatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectResponse {
    pub status: &'static str,
}

/// Filter applied by the project listing.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    /// Case-sensitive substring of `title`.
    pub query: Option<String>,
    pub mode: Option<ProjectMode>,
    pub limit: i64,
}
