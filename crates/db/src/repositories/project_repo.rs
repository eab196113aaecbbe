//! Repository for the `projects` table.

use chrono::Utc;
use dcx_core::steps::{StepPatch, StepSlot};
use dcx_core::types::new_project_id;

use crate::models::project::{NewProject, Project, ProjectFilter, ProjectSummary};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "project_id, title, mode, description, last_step, \
     step0, step1, step2, step3, step4, step5, created_at, updated_at";

/// Columns returned by listings (no step content).
const SUMMARY_COLUMNS: &str = "project_id, title, mode, last_step, updated_at";

/// Provides create, read, list and partial-update operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// The id is freshly generated, `last_step` starts at 0, every step slot
    /// starts empty and both timestamps are set to the same instant.
    pub async fn create(pool: &DbPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let project_id = new_project_id();
        let now = Utc::now();
        let query = format!(
            "INSERT INTO projects (project_id, title, mode, description, last_step, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&project_id)
            .bind(&input.title)
            .bind(input.mode.as_str())
            .bind(&input.description)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &DbPool, project_id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE project_id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`, most recently updated first.
    ///
    /// The text filter is a literal, case-sensitive substring match on the
    /// title; ties on `updated_at` are broken by `project_id`.
    pub async fn list(
        pool: &DbPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM projects
             WHERE (?1 IS NULL OR instr(title, ?1) > 0)
               AND (?2 IS NULL OR mode = ?2)
             ORDER BY updated_at DESC, project_id ASC
             LIMIT ?3"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(filter.query.as_deref())
            .bind(filter.mode.map(|mode| mode.as_str()))
            .bind(filter.limit)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update in a single statement.
    ///
    /// Only the slots named in `steps` are written (a `None` value clears the
    /// slot); `last_step` is written only when supplied. `updated_at` is
    /// always refreshed, even when nothing else changes.
    ///
    /// Returns `None` if no row with the given id exists, in which case
    /// nothing is written.
    pub async fn update(
        pool: &DbPool,
        project_id: &str,
        last_step: Option<i64>,
        steps: &StepPatch,
    ) -> Result<Option<Project>, sqlx::Error> {
        // Each slot binds a presence flag then its value; an unflagged slot
        // keeps its stored content.
        let query = format!(
            "UPDATE projects SET
                updated_at = ?1,
                last_step = COALESCE(?2, last_step),
                step0 = CASE WHEN ?3 THEN ?4 ELSE step0 END,
                step1 = CASE WHEN ?5 THEN ?6 ELSE step1 END,
                step2 = CASE WHEN ?7 THEN ?8 ELSE step2 END,
                step3 = CASE WHEN ?9 THEN ?10 ELSE step3 END,
                step4 = CASE WHEN ?11 THEN ?12 ELSE step4 END,
                step5 = CASE WHEN ?13 THEN ?14 ELSE step5 END
             WHERE project_id = ?15
             RETURNING {COLUMNS}"
        );

        tracing::debug!(
            project_id,
            last_step = ?last_step,
            slots = steps.len(),
            "Applying project update"
        );

        let mut q = sqlx::query_as::<_, Project>(&query)
            .bind(Utc::now())
            .bind(last_step);
        for slot in StepSlot::ALL {
            let write = steps.get(slot);
            q = q.bind(write.is_some()).bind(write.flatten());
        }
        q.bind(project_id).fetch_optional(pool).await
    }
}
