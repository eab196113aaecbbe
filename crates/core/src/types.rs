use uuid::Uuid;

/// Project primary keys are opaque UUID strings.
pub type ProjectId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh project id (random UUIDv4, hyphenated).
pub fn new_project_id() -> ProjectId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn project_id_is_hyphenated_uuid() {
        let id = new_project_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn project_ids_do_not_repeat() {
        let ids: HashSet<ProjectId> = (0..1_000).map(|_| new_project_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
