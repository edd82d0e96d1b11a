use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub technologies: String,
    pub required_team_size: i32,
    pub created_by: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Project {
    /// Technologies are stored as one comma-separated string. This is the
    /// only place that knows the encoding; callers get a list.
    pub fn technology_list(&self) -> Vec<String> {
        split_technologies(&self.technologies)
    }
}

pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_technologies(items: &[String]) -> String {
    items.join(",")
}

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub status: String,
    pub technologies: String,
    pub required_team_size: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub technologies: Option<String>,
    pub required_team_size: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_entries() {
        assert_eq!(split_technologies("Go, Rust ,TypeScript"), vec!["Go", "Rust", "TypeScript"]);
    }

    #[test]
    fn empty_string_yields_no_entries() {
        assert!(split_technologies("").is_empty());
        assert!(split_technologies(" , ").is_empty());
    }

    #[test]
    fn join_is_plain_comma_separated() {
        let items = vec!["Go".to_string(), "Rust".to_string()];
        assert_eq!(join_technologies(&items), "Go,Rust");
    }
}
