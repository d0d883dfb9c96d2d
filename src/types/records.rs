use serde::Deserialize;
use serde_json::{Map, Value};

/// A user row from `/ai/data/users`. Only `user_id` is read; everything else
/// is carried through untouched. A row without an id still decodes so the
/// rows before it can be processed.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A job row from `/ai/data/jobs`. Fetched and counted, never inspected.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct JobRecord(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_extra_fields() {
        let user: UserRecord = serde_json::from_value(json!({
            "user_id": "u1",
            "role": "candidate",
            "skills": [{"name": "Rust"}]
        }))
        .unwrap();

        assert_eq!(user.user_id.as_deref(), Some("u1"));
        assert_eq!(user.attributes.get("role"), Some(&json!("candidate")));
        assert!(!user.attributes.contains_key("user_id"));
    }

    #[test]
    fn test_user_without_id_still_decodes() {
        let user: UserRecord = serde_json::from_value(json!({"role": "candidate"})).unwrap();
        assert!(user.user_id.is_none());
        assert_eq!(user.attributes.get("role"), Some(&json!("candidate")));
    }

    #[test]
    fn test_job_is_opaque() {
        let job: JobRecord = serde_json::from_value(json!("anything")).unwrap();
        assert_eq!(job.0, json!("anything"));
    }
}
