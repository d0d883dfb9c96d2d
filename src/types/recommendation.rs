use serde::Serialize;
use serde_json::{Map, Value};

pub const MODEL_VERSION: &str = "v1.0";
pub const PLACEHOLDER_SKILLS: [&str; 2] = ["Python", "System Design"];
pub const PLACEHOLDER_SCORE: f64 = 0.95;

/// Body of `POST /ai/recommendations/update`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationPayload {
    pub user_id: String,
    pub positive_signals: PositiveSignals,
    pub negative_signals: Map<String, Value>,
    pub suppression_rules: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositiveSignals {
    pub model_version: String,
    pub inferred_skills: Vec<String>,
    pub score: f64,
}

impl Default for PositiveSignals {
    fn default() -> Self {
        Self {
            model_version: MODEL_VERSION.to_string(),
            inferred_skills: PLACEHOLDER_SKILLS.iter().map(|s| s.to_string()).collect(),
            score: PLACEHOLDER_SCORE,
        }
    }
}

impl RecommendationPayload {
    /// Fixed-shape payload for one user. No model runs yet: positive signals
    /// are static and the negative/suppression maps stay empty.
    pub fn placeholder(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            positive_signals: PositiveSignals::default(),
            negative_signals: Map::new(),
            suppression_rules: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_wire_shape() {
        let payload = RecommendationPayload::placeholder("user-7");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "user_id": "user-7",
                "positive_signals": {
                    "model_version": "v1.0",
                    "inferred_skills": ["Python", "System Design"],
                    "score": 0.95
                },
                "negative_signals": {},
                "suppression_rules": {}
            })
        );
    }
}
