use serde::Deserialize;

// ===== Data API Envelope =====

/// One page of records from a `/ai/data/*` endpoint.
///
/// A body without `data` is treated as an empty page.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPage<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> DataPage<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the server reported records past this page
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_missing_data_is_empty() {
        let page: DataPage<Value> = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_next_cursor_null() {
        let page: DataPage<Value> =
            serde_json::from_str(r#"{"data":[{"job_id":"j1"}],"next_cursor":null}"#).unwrap();
        assert_eq!(page.len(), 1);
        assert!(!page.has_more());
    }

    #[test]
    fn test_next_cursor_present() {
        let page: DataPage<Value> =
            serde_json::from_str(r#"{"data":[],"next_cursor":"ck42"}"#).unwrap();
        assert!(page.has_more());
        assert_eq!(page.next_cursor.as_deref(), Some("ck42"));
    }
}
