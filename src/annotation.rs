//! Annotation payloads recovered from asset comments.
//!
//! An asset may carry a comment such as `METADATA {"source":"scan"}`. The first comment
//! that starts with the configured prefix is the annotation; its remainder is parsed as
//! JSON when possible and kept verbatim otherwise.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Structured(Value),
    Text(String),
    Missing,
}

impl Annotation {
    pub fn from_comments<S: AsRef<str>>(comments: &[S], prefix: &str) -> Self {
        let Some(payload) = comments.iter().find_map(|comment| comment.as_ref().strip_prefix(prefix)) else {
            return Annotation::Missing;
        };
        match serde_json::from_str::<Value>(payload) {
            Ok(value) => Annotation::Structured(value),
            Err(err) => {
                tracing::debug!(error = %err, "annotation is not JSON, keeping raw text");
                Annotation::Text(payload.to_string())
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Annotation::Missing)
    }

    /// Indented form used by the metadata popup.
    pub fn pretty_text(&self, placeholder: &str) -> String {
        match self {
            Annotation::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Annotation::Text(text) => text.clone(),
            Annotation::Missing => placeholder.to_string(),
        }
    }

    /// Single-line form used by list rows.
    pub fn compact_text(&self, placeholder: &str) -> String {
        match self {
            Annotation::Structured(value) => value.to_string(),
            Annotation::Text(text) => text.clone(),
            Annotation::Missing => placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "METADATA ";

    #[test]
    fn json_payload_is_pretty_printed() {
        let annotation = Annotation::from_comments(&["METADATA {\"a\":1}"], PREFIX);
        assert_eq!(annotation.pretty_text("No Metadata"), "{\n  \"a\": 1\n}");
        assert_eq!(annotation.compact_text("No Metadata"), "{\"a\":1}");
    }

    #[test]
    fn invalid_json_falls_back_to_raw_text() {
        let annotation = Annotation::from_comments(&["METADATA not-json"], PREFIX);
        assert_eq!(annotation, Annotation::Text("not-json".to_string()));
        assert_eq!(annotation.pretty_text("No Metadata"), "not-json");
    }

    #[test]
    fn no_match_uses_placeholder() {
        let annotation = Annotation::from_comments(&["generated by exporter", "metadata lowercase"], PREFIX);
        assert!(annotation.is_missing());
        assert_eq!(annotation.pretty_text("No Metadata"), "No Metadata");
        let empty: [&str; 0] = [];
        assert!(Annotation::from_comments(&empty, PREFIX).is_missing());
    }

    #[test]
    fn first_matching_comment_wins_and_key_order_is_kept() {
        let comments = ["exporter 1.2", "METADATA {\"z\":1,\"a\":[true,null]}", "METADATA {\"ignored\":true}"];
        let annotation = Annotation::from_comments(&comments, PREFIX);
        assert_eq!(annotation.pretty_text(""), "{\n  \"z\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
    }
}
