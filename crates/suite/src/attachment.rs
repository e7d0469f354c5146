use serde::Serialize;
use serde_json::Value;

/// Diagnostic payload attached to a scenario, e.g. the expected and actual
/// models of a failed comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub label: String,
    pub media_type: &'static str,
    pub content: Value,
}

impl Attachment {
    pub fn json(label: impl Into<String>, content: Value) -> Self {
        Self {
            label: label.into(),
            media_type: "application/json",
            content,
        }
    }

    /// Pretty-printed content, two-space indented.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.content).unwrap_or_else(|_| self.content.to_string())
    }
}
