use serde::{Deserialize, Serialize};

pub type StructuredAnalysis = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub overall_score: f64,
    pub readability_score: f64,
    pub ats_score: f64,
}

/// Body of a successful reply from the scoring endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub structured_analysis: StructuredAnalysis,
    pub metrics: Metrics,
    /// Raw evaluation text the server derived the metrics from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResult {
    pub error: Option<serde_json::Value>,
}

impl ErrorResult {
    /// Text shown for a failed reply. A non-string `error` is shown as JSON;
    /// a reply without one falls back to the raw body.
    pub fn message(self, raw_body: &[u8]) -> String {
        match self.error {
            Some(serde_json::Value::String(msg)) => msg,
            Some(other) => other.to_string(),
            None => String::from_utf8_lossy(raw_body).into_owned(),
        }
    }
}
