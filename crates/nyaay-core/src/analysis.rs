//! Upstream legal analysis consumed by the draft templates.

use serde::{Deserialize, Serialize};

/// A statute the analysis considers applicable to the user's situation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statute {
    /// e.g. "IPC Section 498A".
    pub citation: String,
    pub description: String,
}

impl Statute {
    pub fn new(citation: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            citation: citation.into(),
            description: description.into(),
        }
    }
}

/// Analysis of a user's query produced by the advisor service.
///
/// Every list may be empty; missing JSON keys deserialize as empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisResult {
    pub legal_issues: Vec<String>,
    pub applicable_statutes: Vec<Statute>,
    pub recommended_actions: Vec<String>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.legal_issues.is_empty()
            && self.applicable_statutes.is_empty()
            && self.recommended_actions.is_empty()
    }
}
