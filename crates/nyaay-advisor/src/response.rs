//! Wire types for the advisor's `/chat/` endpoint.

use nyaay_core::AnalysisResult;
use serde::{Deserialize, Deserializer, Serialize};

/// A lawyer or NGO recommended by the advisor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    /// Phone numbers from the directory may arrive as JSON numbers.
    #[serde(deserialize_with = "string_or_number")]
    pub contact: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Uint(u64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Uint(n)) => n.to_string(),
        // Directory columns with gaps come back as floats (`9876543210.0`).
        Some(Raw::Float(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Some(Raw::Float(f)) => f.to_string(),
    })
}

/// Response to a free-text legal query. Fields the service adds beyond
/// these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub query: String,
    pub legal_issue: String,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub bias: Option<String>,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub lawyers: Option<Vec<Contact>>,
    #[serde(default)]
    pub ngos: Option<Vec<Contact>>,
}

impl ChatResponse {
    /// The part of the response the draft templates consume.
    ///
    /// The issue becomes the single legal issue; each non-blank advice line
    /// becomes a recommended action with any list marker stripped. The
    /// service does not return statutes.
    pub fn to_analysis(&self) -> AnalysisResult {
        let legal_issues = match self.legal_issue.trim() {
            "" => Vec::new(),
            issue => vec![issue.to_string()],
        };
        let recommended_actions = self
            .advice
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(strip_list_marker)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        AnalysisResult {
            legal_issues,
            applicable_statutes: Vec::new(),
            recommended_actions,
        }
    }
}

/// Strip a leading `- `, `* `, `• `, `1. ` or `1) ` marker and surrounding
/// whitespace. A marker only counts when whitespace follows it, so
/// `**bold**` and `1.5 lakh` are left alone.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    for bullet in ['-', '*', '•'] {
        if let Some(rest) = line.strip_prefix(bullet)
            && rest.starts_with(char::is_whitespace)
        {
            return rest.trim_start();
        }
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))
            && rest.starts_with(char::is_whitespace)
        {
            return rest.trim_start();
        }
    }
    line
}
