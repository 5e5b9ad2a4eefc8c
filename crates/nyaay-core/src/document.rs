//! Document types offered by the draft generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DraftError;

/// The kind of legal document to draft. Each variant selects exactly one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Fir,
    Rti,
    LegalNotice,
    ConsumerComplaint,
}

impl DocumentType {
    /// Selector order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Fir,
        DocumentType::Rti,
        DocumentType::LegalNotice,
        DocumentType::ConsumerComplaint,
    ];

    /// Short identifier, also used as the download file-name prefix.
    pub fn slug(self) -> &'static str {
        match self {
            DocumentType::Fir => "fir",
            DocumentType::Rti => "rti",
            DocumentType::LegalNotice => "notice",
            DocumentType::ConsumerComplaint => "complaint",
        }
    }

    /// Tag used on the wire (`FIR`, `LEGAL_NOTICE`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            DocumentType::Fir => "FIR",
            DocumentType::Rti => "RTI",
            DocumentType::LegalNotice => "LEGAL_NOTICE",
            DocumentType::ConsumerComplaint => "CONSUMER_COMPLAINT",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DocumentType::Fir => "FIR (First Information Report)",
            DocumentType::Rti => "RTI Application",
            DocumentType::LegalNotice => "Legal Notice",
            DocumentType::ConsumerComplaint => "Consumer Complaint",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            DocumentType::Fir => "File a police complaint",
            DocumentType::Rti => "Right to Information request",
            DocumentType::LegalNotice => "Formal legal notification",
            DocumentType::ConsumerComplaint => "Consumer court filing",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accepts the slug (`notice`), the wire tag (`LEGAL_NOTICE`) or the
/// long form (`legal_notice`), case-insensitively.
impl FromStr for DocumentType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "fir" => Ok(DocumentType::Fir),
            "rti" => Ok(DocumentType::Rti),
            "notice" | "legal_notice" => Ok(DocumentType::LegalNotice),
            "complaint" | "consumer_complaint" => Ok(DocumentType::ConsumerComplaint),
            _ => Err(DraftError::UnknownDocumentType(s.to_string())),
        }
    }
}
