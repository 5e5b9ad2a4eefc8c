//! Renderer: walks a template and concatenates resolved segments.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::analysis::AnalysisResult;
use crate::document::DocumentType;
use crate::profile::PartyProfile;
use crate::resolve::{resolve, resolve_section};
use crate::template::{Segment, template_for};

/// The date captured once per render. Both the incident-date default and the
/// closing date line derive from it, so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    /// `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    /// Short en-IN form, `D/M/YYYY`.
    pub fn locale_date(&self) -> String {
        self.today.format("%-d/%-m/%Y").to_string()
    }
}

/// Render a document. Never fails: absent fields become placeholders.
pub fn render(
    document_type: DocumentType,
    profile: &PartyProfile,
    analysis: Option<&AnalysisResult>,
    ctx: &RenderContext,
) -> String {
    let template = template_for(document_type);
    let mut out = String::with_capacity(2048);
    for segment in template.segments() {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Field(slot) => out.push_str(&resolve(slot, profile, analysis, ctx)),
            Segment::Section(section) => out.push_str(&resolve_section(section, analysis)),
        }
    }
    debug!(
        document_type = %document_type,
        bytes = out.len(),
        with_analysis = analysis.is_some(),
        "rendered draft"
    );
    out
}

/// Characters replaced with `_` in download names.
const UNSAFE_FILE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Suggested download name: `{slug}_{fullName-or-"draft"}_{YYYY-MM-DD}.txt`.
///
/// Spaces in the name are kept. Path separators, characters illegal on
/// common file systems and control characters become `_`.
pub fn download_name(
    document_type: DocumentType,
    profile: &PartyProfile,
    ctx: &RenderContext,
) -> String {
    let name: String = profile
        .full_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || UNSAFE_FILE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    let name = if name.is_empty() { "draft" } else { name.as_str() };
    format!("{}_{}_{}.txt", document_type.slug(), name, ctx.iso_date())
}

/// A rendered document together with its download name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub document_type: DocumentType,
    pub file_name: String,
    pub contents: String,
}

impl Draft {
    pub fn build(
        document_type: DocumentType,
        profile: &PartyProfile,
        analysis: Option<&AnalysisResult>,
        ctx: &RenderContext,
    ) -> Self {
        Self {
            document_type,
            file_name: download_name(document_type, profile, ctx),
            contents: render(document_type, profile, analysis, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Statute;
    use crate::profile::ProfileField;
    use crate::template::template_for;
    use pretty_assertions::assert_eq;

    fn ctx() -> RenderContext {
        RenderContext::fixed(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    fn asha() -> PartyProfile {
        PartyProfile {
            full_name: "Asha Devi".into(),
            address: "12 MG Road, Delhi".into(),
            incident_date: "2024-03-01".into(),
            description: "Domestic harassment reported".into(),
            police_station: "Connaught Place PS".into(),
            ..Default::default()
        }
    }

    fn full_profile() -> PartyProfile {
        PartyProfile {
            full_name: "Asha Devi".into(),
            father_or_guardian_name: "Ram Prasad".into(),
            address: "12 MG Road, Delhi".into(),
            phone: "+91 98765 43210".into(),
            email: "asha@example.in".into(),
            incident_location: "Karol Bagh".into(),
            incident_date: "2024-02-28".into(),
            police_station: "Connaught Place PS".into(),
            description: "Domestic harassment reported".into(),
        }
    }

    fn statutes() -> AnalysisResult {
        AnalysisResult {
            applicable_statutes: vec![Statute::new(
                "IPC Section 498A",
                "Cruelty by husband or relatives",
            )],
            ..Default::default()
        }
    }

    #[test]
    fn empty_profile_shows_every_placeholder() {
        let empty = PartyProfile::default();
        for ty in DocumentType::ALL {
            let out = render(ty, &empty, None, &ctx());
            for placeholder in template_for(ty).placeholders() {
                assert!(out.contains(placeholder), "{ty} missing {placeholder}");
            }
        }
    }

    #[test]
    fn supplied_values_replace_placeholders() {
        let profile = full_profile();
        for ty in DocumentType::ALL {
            let template = template_for(ty);
            let out = render(ty, &profile, None, &ctx());
            for field in template.profile_fields() {
                assert!(
                    out.contains(profile.get(field)),
                    "{ty} missing value for {field}"
                );
            }
            for placeholder in template.placeholders() {
                assert!(!out.contains(placeholder), "{ty} still shows {placeholder}");
            }
        }
    }

    #[test]
    fn whitespace_value_is_kept_verbatim() {
        let profile = PartyProfile {
            full_name: " ".into(),
            ..Default::default()
        };
        let out = render(DocumentType::Fir, &profile, None, &ctx());
        assert!(out.contains("I,  , son/daughter of"));
        assert!(!out.contains("[Your Name]"));
        assert_eq!(
            download_name(DocumentType::Fir, &profile, &ctx()),
            "fir_draft_2024-03-01.txt"
        );
    }

    #[test]
    fn render_is_deterministic_with_fixed_clock() {
        let a = statutes();
        for ty in DocumentType::ALL {
            assert_eq!(
                render(ty, &asha(), Some(&a), &ctx()),
                render(ty, &asha(), Some(&a), &ctx())
            );
        }
    }

    #[test]
    fn fir_scenario_without_analysis() {
        let out = render(DocumentType::Fir, &asha(), None, &ctx());
        assert!(out.starts_with("To,\nThe Officer In-Charge,\nConnaught Place PS"));
        assert!(out.contains("I, Asha Devi,"));
        assert!(out.contains("Domestic harassment reported"));
        assert!(!out.contains("Applicable Laws"));
    }

    #[test]
    fn fir_full_document() {
        let out = render(DocumentType::Fir, &asha(), Some(&statutes()), &ctx());
        let expected = "\
To,
The Officer In-Charge,
Connaught Place PS

Subject: First Information Report

Sir/Madam,

I, Asha Devi, son/daughter of [Father's Name], resident of 12 MG Road, Delhi, would like to lodge a complaint regarding the following incident:

Date of Incident: 2024-03-01
Location: [Location of Incident]

Details of the Complaint:
Domestic harassment reported

Applicable Laws:
- IPC Section 498A: Cruelty by husband or relatives

I request you to register an FIR and take necessary action as per law.

Yours sincerely,
Asha Devi
Contact: [Phone Number]
Email: [Email Address]
Date: 1/3/2024
";
        assert_eq!(out, expected);
    }

    #[test]
    fn fir_without_statutes_has_no_gap() {
        let out = render(
            DocumentType::Fir,
            &asha(),
            Some(&AnalysisResult::default()),
            &ctx(),
        );
        assert!(out.contains(
            "Domestic harassment reported\n\nI request you to register an FIR"
        ));
    }

    #[test]
    fn fir_description_falls_back_to_recommended_actions() {
        let mut profile = asha();
        profile.set(ProfileField::Description, "");
        let analysis = AnalysisResult {
            recommended_actions: vec![
                "File a complaint with local police station".into(),
                "Approach Protection Officer under DV Act".into(),
            ],
            ..Default::default()
        };
        let out = render(DocumentType::Fir, &profile, Some(&analysis), &ctx());
        assert!(out.contains(
            "Details of the Complaint:\n\
             File a complaint with local police station\n\
             Approach Protection Officer under DV Act\n"
        ));
        assert!(!out.contains("[Describe the incident in detail]"));
    }

    #[test]
    fn rti_scenario() {
        let out = render(DocumentType::Rti, &asha(), None, &ctx());
        assert!(out.contains(
            "Under the Right to Information Act, 2005, I Asha Devi, request the following information:\n\n\
             1. Domestic harassment reported\n"
        ));
        assert!(out.contains("Section 6(3) of the RTI Act"));
        assert!(out.contains("\nDate: 1/3/2024\n"));
    }

    #[test]
    fn rti_ignores_analysis() {
        assert_eq!(
            render(DocumentType::Rti, &asha(), Some(&statutes()), &ctx()),
            render(DocumentType::Rti, &asha(), None, &ctx())
        );
    }

    #[test]
    fn legal_notice_lists_provisions() {
        let out = render(DocumentType::LegalNotice, &asha(), Some(&statutes()), &ctx());
        assert!(out.starts_with("LEGAL NOTICE\n\nTO:\n[Recipient Name]"));
        assert!(out.contains("FROM:\nAsha Devi\n12 MG Road, Delhi\n"));
        assert!(out.contains("called upon to Domestic harassment reported within 15 days"));
        assert!(out.contains(
            "Legal Provisions:\n- IPC Section 498A: Cruelty by husband or relatives\n\nTAKE FURTHER NOTICE"
        ));
        assert!(out.contains("Dated: 1/3/2024"));
    }

    #[test]
    fn legal_notice_without_statutes_elides_section() {
        let out = render(DocumentType::LegalNotice, &asha(), None, &ctx());
        assert!(!out.contains("Legal Provisions"));
        assert!(out.contains("interest and costs.\n\nTAKE FURTHER NOTICE"));
    }

    #[test]
    fn consumer_complaint_caption_and_facts() {
        let out = render(DocumentType::ConsumerComplaint, &asha(), None, &ctx());
        assert!(out.starts_with("CONSUMER COMPLAINT\n"));
        assert!(out.contains("[Name of opposite party]\n[Address of opposite party]"));
        assert!(out.contains("from the opposite party on 2024-03-01.\n\n2. Domestic harassment reported\n"));
        assert!(out.contains("d) Cost of litigation\n"));
        assert!(out.ends_with("Asha Devi\n(Complainant)\n"));
    }

    #[test]
    fn both_dates_come_from_one_clock() {
        let ctx = RenderContext::fixed(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap());
        let out = render(DocumentType::ConsumerComplaint, &PartyProfile::default(), None, &ctx);
        assert!(out.contains("opposite party on 2025-11-09."));
        assert!(out.contains("\nDate: 9/11/2025\n"));
    }

    #[test]
    fn download_name_keeps_spaces() {
        assert_eq!(
            download_name(DocumentType::Fir, &asha(), &ctx()),
            "fir_Asha Devi_2024-03-01.txt"
        );
    }

    #[test]
    fn download_name_defaults_to_draft() {
        let blank = PartyProfile {
            full_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            download_name(DocumentType::LegalNotice, &blank, &ctx()),
            "notice_draft_2024-03-01.txt"
        );
    }

    #[test]
    fn download_name_replaces_unsafe_characters() {
        let profile = PartyProfile {
            full_name: " A/B:\t\"C\" ".into(),
            ..Default::default()
        };
        assert_eq!(
            download_name(DocumentType::ConsumerComplaint, &profile, &ctx()),
            "complaint_A_B___C__2024-03-01.txt"
        );
    }

    #[test]
    fn draft_bundles_name_and_contents() {
        let draft = Draft::build(DocumentType::Rti, &asha(), None, &ctx());
        assert_eq!(draft.file_name, "rti_Asha Devi_2024-03-01.txt");
        assert_eq!(draft.contents, render(DocumentType::Rti, &asha(), None, &ctx()));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["documentType"], "RTI");
    }
}
