//! Field resolver: turns a template slot into text.
//!
//! Scalar slots resolve in order: the profile value verbatim, then the
//! slot's list fallback (if any), then the placeholder or the render date.
//! List sections resolve to the empty string when there is nothing to list.

use crate::analysis::AnalysisResult;
use crate::profile::PartyProfile;
use crate::render::RenderContext;
use crate::template::{Fallback, FieldRef, ListField, Section, Slot};

pub fn resolve(
    slot: &Slot,
    profile: &PartyProfile,
    analysis: Option<&AnalysisResult>,
    ctx: &RenderContext,
) -> String {
    let field = match slot.field {
        FieldRef::RenderDate => return ctx.locale_date(),
        FieldRef::Profile(field) => field,
    };

    if let Some(value) = profile.value(field) {
        return value.to_string();
    }

    if let Some(list) = slot.list {
        let joined = resolve_list(list, analysis);
        if !joined.is_empty() {
            return joined;
        }
    }

    match slot.fallback {
        Fallback::Placeholder(placeholder) => placeholder.to_string(),
        Fallback::Today => ctx.iso_date(),
    }
}

/// Newline-joined lines for a list field; empty when `analysis` is absent
/// or the list is empty.
pub fn resolve_list(list: ListField, analysis: Option<&AnalysisResult>) -> String {
    let Some(analysis) = analysis else {
        return String::new();
    };
    match list {
        ListField::ApplicableStatutes => analysis
            .applicable_statutes
            .iter()
            .map(|s| format!("- {}: {}", s.citation, s.description))
            .collect::<Vec<_>>()
            .join("\n"),
        ListField::RecommendedActions => analysis.recommended_actions.join("\n"),
    }
}

/// A headed section, or nothing at all.
pub fn resolve_section(section: &Section, analysis: Option<&AnalysisResult>) -> String {
    let body = resolve_list(section.list, analysis);
    if body.is_empty() {
        return String::new();
    }
    format!("{}\n{}\n\n", section.heading, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Statute;
    use crate::profile::ProfileField;
    use chrono::NaiveDate;

    fn ctx() -> RenderContext {
        RenderContext::fixed(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            legal_issues: vec!["Domestic Violence".into()],
            applicable_statutes: vec![
                Statute::new("IPC Section 498A", "Cruelty by husband or relatives"),
                Statute::new("PWDVA 2005", "Protection of women from domestic violence"),
            ],
            recommended_actions: vec![
                "File a complaint with local police station".into(),
                "Contact local women's helpline".into(),
            ],
        }
    }

    const NAME: Slot = Slot::text(ProfileField::FullName, "[Your Name]");

    #[test]
    fn profile_value_used_verbatim() {
        let profile = PartyProfile {
            full_name: "  Asha <b>Devi</b>".into(),
            ..Default::default()
        };
        assert_eq!(resolve(&NAME, &profile, None, &ctx()), "  Asha <b>Devi</b>");
    }

    #[test]
    fn missing_value_uses_placeholder() {
        let profile = PartyProfile::default();
        assert_eq!(resolve(&NAME, &profile, None, &ctx()), "[Your Name]");
    }

    #[test]
    fn incident_date_defaults_to_render_date() {
        let slot = Slot::date(ProfileField::IncidentDate);
        let mut profile = PartyProfile::default();
        assert_eq!(resolve(&slot, &profile, None, &ctx()), "2024-03-01");
        profile.incident_date = "2023-12-25".into();
        assert_eq!(resolve(&slot, &profile, None, &ctx()), "2023-12-25");
    }

    #[test]
    fn render_date_ignores_profile() {
        let profile = PartyProfile {
            incident_date: "2023-12-25".into(),
            ..Default::default()
        };
        assert_eq!(
            resolve(&Slot::render_date(), &profile, None, &ctx()),
            "1/3/2024"
        );
    }

    #[test]
    fn description_falls_back_to_actions_then_placeholder() {
        let slot = Slot::text(ProfileField::Description, "[Describe the incident in detail]")
            .or_list(ListField::RecommendedActions);
        let profile = PartyProfile::default();
        let a = analysis();

        assert_eq!(
            resolve(&slot, &profile, Some(&a), &ctx()),
            "File a complaint with local police station\nContact local women's helpline"
        );
        assert_eq!(
            resolve(&slot, &profile, Some(&AnalysisResult::default()), &ctx()),
            "[Describe the incident in detail]"
        );
        assert_eq!(
            resolve(&slot, &profile, None, &ctx()),
            "[Describe the incident in detail]"
        );

        let written = PartyProfile {
            description: "Harassed at home".into(),
            ..Default::default()
        };
        assert_eq!(resolve(&slot, &written, Some(&a), &ctx()), "Harassed at home");
    }

    #[test]
    fn statutes_render_one_line_each() {
        assert_eq!(
            resolve_list(ListField::ApplicableStatutes, Some(&analysis())),
            "- IPC Section 498A: Cruelty by husband or relatives\n\
             - PWDVA 2005: Protection of women from domestic violence"
        );
    }

    #[test]
    fn lists_are_empty_without_analysis() {
        assert_eq!(resolve_list(ListField::ApplicableStatutes, None), "");
        assert_eq!(resolve_list(ListField::RecommendedActions, None), "");
    }

    #[test]
    fn empty_section_is_elided() {
        let section = Section {
            heading: "Applicable Laws:",
            list: ListField::ApplicableStatutes,
        };
        assert_eq!(resolve_section(&section, None), "");
        assert_eq!(
            resolve_section(&section, Some(&AnalysisResult::default())),
            ""
        );
        assert_eq!(
            resolve_section(&section, Some(&analysis())),
            "Applicable Laws:\n\
             - IPC Section 498A: Cruelty by husband or relatives\n\
             - PWDVA 2005: Protection of women from domestic violence\n\n"
        );
    }
}
