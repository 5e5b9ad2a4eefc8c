//! Vertical card display for advisor answers and the document catalogue.

use nyaay_advisor::{ChatResponse, Contact};
use nyaay_core::{AnalysisResult, DocumentType};

const MAX_LIST_ITEMS: usize = 5;

// ── Public API ──

/// Print an advisor answer as a card grouped into sections.
pub fn print_advice_card(response: &ChatResponse) {
    print!("{}", advice_card(response));
}

/// Print the selectable document types.
pub fn print_document_types() {
    print!("{}", document_types());
}

pub fn advice_card(response: &ChatResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", or_dash(&response.legal_issue)));
    if !response.query.trim().is_empty() {
        out.push_str(response.query.trim());
        out.push('\n');
    }
    out.push('\n');

    section(
        &mut out,
        "Assessment",
        &[
            ("urgency", response.urgency.as_deref()),
            ("bias", response.bias.as_deref()),
        ],
    );

    if let Some(advice) = response.advice.as_deref()
        && !advice.trim().is_empty()
    {
        out.push_str("Advice\n");
        for line in advice.lines().filter(|l| !l.trim().is_empty()) {
            out.push_str(&format!("  {}\n", line.trim()));
        }
        out.push('\n');
    }

    contacts(&mut out, "Lawyers", response.lawyers.as_deref());
    contacts(&mut out, "NGOs", response.ngos.as_deref());
    out
}

/// One-line summary of the analysis that will feed a draft.
pub fn analysis_summary(analysis: Option<&AnalysisResult>) -> String {
    match analysis {
        None => "no analysis".to_string(),
        Some(a) => format!(
            "{} issue(s), {} statute(s), {} action(s)",
            a.legal_issues.len(),
            a.applicable_statutes.len(),
            a.recommended_actions.len()
        ),
    }
}

pub fn document_types() -> String {
    let mut out = String::new();
    for ty in DocumentType::ALL {
        out.push_str(&format!(
            "  {:<10} {:<32} {}\n",
            ty.slug(),
            ty.title(),
            ty.summary()
        ));
    }
    out
}

// ── Section rendering ──

fn section(out: &mut String, header: &str, rows: &[(&str, Option<&str>)]) {
    let present: Vec<(&str, &str)> = rows
        .iter()
        .filter_map(|&(k, v)| v.filter(|v| !v.trim().is_empty()).map(|v| (k, v)))
        .collect();
    if present.is_empty() {
        return;
    }
    out.push_str(&format!("{header}\n"));
    for (k, v) in present {
        out.push_str(&format!("  {:<10} {}\n", k, v));
    }
    out.push('\n');
}

fn contacts(out: &mut String, header: &str, list: Option<&[Contact]>) {
    let Some(list) = list.filter(|l| !l.is_empty()) else {
        return;
    };
    out.push_str(&format!("{} ({}):\n", header, list.len()));
    for c in list.iter().take(MAX_LIST_ITEMS) {
        out.push_str(&format!("  {:<30}  {}\n", or_dash(&c.name), c.contact));
    }
    if list.len() > MAX_LIST_ITEMS {
        out.push_str(&format!("  ... and {} more\n", list.len() - MAX_LIST_ITEMS));
    }
    out.push('\n');
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
