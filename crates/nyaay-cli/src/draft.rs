//! Draft pipeline: load form data from JSON, render, optionally save as `.txt`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use nyaay_core::{AnalysisResult, Draft, PartyProfile};
use serde::de::DeserializeOwned;
use tracing::info;

/// Load the party profile, or start from an empty one.
pub fn load_profile(path: Option<&Path>) -> anyhow::Result<PartyProfile> {
    match path {
        Some(p) => read_json(p),
        None => Ok(PartyProfile::default()),
    }
}

pub fn load_analysis(path: Option<&Path>) -> anyhow::Result<Option<AnalysisResult>> {
    path.map(read_json).transpose()
}

/// Write the draft under `dir` using its download name; returns the path written.
pub fn save_draft(dir: &Path, draft: &Draft) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(&draft.file_name);
    std::fs::write(&path, &draft.contents)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = draft.contents.len(), "draft saved");
    Ok(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
