//! Draft session: the editable form state behind one draft.

use tracing::debug;

use crate::DraftError;
use crate::analysis::AnalysisResult;
use crate::document::DocumentType;
use crate::profile::{PartyProfile, ProfileField, UserContext};
use crate::render::{Draft, RenderContext, render};

/// Form state for one drafting session. Never persisted.
#[derive(Debug, Clone)]
pub struct DraftSession {
    document_type: DocumentType,
    profile: PartyProfile,
    analysis: Option<AnalysisResult>,
    editing: bool,
}

impl DraftSession {
    /// Starts on FIR with editing enabled, pre-filled from the user if logged in.
    pub fn new(user: Option<&UserContext>) -> Self {
        Self {
            document_type: DocumentType::Fir,
            profile: user.map(PartyProfile::for_user).unwrap_or_default(),
            analysis: None,
            editing: true,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn profile(&self) -> &PartyProfile {
        &self.profile
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn select(&mut self, document_type: DocumentType) {
        self.document_type = document_type;
    }

    pub fn attach_analysis(&mut self, analysis: Option<AnalysisResult>) {
        self.analysis = analysis;
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Flip between editing and locked; returns the new state.
    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    /// Set one field. Rejected while the session is locked.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) -> Result<(), DraftError> {
        self.update(|profile| profile.set(field, value))
    }

    /// Apply several changes at once. Rejected while the session is locked.
    pub fn update(&mut self, f: impl FnOnce(&mut PartyProfile)) -> Result<(), DraftError> {
        if !self.editing {
            debug!(document_type = %self.document_type, "edit rejected: draft locked");
            return Err(DraftError::Locked);
        }
        f(&mut self.profile);
        Ok(())
    }

    pub fn preview(&self, ctx: &RenderContext) -> String {
        render(self.document_type, &self.profile, self.analysis.as_ref(), ctx)
    }

    pub fn export(&self, ctx: &RenderContext) -> Draft {
        Draft::build(self.document_type, &self.profile, self.analysis.as_ref(), ctx)
    }
}
