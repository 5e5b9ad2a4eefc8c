//! Legal draft generation: document types, party data, templates and rendering.

pub mod analysis;
pub mod document;
mod error;
pub mod profile;
pub mod render;
pub mod resolve;
pub mod session;
pub mod template;

pub use analysis::{AnalysisResult, Statute};
pub use document::DocumentType;
pub use error::DraftError;
pub use profile::{PartyProfile, ProfileField, UserContext};
pub use render::{Draft, RenderContext, download_name, render};
pub use session::DraftSession;
pub use template::{Template, template_for};
