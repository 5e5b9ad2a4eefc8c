//! Upstream advisor: submits free-text legal queries and maps the answer into
//! the analysis the draft templates consume.

mod client;
mod response;

pub use client::{AdvisorClient, AdvisorError};
pub use response::{ChatResponse, Contact};
