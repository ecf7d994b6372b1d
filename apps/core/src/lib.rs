//! # TriageDesk Core
//!
//! Deterministic ticket analysis engine. Given a title and a description,
//! it assigns a category label, a priority label, and a short extractive
//! summary. Pure CPU work over fixed keyword tables; no I/O, no state
//! between calls.
//!
//! ## Modules
//! - `triage`: the analysis engine (lexicons, classifier, summarizer)
//! - `models`: request and response types
//! - `api`: the operations consumed by the request layer
//! - `error`: application-wide error type

pub mod api;
pub mod error;
pub mod models;
pub mod triage;

#[cfg(test)]
mod tests;

pub use api::AnalysisService;
pub use error::AppError;
pub use models::TicketInput;
pub use triage::{AnalysisResult, Category, Priority, TicketAnalyzer};
