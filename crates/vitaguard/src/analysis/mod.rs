//! Health risk analysis: questionnaire intake, Gemini-backed assessment,
//! and the deterministic fallback engine.
//!
//! The public entry point is [`HealthAnalyzer::analyze`]: one AI attempt,
//! then exactly one local fallback on any failure, always yielding a
//! [`RiskAnalysis`] tagged with its provenance.

pub mod gemini;
pub mod history;
pub mod prompt;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use gemini::{GeminiClient, GeminiError};
pub use history::{AssessmentRecord, AssessmentStore, StoreError};
pub use questionnaire::{
    AlcoholUse, ExerciseHabit, Gender, Questionnaire, SleepPattern, SmokingStatus, Symptom,
};
pub use report::{
    AnalysisSource, CategoryBand, CategoryDetail, RiskAnalysis, RiskCategory, RiskLevel,
    MAX_ADVICE_ITEMS,
};
pub use router::analysis_router;
pub use service::{AnalysisService, HealthAnalyzer};
