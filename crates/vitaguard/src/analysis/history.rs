use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::questionnaire::{Gender, Questionnaire, Symptom};
use super::report::{AnalysisSource, RiskAnalysis, RiskLevel};

/// Flattened assessment row handed to storage adapters.
///
/// The engine never reads these back; they exist for dashboards and audit
/// trails maintained by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub user_name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub bmi: f64,
    pub symptoms: Vec<Symptom>,
    pub other_symptoms: Option<String>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub source: AnalysisSource,
    pub recorded_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn from_analysis(questionnaire: &Questionnaire, analysis: &RiskAnalysis) -> Self {
        Self {
            user_name: questionnaire.display_name().to_string(),
            age: questionnaire.age,
            gender: questionnaire.gender,
            bmi: questionnaire.bmi(),
            symptoms: questionnaire.symptoms.clone(),
            other_symptoms: questionnaire.other_symptoms_text().map(str::to_string),
            risk_score: analysis.risk_score,
            risk_level: analysis.risk_level,
            source: analysis.source,
            recorded_at: Utc::now(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Writes are best-effort from the caller's perspective: a failure is
/// logged and swallowed, never failing the analysis response.
pub trait AssessmentStore: Send + Sync {
    fn append(&self, record: AssessmentRecord) -> Result<(), StoreError>;
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("assessment store unavailable: {0}")]
    Unavailable(String),
}
