use std::sync::Arc;

use tracing::{info, warn};

use super::gemini::GeminiClient;
use super::history::{AssessmentRecord, AssessmentStore, StoreError};
use super::questionnaire::Questionnaire;
use super::report::RiskAnalysis;
use super::scoring;

/// Orchestrator for a single analysis: one Gemini attempt, then exactly one
/// deterministic fallback on any failure.
///
/// The client is an explicit constructor dependency with its lifecycle owned
/// by the caller; there is no module-level singleton. `analyze` never fails —
/// worst case the caller receives a fallback-sourced result.
pub struct HealthAnalyzer {
    gemini: Option<GeminiClient>,
}

impl HealthAnalyzer {
    pub fn new(gemini: GeminiClient) -> Self {
        Self {
            gemini: Some(gemini),
        }
    }

    /// Analyzer without an AI client; every call uses the local engine.
    pub fn offline() -> Self {
        Self { gemini: None }
    }

    pub async fn analyze(&self, questionnaire: &Questionnaire) -> RiskAnalysis {
        if let Some(client) = &self.gemini {
            match client.analyze(questionnaire).await {
                Ok(analysis) => {
                    info!(score = analysis.risk_score, "gemini analysis succeeded");
                    return analysis;
                }
                Err(err) => {
                    warn!(error = %err, "gemini analysis failed, using deterministic fallback");
                }
            }
        }
        scoring::analyze(questionnaire)
    }
}

/// Service composing the analyzer with best-effort history persistence.
pub struct AnalysisService<S> {
    analyzer: HealthAnalyzer,
    store: Arc<S>,
}

impl<S> AnalysisService<S>
where
    S: AssessmentStore + 'static,
{
    pub fn new(analyzer: HealthAnalyzer, store: Arc<S>) -> Self {
        Self { analyzer, store }
    }

    /// Run the analysis and append a history row. Store failures are logged
    /// and swallowed so result delivery is never blocked.
    pub async fn analyze(&self, questionnaire: &Questionnaire) -> RiskAnalysis {
        let analysis = self.analyzer.analyze(questionnaire).await;

        let record = AssessmentRecord::from_analysis(questionnaire, &analysis);
        if let Err(err) = self.store.append(record) {
            warn!(error = %err, "failed to persist assessment record");
        }

        analysis
    }

    /// Most recent assessments, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<AssessmentRecord>, StoreError> {
        self.store.recent(limit)
    }
}
