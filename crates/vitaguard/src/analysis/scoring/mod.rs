//! Deterministic fallback analysis engine.
//!
//! Computes a full [`RiskAnalysis`] from a questionnaire with fixed,
//! auditable arithmetic: no network, no randomness. Identical input yields
//! identical output apart from the assessment date.

pub(crate) mod advice;
mod rules;

use chrono::Local;

use super::questionnaire::Questionnaire;
use super::report::{AnalysisSource, RiskAnalysis, RiskLevel};

/// Clamp bounds for the deterministic risk score. The Gemini path applies a
/// narrower band; see [`super::gemini`].
pub const SCORE_FLOOR: i32 = 0;
pub const SCORE_CEILING: i32 = 95;

/// Score a questionnaire with the local rule engine.
pub fn analyze(questionnaire: &Questionnaire) -> RiskAnalysis {
    let risk_score = rules::risk_score(questionnaire);
    let risk_level = RiskLevel::from_score(risk_score as i32);

    RiskAnalysis {
        risk_score,
        risk_level,
        summary: advice::summary(questionnaire, risk_level, risk_score),
        recommendations: advice::recommendations(questionnaire),
        tips: advice::tips(questionnaire),
        diet_options: advice::diet_options(questionnaire),
        details: rules::category_details(questionnaire),
        source: AnalysisSource::Fallback,
        date: Local::now().date_naive(),
        user_name: questionnaire.display_name().to_string(),
    }
}
