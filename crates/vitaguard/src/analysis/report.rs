use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on the recommendation, tip, and diet-option lists.
pub const MAX_ADVICE_ITEMS: usize = 4;

/// Overall risk classification derived from the risk score.
///
/// Both the deterministic engine and the Gemini path classify through the
/// same thresholds so a given score always maps to the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: i32) -> Self {
        if score < 16 {
            RiskLevel::Low
        } else if score <= 35 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Provenance of an analysis: the external model or the local engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Gemini,
    Fallback,
}

impl AnalysisSource {
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisSource::Gemini => "gemini",
            AnalysisSource::Fallback => "fallback",
        }
    }
}

/// Body systems reported on individually, always in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Cardiovascular,
    Respiratory,
    Metabolic,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Cardiovascular,
        RiskCategory::Respiratory,
        RiskCategory::Metabolic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::Cardiovascular => "Cardiovascular",
            RiskCategory::Respiratory => "Respiratory",
            RiskCategory::Metabolic => "Metabolic",
        }
    }
}

/// Per-category risk band derived from the category sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryBand {
    Low,
    Moderate,
    Elevated,
}

impl CategoryBand {
    pub fn from_score(score: u32) -> Self {
        if score > 40 {
            CategoryBand::Elevated
        } else if score > 20 {
            CategoryBand::Moderate
        } else {
            CategoryBand::Low
        }
    }

    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            value if value.eq_ignore_ascii_case("Low") => Some(CategoryBand::Low),
            value if value.eq_ignore_ascii_case("Moderate") => Some(CategoryBand::Moderate),
            value if value.eq_ignore_ascii_case("Elevated") => Some(CategoryBand::Elevated),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CategoryBand::Low => "Low",
            CategoryBand::Moderate => "Moderate",
            CategoryBand::Elevated => "Elevated",
        }
    }
}

/// One body-system sub-score entry in a risk analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub category: RiskCategory,
    pub risk: CategoryBand,
    pub score: u32,
}

/// Structured output of a health risk assessment.
///
/// Constructed once per questionnaire submission and immutable thereafter.
/// `details` always carries exactly three entries in the fixed category
/// order, and the advice lists are never empty and never exceed
/// [`MAX_ADVICE_ITEMS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub tips: Vec<String>,
    pub diet_options: Vec<String>,
    pub details: Vec<CategoryDetail>,
    pub source: AnalysisSource,
    pub date: NaiveDate,
    pub user_name: String,
}
