//! Gemini analysis client.
//!
//! One round-trip to the `generateContent` REST endpoint, no retries, no
//! streaming. Every failure mode — missing credential, transport error,
//! timeout, malformed or incomplete payload — surfaces as a [`GeminiError`]
//! so the orchestrator can fall back to the deterministic engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::prompt;
use super::questionnaire::Questionnaire;
use super::report::{
    AnalysisSource, CategoryBand, CategoryDetail, RiskAnalysis, RiskCategory, RiskLevel,
    MAX_ADVICE_ITEMS,
};
use super::scoring;
use crate::config::GeminiConfig;

/// Clamp bounds for model-sourced scores. Narrower than the deterministic
/// engine's band: ungrounded model output is trusted less at the extremes.
pub const REMOTE_SCORE_FLOOR: i64 = 5;
pub const REMOTE_SCORE_CEILING: i64 = 75;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TEMPERATURE: f64 = 0.4;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Failure taxonomy for the AI analysis path. None of these propagate past
/// the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("gemini api key is missing or still the placeholder value")]
    Unconfigured,
    #[error("gemini transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gemini returned no candidate text")]
    EmptyResponse,
    #[error("gemini payload is not valid json: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("gemini payload is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("gemini payload omitted the {0} category detail")]
    MissingCategory(&'static str),
}

/// Client for the external generative analysis service.
///
/// Constructed once from [`GeminiConfig`] and injected into the
/// orchestrator; an unconfigured client is valid and fails fast without
/// touching the network.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.configured_key().map(str::to_string),
            model: config.model.clone(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request an analysis from the model and normalize the reply.
    pub async fn analyze(&self, questionnaire: &Questionnaire) -> Result<RiskAnalysis, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::Unconfigured)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(questionnaire),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{}/{}:generateContent?key={}", self.endpoint, self.model, api_key);

        debug!(model = %self.model, "requesting gemini analysis");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: GenerateContentResponse = response.json().await?;

        let text = body.candidate_text().ok_or(GeminiError::EmptyResponse)?;
        parse_model_reply(&text, questionnaire)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Raw model payload before validation. Everything is optional here; the
/// required-field checks live in [`normalize_reply`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelReply {
    risk_score: Option<f64>,
    #[allow(dead_code)]
    risk_level: Option<String>,
    summary: Option<String>,
    recommendations: Option<Vec<String>>,
    tips: Option<Vec<String>>,
    details: Option<Vec<ModelDetail>>,
    diet_options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ModelDetail {
    category: Option<String>,
    risk: Option<String>,
    score: Option<f64>,
}

/// Parse and normalize the model's text payload into a [`RiskAnalysis`].
///
/// The questionnaire is needed to backfill advice lists the model left
/// empty, keeping the never-empty output invariant for both sources.
pub fn parse_model_reply(
    raw: &str,
    questionnaire: &Questionnaire,
) -> Result<RiskAnalysis, GeminiError> {
    let cleaned = strip_code_fences(raw);
    let reply: ModelReply = serde_json::from_str(&cleaned)?;
    normalize_reply(reply, questionnaire)
}

/// Remove markdown code-fence markers the model sometimes wraps the JSON in.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn normalize_reply(
    reply: ModelReply,
    questionnaire: &Questionnaire,
) -> Result<RiskAnalysis, GeminiError> {
    let raw_score = reply.risk_score.ok_or(GeminiError::MissingField("riskScore"))?;
    let mut recommendations = reply
        .recommendations
        .filter(|list| !list.is_empty())
        .ok_or(GeminiError::MissingField("recommendations"))?;
    let raw_details = reply
        .details
        .filter(|list| !list.is_empty())
        .ok_or(GeminiError::MissingField("details"))?;

    let risk_score =
        (raw_score.round() as i64).clamp(REMOTE_SCORE_FLOOR, REMOTE_SCORE_CEILING) as u32;
    // The level is always re-derived from the clamped score; the model's own
    // riskLevel field is ignored so the threshold mapping holds for both
    // sources.
    let risk_level = RiskLevel::from_score(risk_score as i32);

    let mut details = Vec::with_capacity(RiskCategory::ALL.len());
    for category in RiskCategory::ALL {
        let entry = raw_details
            .iter()
            .find(|detail| {
                detail
                    .category
                    .as_deref()
                    .is_some_and(|label| label.trim().eq_ignore_ascii_case(category.label()))
            })
            .ok_or(GeminiError::MissingCategory(category.label()))?;
        let score = entry.score.unwrap_or(0.0).round().clamp(0.0, 100.0) as u32;
        let risk = entry
            .risk
            .as_deref()
            .and_then(CategoryBand::from_label)
            .unwrap_or_else(|| CategoryBand::from_score(score));
        details.push(CategoryDetail {
            category,
            risk,
            score,
        });
    }

    recommendations.truncate(MAX_ADVICE_ITEMS);

    let mut tips = reply.tips.unwrap_or_default();
    tips.truncate(MAX_ADVICE_ITEMS);
    if tips.is_empty() {
        tips = scoring::advice::tips(questionnaire);
    }

    let mut diet_options = reply.diet_options.unwrap_or_default();
    diet_options.truncate(MAX_ADVICE_ITEMS);
    if diet_options.is_empty() {
        diet_options = scoring::advice::diet_options(questionnaire);
    }

    let summary = match reply.summary.filter(|text| !text.trim().is_empty()) {
        Some(summary) => summary,
        None => scoring::advice::summary(questionnaire, risk_level, risk_score),
    };

    Ok(RiskAnalysis {
        risk_score,
        risk_level,
        summary,
        recommendations,
        tips,
        diet_options,
        details,
        source: AnalysisSource::Gemini,
        date: chrono::Local::now().date_naive(),
        user_name: questionnaire.display_name().to_string(),
    })
}
