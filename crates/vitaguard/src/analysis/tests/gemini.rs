use super::common::*;
use crate::analysis::gemini::{
    parse_model_reply, GeminiClient, GeminiError, REMOTE_SCORE_CEILING, REMOTE_SCORE_FLOOR,
};
use crate::analysis::report::{AnalysisSource, CategoryBand, RiskCategory, RiskLevel};
use crate::config::{GeminiConfig, GEMINI_KEY_PLACEHOLDER};

fn placeholder_config() -> GeminiConfig {
    GeminiConfig {
        api_key: Some(GEMINI_KEY_PLACEHOLDER.to_string()),
        model: "gemini-1.5-flash".to_string(),
        timeout_secs: 5,
    }
}

#[test]
fn well_formed_reply_round_trips() {
    let questionnaire = high_risk_profile();
    let analysis =
        parse_model_reply(&model_reply_json(42), &questionnaire).expect("reply parses");

    assert_eq!(analysis.risk_score, 42);
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(analysis.source, AnalysisSource::Gemini);
    assert_eq!(analysis.recommendations.len(), 4);
    assert_eq!(analysis.details.len(), 3);
    assert_eq!(analysis.details[0].category, RiskCategory::Cardiovascular);
    assert_eq!(analysis.details[0].risk, CategoryBand::Moderate);
    assert_eq!(analysis.details[0].score, 38);
    assert_eq!(analysis.details[1].category, RiskCategory::Respiratory);
    assert_eq!(analysis.details[2].category, RiskCategory::Metabolic);
    assert_eq!(analysis.user_name, "Jordan");
}

#[test]
fn code_fences_are_stripped_before_parsing() {
    let wrapped = format!("```json\n{}\n```", model_reply_json(30));
    let analysis =
        parse_model_reply(&wrapped, &blank_questionnaire()).expect("fenced reply parses");
    assert_eq!(analysis.risk_score, 30);
}

#[test]
fn model_scores_clamp_to_the_remote_band() {
    let questionnaire = blank_questionnaire();

    let high = parse_model_reply(&model_reply_json(90), &questionnaire).expect("parses");
    assert_eq!(high.risk_score, REMOTE_SCORE_CEILING as u32);
    // Level follows the clamped value, not the model's own riskLevel field.
    assert_eq!(high.risk_level, RiskLevel::High);

    let low = parse_model_reply(&model_reply_json(2), &questionnaire).expect("parses");
    assert_eq!(low.risk_score, REMOTE_SCORE_FLOOR as u32);
    assert_eq!(low.risk_level, RiskLevel::Low);
}

#[test]
fn missing_required_fields_are_rejected() {
    let questionnaire = blank_questionnaire();

    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply.as_object_mut().expect("object").remove("riskScore");
    let result = parse_model_reply(&reply.to_string(), &questionnaire);
    assert!(matches!(result, Err(GeminiError::MissingField("riskScore"))));

    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply["recommendations"] = serde_json::json!([]);
    let result = parse_model_reply(&reply.to_string(), &questionnaire);
    assert!(matches!(
        result,
        Err(GeminiError::MissingField("recommendations"))
    ));

    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply.as_object_mut().expect("object").remove("details");
    let result = parse_model_reply(&reply.to_string(), &questionnaire);
    assert!(matches!(result, Err(GeminiError::MissingField("details"))));
}

#[test]
fn omitted_category_is_rejected() {
    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply["details"] = serde_json::json!([
        { "category": "Cardiovascular", "risk": "Moderate", "score": 38 },
        { "category": "Respiratory", "risk": "Low", "score": 18 },
        { "category": "Digestive", "risk": "Low", "score": 10 }
    ]);

    let result = parse_model_reply(&reply.to_string(), &blank_questionnaire());
    assert!(matches!(
        result,
        Err(GeminiError::MissingCategory("Metabolic"))
    ));
}

#[test]
fn non_json_text_is_a_malformed_payload() {
    let result = parse_model_reply(
        "I am unable to assess this patient.",
        &blank_questionnaire(),
    );
    assert!(matches!(result, Err(GeminiError::MalformedPayload(_))));
}

#[test]
fn empty_advice_lists_are_backfilled_locally() {
    let questionnaire = healthy_profile();

    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply["tips"] = serde_json::json!([]);
    reply["dietOptions"] = serde_json::json!([]);
    reply["summary"] = serde_json::json!("   ");

    let analysis =
        parse_model_reply(&reply.to_string(), &questionnaire).expect("reply parses");
    assert_eq!(analysis.tips.len(), 4);
    assert!(analysis.tips[3].contains("colorful vegetables"));
    assert!(!analysis.diet_options.is_empty());
    assert!(!analysis.summary.trim().is_empty());
    // Backfill does not change the declared source.
    assert_eq!(analysis.source, AnalysisSource::Gemini);
}

#[test]
fn oversized_lists_are_truncated() {
    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    let extras: Vec<String> = (0..7).map(|i| format!("recommendation {i}")).collect();
    reply["recommendations"] = serde_json::json!(extras);

    let analysis =
        parse_model_reply(&reply.to_string(), &blank_questionnaire()).expect("parses");
    assert_eq!(analysis.recommendations.len(), 4);
}

#[test]
fn missing_band_label_is_derived_from_the_score() {
    let mut reply: serde_json::Value =
        serde_json::from_str(&model_reply_json(40)).expect("fixture is valid json");
    reply["details"] = serde_json::json!([
        { "category": "Cardiovascular", "score": 55 },
        { "category": "Respiratory", "score": 30 },
        { "category": "Metabolic", "score": 10 }
    ]);

    let analysis =
        parse_model_reply(&reply.to_string(), &blank_questionnaire()).expect("parses");
    assert_eq!(analysis.details[0].risk, CategoryBand::Elevated);
    assert_eq!(analysis.details[1].risk, CategoryBand::Moderate);
    assert_eq!(analysis.details[2].risk, CategoryBand::Low);
}

#[test]
fn placeholder_key_builds_an_unconfigured_client() {
    let client = GeminiClient::new(&placeholder_config()).expect("client builds");
    assert!(!client.is_configured());
}

#[tokio::test]
async fn unconfigured_client_fails_without_network_io() {
    let client = GeminiClient::new(&placeholder_config()).expect("client builds");
    let result = client.analyze(&healthy_profile()).await;
    assert!(matches!(result, Err(GeminiError::Unconfigured)));
}
