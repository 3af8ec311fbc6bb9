use super::common::*;
use crate::analysis::questionnaire::{
    AlcoholUse, ExerciseHabit, Questionnaire, SleepPattern, SmokingStatus, Symptom,
};
use crate::analysis::report::{AnalysisSource, RiskCategory, RiskLevel};
use crate::analysis::scoring;

#[test]
fn healthy_profile_scores_zero() {
    let analysis = scoring::analyze(&healthy_profile());

    // Daily exercise contributes -1 but the clamp floors the score at 0.
    assert_eq!(analysis.risk_score, 0);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.source, AnalysisSource::Fallback);
}

#[test]
fn cardiac_profile_with_lifestyle_risks_scores_high() {
    let analysis = scoring::analyze(&high_risk_profile());

    // 6+5 symptoms, +5 co-occurrence, +5 sleep, +5 exercise, +6 smoking,
    // +5 alcohol, +4 age>50, +4 bmi>30 (95kg/1.70m -> 32.9).
    assert_eq!(analysis.risk_score, 45);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn defaults_apply_when_fields_absent() {
    let analysis = scoring::analyze(&fatigue_dizziness_profile());

    // 3+4 symptoms, +3 co-occurrence, 0 from absent lifestyle, age default
    // 25, BMI default 22.
    assert_eq!(analysis.risk_score, 10);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn identical_input_yields_identical_output() {
    let questionnaire = high_risk_profile();
    let first = scoring::analyze(&questionnaire);
    let second = scoring::analyze(&questionnaire);

    assert_eq!(first.risk_score, second.risk_score);
    assert_eq!(first.risk_level, second.risk_level);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.tips, second.tips);
    assert_eq!(first.diet_options, second.diet_options);
    assert_eq!(first.details, second.details);
}

#[test]
fn score_never_exceeds_ceiling() {
    let questionnaire = Questionnaire {
        age: Some(80),
        height_cm: Some(160.0),
        weight_kg: Some(120.0),
        symptoms: vec![
            Symptom::ChestPain,
            Symptom::ShortnessOfBreath,
            Symptom::Fatigue,
            Symptom::Dizziness,
            Symptom::PersistentCough,
            Symptom::Nausea,
            Symptom::FrequentUrination,
            Symptom::Headache,
        ],
        other_symptoms: Some("constant joint pain".to_string()),
        sleep: Some(SleepPattern::LessThanFive),
        exercise: Some(ExerciseHabit::Never),
        smoking: Some(SmokingStatus::Regular),
        alcohol: Some(AlcoholUse::High),
        ..blank_questionnaire()
    };

    let analysis = scoring::analyze(&questionnaire);
    assert!(analysis.risk_score <= scoring::SCORE_CEILING as u32);
    assert_eq!(analysis.risk_level, RiskLevel::High);
}

#[test]
fn contradictory_none_selection_is_tolerated() {
    let with_none = Questionnaire {
        symptoms: vec![Symptom::NoneOfTheAbove, Symptom::ChestPain],
        ..blank_questionnaire()
    };
    let without_none = Questionnaire {
        symptoms: vec![Symptom::ChestPain],
        ..blank_questionnaire()
    };

    // "None of the above" carries zero weight, so the contradiction does not
    // change the score.
    assert_eq!(
        scoring::analyze(&with_none).risk_score,
        scoring::analyze(&without_none).risk_score
    );
}

#[test]
fn negative_age_falls_back_to_default() {
    let negative = Questionnaire {
        age: Some(-3),
        ..fatigue_dizziness_profile()
    };

    assert_eq!(
        scoring::analyze(&negative).risk_score,
        scoring::analyze(&fatigue_dizziness_profile()).risk_score
    );
}

#[test]
fn free_text_alone_adds_the_flat_bump() {
    let questionnaire = Questionnaire {
        other_symptoms: Some("tingling in fingers".to_string()),
        ..blank_questionnaire()
    };

    assert_eq!(scoring::analyze(&questionnaire).risk_score, 5);
}

#[test]
fn risk_level_thresholds_are_exact() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(15), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(16), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(35), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(36), RiskLevel::High);
}

#[test]
fn details_keep_fixed_category_order_and_bounds() {
    for questionnaire in [
        healthy_profile(),
        high_risk_profile(),
        fatigue_dizziness_profile(),
    ] {
        let analysis = scoring::analyze(&questionnaire);
        assert_eq!(analysis.details.len(), 3);
        assert_eq!(analysis.details[0].category, RiskCategory::Cardiovascular);
        assert_eq!(analysis.details[1].category, RiskCategory::Respiratory);
        assert_eq!(analysis.details[2].category, RiskCategory::Metabolic);
        for detail in &analysis.details {
            assert!(detail.score <= 100);
        }
    }
}

#[test]
fn category_scores_accumulate_from_base() {
    let analysis = scoring::analyze(&high_risk_profile());

    // Cardiovascular: 5 +25 chest pain +10 breath +15 smoking +10 exercise
    // +10 bmi +8 age = 83.
    assert_eq!(analysis.details[0].score, 83);
    // Respiratory: 5 +25 breath +20 smoking +5 chest pain = 55.
    assert_eq!(analysis.details[1].score, 55);
    // Metabolic: 5 +10 exercise +15 bmi +10 alcohol = 40.
    assert_eq!(analysis.details[2].score, 40);
}
