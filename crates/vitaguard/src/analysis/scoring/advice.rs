//! Personalized narrative generation: recommendations, daily tips, diet
//! suggestions, and the summary paragraph.
//!
//! Generation order is fixed (symptoms, then lifestyle, then free-text
//! notes) so that truncation to the four-item cap is deterministic.

use crate::analysis::questionnaire::{
    ExerciseHabit, Questionnaire, SleepPattern, SmokingStatus, Symptom,
};
use crate::analysis::report::{RiskLevel, MAX_ADVICE_ITEMS};

/// Clinical follow-up actions keyed by symptom, in emission order.
const SYMPTOM_RECOMMENDATIONS: [(Symptom, &str); 8] = [
    (
        Symptom::ChestPain,
        "Consult a cardiologist for a detailed ECG and stress test to evaluate your chest discomfort.",
    ),
    (
        Symptom::ShortnessOfBreath,
        "Schedule a pulmonary function test (spirometry) to assess your respiratory capacity.",
    ),
    (
        Symptom::Fatigue,
        "Get a complete blood panel to check for iron deficiency, Vitamin D, and thyroid markers (TSH).",
    ),
    (
        Symptom::Dizziness,
        "Monitor blood pressure twice daily for a week and track hydration levels (target 2.5L+ daily).",
    ),
    (
        Symptom::PersistentCough,
        "If your cough persists beyond 3 weeks, schedule a chest X-ray to rule out respiratory infections.",
    ),
    (
        Symptom::Nausea,
        "Review your current diet and medication list — nausea can be triggered by drug interactions or food sensitivities.",
    ),
    (
        Symptom::FrequentUrination,
        "Get a fasting blood glucose and HbA1c test to screen for early metabolic risk markers.",
    ),
    (
        Symptom::Headache,
        "Track headache frequency and triggers for 2 weeks; consult a neurologist if they occur 3+ times/week.",
    ),
];

const HEALTHY_BASELINE_RECOMMENDATIONS: [&str; 4] = [
    "Maintain your current balanced routine — your baseline metrics are within healthy ranges.",
    "Schedule an annual preventive health screening appropriate for your age group.",
    "Continue regular physical activity and adequate hydration (2-3L daily).",
    "Monitor any changes in energy levels, sleep quality, or unexplained symptoms.",
];

pub(crate) fn recommendations(questionnaire: &Questionnaire) -> Vec<String> {
    let mut recommendations: Vec<String> = SYMPTOM_RECOMMENDATIONS
        .iter()
        .filter(|(symptom, _)| questionnaire.has_symptom(*symptom))
        .map(|(_, text)| (*text).to_string())
        .collect();

    if questionnaire.sleep == Some(SleepPattern::LessThanFive) {
        recommendations.push(
            "Increase sleep to 7-8 hours: chronic sleep deprivation elevates cortisol and cardiovascular risk."
                .to_string(),
        );
    }
    if questionnaire.exercise == Some(ExerciseHabit::Never) {
        recommendations.push(
            "Begin with 20 minutes of brisk walking daily — even light exercise reduces all-cause mortality by 20%."
                .to_string(),
        );
    }
    if matches!(
        questionnaire.smoking,
        Some(SmokingStatus::Regular | SmokingStatus::Occasional)
    ) {
        recommendations.push(
            "Initiate a smoking cessation plan — even reducing by 50% significantly lowers respiratory and cardiovascular risk."
                .to_string(),
        );
    }
    let bmi = questionnaire.bmi();
    if bmi > 30.0 {
        recommendations.push(format!(
            "Your BMI of {bmi:.1} indicates obesity. A structured nutrition plan with a 500 kcal/day deficit is recommended."
        ));
    }

    if let Some(text) = questionnaire.other_symptoms_text() {
        let lowered = text.to_lowercase();
        let mut matched = false;
        if lowered.contains("pain") || lowered.contains("ache") {
            matched = true;
            recommendations.push(format!(
                "Regarding your \"{text}\": persistent pain should be evaluated for underlying inflammation."
            ));
        }
        if lowered.contains("fever") || lowered.contains("cold") || lowered.contains("cough") {
            matched = true;
            recommendations.push(
                "For your respiratory/flu concern: monitor temperature and stay hydrated.".to_string(),
            );
        }
        if lowered.contains("stress") || lowered.contains("anxiety") || lowered.contains("mental") {
            matched = true;
            recommendations.push(
                "Note on your stress levels: we recommend exploring mindfulness or speaking with a counselor."
                    .to_string(),
            );
        }
        if !matched {
            recommendations.push(format!(
                "Specific note: your report of \"{text}\" has been flagged for your review."
            ));
        }
    }

    if recommendations.is_empty() {
        recommendations.extend(
            HEALTHY_BASELINE_RECOMMENDATIONS
                .iter()
                .map(|text| (*text).to_string()),
        );
    }

    recommendations.truncate(MAX_ADVICE_ITEMS);
    recommendations
}

/// Exactly four daily tips: sleep, exercise, age-branched, and one constant
/// nutrition tip.
pub(crate) fn tips(questionnaire: &Questionnaire) -> Vec<String> {
    let mut tips = Vec::with_capacity(MAX_ADVICE_ITEMS);

    tips.push(
        if matches!(
            questionnaire.sleep,
            Some(SleepPattern::LessThanFive | SleepPattern::FiveToSeven)
        ) {
            "Set a consistent sleep schedule — go to bed and wake up at the same time, even on weekends."
        } else {
            "Maintain your healthy sleep routine and avoid screens 30 minutes before bed."
        }
        .to_string(),
    );

    tips.push(
        if matches!(
            questionnaire.exercise,
            Some(ExerciseHabit::Never | ExerciseHabit::Sometimes)
        ) {
            "Take a 10-minute walk after each meal — this improves blood sugar regulation by up to 30%."
        } else {
            "Include both cardio and strength training in your weekly routine for comprehensive fitness."
        }
        .to_string(),
    );

    tips.push(
        if questionnaire.effective_age() > 40 {
            "Prioritize calcium and Vitamin D intake to support bone density as you age."
        } else {
            "Build stress-management habits now — try 5 minutes of daily meditation or journaling."
        }
        .to_string(),
    );

    tips.push(
        "Eat a variety of colorful vegetables daily — aim for at least 5 different colors per week for micronutrient diversity."
            .to_string(),
    );

    tips
}

pub(crate) fn diet_options(questionnaire: &Questionnaire) -> Vec<String> {
    let mut options = Vec::new();
    let free_text = questionnaire
        .other_symptoms_text()
        .map(str::to_lowercase)
        .unwrap_or_default();

    if questionnaire.has_symptom(Symptom::Fatigue) || free_text.contains("energy") {
        options.push(
            "Complex carbohydrates (oats, quinoa) for sustained energy release throughout the day."
                .to_string(),
        );
        options.push(
            "Iron-rich foods (spinach, lentils) to support healthy oxygen transport in the blood."
                .to_string(),
        );
    }
    if questionnaire.has_symptom(Symptom::FrequentUrination) || free_text.contains("sugar") {
        options.push("Low glycemic index foods to maintain stable blood sugar levels.".to_string());
        options.push(
            "High-fiber vegetables (broccoli, leafy greens) to improve metabolic processing."
                .to_string(),
        );
    }
    if questionnaire.has_symptom(Symptom::Headache) || questionnaire.has_symptom(Symptom::Dizziness)
    {
        options.push(
            "Magnesium-rich foods (almonds, pumpkin seeds) which may help reduce headache frequency."
                .to_string(),
        );
        options.push(
            "Electrolyte-balanced hydration (coconut water) to maintain proper neural function."
                .to_string(),
        );
    }
    if options.len() < 3 {
        options.push(
            "Increase intake of Omega-3 fatty acids (walnuts, chia seeds) to support systemic anti-inflammation."
                .to_string(),
        );
        options.push(
            "Prioritize high-quality protein (eggs, legumes) for tissue repair and immune support."
                .to_string(),
        );
    }

    options.truncate(MAX_ADVICE_ITEMS);
    options
}

/// Level-specific narrative referencing the symptom count and score.
pub(crate) fn summary(questionnaire: &Questionnaire, level: RiskLevel, score: u32) -> String {
    let count = questionnaire.reported_symptom_count();
    let plural = if count == 1 { "" } else { "s" };

    match level {
        RiskLevel::High => format!(
            "Based on your {count} reported symptom{plural} and lifestyle profile, your overall health risk is categorized as High ({score}%). \
             We strongly recommend scheduling a consultation with a healthcare professional to discuss diagnostic testing and a personalized care plan."
        ),
        RiskLevel::Moderate => format!(
            "Your health profile shows {count} symptom{plural} that, combined with your lifestyle factors, place you in the Moderate risk category ({score}%). \
             While not immediately critical, proactive lifestyle changes and symptom monitoring can significantly reduce your long-term risk."
        ),
        RiskLevel::Low => {
            let lead = if count == 0 {
                "no reported symptoms".to_string()
            } else {
                format!("{count} symptom{plural}")
            };
            format!(
                "With {lead} and a generally healthy lifestyle, your risk profile is Low ({score}%). \
                 Continue maintaining your current habits and stay consistent with regular preventive check-ups."
            )
        }
    }
}
