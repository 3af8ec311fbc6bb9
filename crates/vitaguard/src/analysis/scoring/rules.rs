use super::{SCORE_CEILING, SCORE_FLOOR};
use crate::analysis::questionnaire::{
    AlcoholUse, ExerciseHabit, Questionnaire, SleepPattern, SmokingStatus, Symptom,
};
use crate::analysis::report::{CategoryBand, CategoryDetail, RiskCategory};

/// Flat bump applied when a free-text symptom description is present.
const OTHER_SYMPTOMS_BUMP: i32 = 5;

/// Dangerous symptom combinations that add risk beyond their individual
/// weights. All applicable bonuses apply simultaneously.
const CO_OCCURRENCE_BONUSES: [(Symptom, Symptom, i32); 3] = [
    (Symptom::ChestPain, Symptom::ShortnessOfBreath, 5),
    (Symptom::Fatigue, Symptom::Dizziness, 3),
    (Symptom::Nausea, Symptom::FrequentUrination, 3),
];

/// Accumulate the overall risk score and clamp it to the engine's band.
///
/// Contradictory input (concrete symptoms alongside "None of the above") is
/// summed leniently rather than rejected; the calibration thresholds assume
/// this behavior.
pub(crate) fn risk_score(questionnaire: &Questionnaire) -> u32 {
    let mut score: i32 = 0;

    if questionnaire.has_other_symptoms() {
        score += OTHER_SYMPTOMS_BUMP;
    }

    score += questionnaire
        .symptoms
        .iter()
        .map(|symptom| symptom.risk_weight())
        .sum::<i32>();
    score += co_occurrence_bonus(questionnaire);

    score += questionnaire.sleep.map_or(0, SleepPattern::risk_weight);
    score += questionnaire.exercise.map_or(0, ExerciseHabit::risk_weight);
    score += questionnaire.smoking.map_or(0, SmokingStatus::risk_weight);
    score += questionnaire.alcohol.map_or(0, AlcoholUse::risk_weight);

    score += age_adjustment(questionnaire.effective_age());
    score += bmi_adjustment(questionnaire.bmi());

    score.clamp(SCORE_FLOOR, SCORE_CEILING) as u32
}

fn co_occurrence_bonus(questionnaire: &Questionnaire) -> i32 {
    CO_OCCURRENCE_BONUSES
        .iter()
        .filter(|(first, second, _)| {
            questionnaire.has_symptom(*first) && questionnaire.has_symptom(*second)
        })
        .map(|(_, _, bonus)| bonus)
        .sum()
}

fn age_adjustment(age: i32) -> i32 {
    if age > 50 {
        4
    } else if age > 40 {
        2
    } else if age > 30 {
        1
    } else {
        0
    }
}

fn bmi_adjustment(bmi: f64) -> i32 {
    if bmi > 30.0 {
        4
    } else if bmi > 25.0 {
        2
    } else if bmi < 18.5 {
        2
    } else {
        0
    }
}

const CATEGORY_BASE: i32 = 5;
const CATEGORY_CEILING: i32 = 100;

/// Body-system sub-scores, always three entries in the fixed order.
pub(crate) fn category_details(questionnaire: &Questionnaire) -> Vec<CategoryDetail> {
    vec![
        detail(
            RiskCategory::Cardiovascular,
            cardiovascular_score(questionnaire),
        ),
        detail(RiskCategory::Respiratory, respiratory_score(questionnaire)),
        detail(RiskCategory::Metabolic, metabolic_score(questionnaire)),
    ]
}

fn detail(category: RiskCategory, score: u32) -> CategoryDetail {
    CategoryDetail {
        category,
        risk: CategoryBand::from_score(score),
        score,
    }
}

fn cardiovascular_score(questionnaire: &Questionnaire) -> u32 {
    let mut score = CATEGORY_BASE;
    if questionnaire.has_symptom(Symptom::ChestPain) {
        score += 25;
    }
    if questionnaire.has_symptom(Symptom::Dizziness) {
        score += 10;
    }
    if questionnaire.has_symptom(Symptom::ShortnessOfBreath) {
        score += 10;
    }
    score += match questionnaire.smoking {
        Some(SmokingStatus::Regular) => 15,
        Some(SmokingStatus::Occasional) => 8,
        _ => 0,
    };
    if questionnaire.exercise == Some(ExerciseHabit::Never) {
        score += 10;
    }
    let bmi = questionnaire.bmi();
    if bmi > 30.0 {
        score += 10;
    } else if bmi > 25.0 {
        score += 5;
    }
    if questionnaire.effective_age() > 50 {
        score += 8;
    }
    score.min(CATEGORY_CEILING) as u32
}

fn respiratory_score(questionnaire: &Questionnaire) -> u32 {
    let mut score = CATEGORY_BASE;
    if questionnaire.has_symptom(Symptom::ShortnessOfBreath) {
        score += 25;
    }
    if questionnaire.has_symptom(Symptom::PersistentCough) {
        score += 20;
    }
    score += match questionnaire.smoking {
        Some(SmokingStatus::Regular) => 20,
        Some(SmokingStatus::Occasional) => 10,
        Some(SmokingStatus::Former) => 5,
        _ => 0,
    };
    if questionnaire.has_symptom(Symptom::ChestPain) {
        score += 5;
    }
    score.min(CATEGORY_CEILING) as u32
}

fn metabolic_score(questionnaire: &Questionnaire) -> u32 {
    let mut score = CATEGORY_BASE;
    if questionnaire.has_symptom(Symptom::FrequentUrination) {
        score += 20;
    }
    if questionnaire.has_symptom(Symptom::Fatigue) {
        score += 10;
    }
    if questionnaire.has_symptom(Symptom::Nausea) {
        score += 8;
    }
    if questionnaire.exercise == Some(ExerciseHabit::Never) {
        score += 10;
    }
    let bmi = questionnaire.bmi();
    if bmi > 30.0 {
        score += 15;
    } else if bmi > 25.0 {
        score += 8;
    }
    score += match questionnaire.alcohol {
        Some(AlcoholUse::High) => 10,
        Some(AlcoholUse::Moderate) => 5,
        _ => 0,
    };
    score.min(CATEGORY_CEILING) as u32
}
