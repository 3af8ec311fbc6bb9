use std::sync::{Arc, Mutex};

use crate::analysis::history::{AssessmentRecord, AssessmentStore, StoreError};
use crate::analysis::questionnaire::{
    AlcoholUse, ExerciseHabit, Questionnaire, SleepPattern, SmokingStatus, Symptom,
};

/// Baseline questionnaire with every optional field absent.
pub(super) fn blank_questionnaire() -> Questionnaire {
    Questionnaire {
        name: "Jordan".to_string(),
        age: None,
        gender: None,
        height_cm: None,
        weight_kg: None,
        symptoms: Vec::new(),
        other_symptoms: None,
        sleep: None,
        exercise: None,
        smoking: None,
        alcohol: None,
    }
}

/// Fully healthy profile, expected score 0 / Low.
pub(super) fn healthy_profile() -> Questionnaire {
    Questionnaire {
        age: Some(25),
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        sleep: Some(SleepPattern::SevenToNine),
        exercise: Some(ExerciseHabit::Daily),
        smoking: Some(SmokingStatus::Non),
        alcohol: Some(AlcoholUse::None),
        ..blank_questionnaire()
    }
}

/// Cardiac symptoms plus every lifestyle risk, score 45 / High.
pub(super) fn high_risk_profile() -> Questionnaire {
    Questionnaire {
        age: Some(55),
        height_cm: Some(170.0),
        weight_kg: Some(95.0),
        symptoms: vec![Symptom::ChestPain, Symptom::ShortnessOfBreath],
        sleep: Some(SleepPattern::LessThanFive),
        exercise: Some(ExerciseHabit::Never),
        smoking: Some(SmokingStatus::Regular),
        alcohol: Some(AlcoholUse::High),
        ..blank_questionnaire()
    }
}

/// Fatigue + dizziness with everything else absent, score 10 / Low.
pub(super) fn fatigue_dizziness_profile() -> Questionnaire {
    Questionnaire {
        symptoms: vec![Symptom::Fatigue, Symptom::Dizziness],
        ..blank_questionnaire()
    }
}

/// A well-formed model payload matching the declared output schema.
pub(super) fn model_reply_json(risk_score: i64) -> String {
    format!(
        r#"{{
            "riskScore": {risk_score},
            "riskLevel": "Moderate",
            "summary": "Your profile shows moderate cardiovascular strain driven by smoking and poor sleep.",
            "recommendations": [
                "Schedule a lipid panel and resting ECG within the next month.",
                "Replace one smoking break per day with a short walk.",
                "Adopt a fixed 11pm-7am sleep window for two weeks.",
                "Track blood pressure twice weekly."
            ],
            "tips": [
                "Keep a water bottle at your desk.",
                "Swap refined snacks for nuts.",
                "Stretch for five minutes each morning.",
                "Take stairs instead of elevators."
            ],
            "details": [
                {{ "category": "Cardiovascular", "risk": "Moderate", "score": 38 }},
                {{ "category": "Respiratory", "risk": "Low", "score": 18 }},
                {{ "category": "Metabolic", "risk": "Moderate", "score": 27 }}
            ],
            "dietOptions": [
                "Oily fish twice a week for omega-3 intake.",
                "Leafy greens with every dinner.",
                "Limit added sugar to under 25g daily.",
                "Choose whole-grain bread over white."
            ]
        }}"#
    )
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentStore for MemoryStore {
    fn append(&self, record: AssessmentRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

/// Store that rejects every write, for exercising the best-effort path.
pub(super) struct UnavailableStore;

impl AssessmentStore for UnavailableStore {
    fn append(&self, _record: AssessmentRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}
