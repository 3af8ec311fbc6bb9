use serde::{Deserialize, Serialize};

/// Assumed age when the questionnaire omits one or reports a negative value.
pub const DEFAULT_AGE: i32 = 25;
/// Assumed height in centimeters when absent.
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Assumed-healthy BMI when weight is unavailable.
pub const DEFAULT_BMI: f64 = 22.0;

/// Self-reported health questionnaire, immutable once submitted.
///
/// Every field apart from the name is optional; the scoring engine applies
/// the documented defaults instead of rejecting incomplete input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub other_symptoms: Option<String>,
    #[serde(default)]
    pub sleep: Option<SleepPattern>,
    #[serde(default)]
    pub exercise: Option<ExerciseHabit>,
    #[serde(default)]
    pub smoking: Option<SmokingStatus>,
    #[serde(default)]
    pub alcohol: Option<AlcoholUse>,
}

impl Questionnaire {
    /// Age used for scoring; negative or absent ages fall back to the default.
    pub fn effective_age(&self) -> i32 {
        match self.age {
            Some(age) if age >= 0 => age,
            _ => DEFAULT_AGE,
        }
    }

    /// Body-mass index derived from height and weight, with the documented
    /// defaults when either is absent or non-positive.
    pub fn bmi(&self) -> f64 {
        let height_cm = self
            .height_cm
            .filter(|height| *height > 0.0)
            .unwrap_or(DEFAULT_HEIGHT_CM);
        let height_m = height_cm / 100.0;
        match self.weight_kg {
            Some(weight) if weight > 0.0 => weight / (height_m * height_m),
            _ => DEFAULT_BMI,
        }
    }

    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    /// Trimmed free-text symptom description, if one was supplied.
    pub fn other_symptoms_text(&self) -> Option<&str> {
        self.other_symptoms
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn has_other_symptoms(&self) -> bool {
        self.other_symptoms_text().is_some()
    }

    /// Symptom count quoted in the summary narrative: every checkbox entry
    /// plus one for a free-text description.
    pub fn reported_symptom_count(&self) -> usize {
        self.symptoms.len() + usize::from(self.has_other_symptoms())
    }

    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "User"
        } else {
            trimmed
        }
    }
}

/// BMI category label used in the prompt and nutrition advice.
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Fixed symptom vocabulary offered by the intake form.
///
/// "None of the above" is mutually exclusive with the rest at the UI layer,
/// but the engine tolerates any combination and simply scores it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symptom {
    #[serde(rename = "Chest Pain")]
    ChestPain,
    #[serde(rename = "Shortness of Breath")]
    ShortnessOfBreath,
    Fatigue,
    Dizziness,
    #[serde(rename = "Persistent Cough")]
    PersistentCough,
    Nausea,
    #[serde(rename = "Frequent Urination")]
    FrequentUrination,
    Headache,
    #[serde(rename = "None of the above")]
    NoneOfTheAbove,
}

impl Symptom {
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::ChestPain => "Chest Pain",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::Fatigue => "Fatigue",
            Symptom::Dizziness => "Dizziness",
            Symptom::PersistentCough => "Persistent Cough",
            Symptom::Nausea => "Nausea",
            Symptom::FrequentUrination => "Frequent Urination",
            Symptom::Headache => "Headache",
            Symptom::NoneOfTheAbove => "None of the above",
        }
    }

    /// Points this symptom contributes to the overall risk score.
    pub(crate) const fn risk_weight(self) -> i32 {
        match self {
            Symptom::ChestPain => 6,
            Symptom::ShortnessOfBreath => 5,
            Symptom::Dizziness => 4,
            Symptom::FrequentUrination => 4,
            Symptom::Fatigue => 3,
            Symptom::PersistentCough => 3,
            Symptom::Nausea => 3,
            Symptom::Headache => 2,
            Symptom::NoneOfTheAbove => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepPattern {
    #[serde(rename = "less_5")]
    LessThanFive,
    #[serde(rename = "5_7")]
    FiveToSeven,
    #[serde(rename = "7_9")]
    SevenToNine,
    #[serde(rename = "9_plus")]
    NinePlus,
}

impl SleepPattern {
    pub const fn label(self) -> &'static str {
        match self {
            SleepPattern::LessThanFive => "Less than 5 hours",
            SleepPattern::FiveToSeven => "5-7 hours",
            SleepPattern::SevenToNine => "7-9 hours",
            SleepPattern::NinePlus => "More than 9 hours",
        }
    }

    pub(crate) const fn risk_weight(self) -> i32 {
        match self {
            SleepPattern::LessThanFive => 5,
            SleepPattern::FiveToSeven => 2,
            SleepPattern::SevenToNine => 0,
            SleepPattern::NinePlus => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseHabit {
    Never,
    Sometimes,
    Regular,
    Daily,
}

impl ExerciseHabit {
    pub const fn label(self) -> &'static str {
        match self {
            ExerciseHabit::Never => "Rarely or never",
            ExerciseHabit::Sometimes => "1-2 days/week",
            ExerciseHabit::Regular => "3-4 days/week",
            ExerciseHabit::Daily => "Daily",
        }
    }

    pub(crate) const fn risk_weight(self) -> i32 {
        match self {
            ExerciseHabit::Never => 5,
            ExerciseHabit::Sometimes => 2,
            ExerciseHabit::Regular => 0,
            ExerciseHabit::Daily => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Non,
    Former,
    Occasional,
    Regular,
}

impl SmokingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SmokingStatus::Non => "Non-smoker",
            SmokingStatus::Former => "Former smoker",
            SmokingStatus::Occasional => "Occasional smoker",
            SmokingStatus::Regular => "Regular smoker",
        }
    }

    pub(crate) const fn risk_weight(self) -> i32 {
        match self {
            SmokingStatus::Non => 0,
            SmokingStatus::Former => 2,
            SmokingStatus::Occasional => 4,
            SmokingStatus::Regular => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholUse {
    None,
    Low,
    Moderate,
    High,
}

impl AlcoholUse {
    pub const fn label(self) -> &'static str {
        match self {
            AlcoholUse::None => "None",
            AlcoholUse::Low => "Occasional / Low",
            AlcoholUse::Moderate => "Moderate",
            AlcoholUse::High => "High",
        }
    }

    pub(crate) const fn risk_weight(self) -> i32 {
        match self {
            AlcoholUse::None => 0,
            AlcoholUse::Low => 1,
            AlcoholUse::Moderate => 3,
            AlcoholUse::High => 5,
        }
    }
}
