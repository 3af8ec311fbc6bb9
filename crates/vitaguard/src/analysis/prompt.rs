//! Prompt construction for the Gemini analysis call.
//!
//! The scoring-criteria block mirrors the deterministic engine's thresholds
//! so the external model scores on the same scale the fallback uses, and the
//! declared JSON schema is exactly what [`super::gemini`] validates against.

use super::questionnaire::{bmi_category, Questionnaire};

/// Serialize a questionnaire into the clinical analysis instruction block.
pub fn build_prompt(questionnaire: &Questionnaire) -> String {
    let mut symptom_list: Vec<&str> = questionnaire
        .symptoms
        .iter()
        .map(|symptom| symptom.label())
        .collect();
    if let Some(text) = questionnaire.other_symptoms_text() {
        symptom_list.push(text);
    }
    let symptoms = if symptom_list.is_empty() {
        "None reported".to_string()
    } else {
        symptom_list.join(", ")
    };

    let name = {
        let trimmed = questionnaire.name.trim();
        if trimmed.is_empty() {
            "Anonymous"
        } else {
            trimmed
        }
    };
    let age = questionnaire
        .age
        .map(|age| age.to_string())
        .unwrap_or_else(|| "Not provided".to_string());
    let bmi_info = match (questionnaire.height_cm, questionnaire.weight_kg) {
        (Some(height), Some(weight)) if height > 0.0 && weight > 0.0 => {
            let height_m = height / 100.0;
            let bmi = weight / (height_m * height_m);
            format!("{:.1} ({})", bmi, bmi_category(bmi))
        }
        _ => "Not calculable".to_string(),
    };

    let sleep = questionnaire.sleep.map_or("Not provided", |s| s.label());
    let exercise = questionnaire.exercise.map_or("Not provided", |e| e.label());
    let smoking = questionnaire.smoking.map_or("Not provided", |s| s.label());
    let alcohol = questionnaire.alcohol.map_or("Not provided", |a| a.label());

    format!(
        r#"You are a clinical health AI assistant for a preventive healthcare platform called VitaGuard. Analyze the following patient data and provide a structured, evidence-based health risk assessment.

PATIENT DATA:
- Name: {name}
- Age: {age}
- BMI: {bmi_info}
- Reported Symptoms: {symptoms}
- Sleep Duration: {sleep}
- Exercise Frequency: {exercise}
- Smoking Status: {smoking}
- Alcohol Consumption: {alcohol}

STRICT SCORING CRITERIA:
1. ZERO SYMPTOMS + GOOD HABITS: If the user reports "None" for symptoms AND has good sleep (7-9h)/exercise (Regular/Daily) AND is a non-smoker, the riskScore MUST be below 15 (Low Risk).
2. RISK SCORING (5-95):
   - 5-15 (Low): Healthy baseline, no major symptoms, proactive habits.
   - 16-35 (Moderate): Minor lifestyle risks (poor sleep/no exercise) or 1-2 mild symptoms (Fatigue/Headache).
   - 36+ (High): Significant symptoms (Chest Pain, Shortness of Breath) or multiple chronic lifestyle risks.
3. CLINICAL REASONING: Be objective. Do not default to high risk just for "safety" — be accurate to the data provided.

INSTRUCTIONS:
- Generate a riskScore (5-95) and riskLevel (Low < 16, Moderate 16-35, High > 35).
- Provide 4 clinical recommendations based ONLY on their reported data.
- Provide 4 daily tips personalized to their age and lifestyle.
- Calculate sub-category risk scores (0-100) for Cardiovascular, Respiratory, and Metabolic health.
- Write a 2-3 sentence summary that references their EXACT metrics and interpreted custom symptoms.

SPECIAL CRITERIA FOR CUSTOM SYMPTOMS:
- If the patient provides custom text in 'Reported Symptoms', prioritize its interpretation.
- For example, 'fever' should trigger respiratory/metabolic concern. 'stress' should trigger lifestyle tips.
- Reference their specific typed words in the recommendations.

IMPORTANT: Respond ONLY with valid JSON in the following exact format. No markdown, no code fences, no extra text:
{{
    "riskScore": <number 5-75>,
    "riskLevel": "<Low|Moderate|High>",
    "summary": "<A 2-3 sentence personalized clinical summary referencing actual patient data>",
    "recommendations": [
        "<specific recommendation 1>",
        "<specific recommendation 2>",
        "<specific recommendation 3>",
        "<specific recommendation 4>"
    ],
    "tips": [
        "<personalized daily health tip 1>",
        "<personalized daily health tip 2>",
        "<personalized daily health tip 3>",
        "<personalized daily health tip 4>"
    ],
    "details": [
        {{ "category": "Cardiovascular", "risk": "<Low|Moderate|Elevated>", "score": <number 0-100> }},
        {{ "category": "Respiratory", "risk": "<Low|Moderate|Elevated>", "score": <number 0-100> }},
        {{ "category": "Metabolic", "risk": "<Low|Moderate|Elevated>", "score": <number 0-100> }}
    ],
    "dietOptions": [
        "<personalized diet recommendation 1>",
        "<personalized diet recommendation 2>",
        "<personalized diet recommendation 3>",
        "<personalized diet recommendation 4>"
    ]
}}

QUALITY GUIDELINES (STRICT):
1. NO REPETITION: Each recommendation and tip must be unique. Do not repeat the same advice in different words.
2. CLINICAL DEPTH: Provide logical, evidence-based answers. Use specific nutrients (e.g., 'Magnesium for muscle cramps') rather than generic 'Eat healthy'.
3. DIET FOCUS: Tailor diet options to their symptoms (e.g., if acid reflux is mentioned, avoid spicy foods).
4. CONCISE & LOGICAL: Stick to the question. Do not provide fluff."#
    )
}
