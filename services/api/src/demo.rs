use clap::Args;
use std::path::PathBuf;
use vitaguard::analysis::{
    scoring, AlcoholUse, ExerciseHabit, GeminiClient, HealthAnalyzer, Questionnaire, RiskAnalysis,
    SleepPattern, SmokingStatus, Symptom,
};
use vitaguard::config::AppConfig;
use vitaguard::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a questionnaire JSON file
    pub(crate) input: PathBuf,
    /// Skip the Gemini call and use the deterministic engine directly
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full advice lists instead of the summary line only
    #[arg(long)]
    pub(crate) verbose: bool,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { input, offline } = args;

    let raw = tokio::fs::read_to_string(&input).await?;
    let questionnaire: Questionnaire = serde_json::from_str(&raw)?;

    let analyzer = if offline {
        HealthAnalyzer::offline()
    } else {
        let config = AppConfig::load()?;
        HealthAnalyzer::new(GeminiClient::new(&config.gemini)?)
    };

    let analysis = analyzer.analyze(&questionnaire).await;
    render_report(&analysis, true);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Health risk analysis demo (deterministic engine)");

    for (label, questionnaire) in demo_profiles() {
        println!("\n=== {label} ===");
        let analysis = scoring::analyze(&questionnaire);
        render_report(&analysis, args.verbose);
    }

    Ok(())
}

fn demo_profiles() -> Vec<(&'static str, Questionnaire)> {
    let blank = Questionnaire {
        name: String::new(),
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
    };

    vec![
        (
            "Healthy adult",
            Questionnaire {
                name: "Avery".to_string(),
                age: Some(25),
                height_cm: Some(175.0),
                weight_kg: Some(70.0),
                sleep: Some(SleepPattern::SevenToNine),
                exercise: Some(ExerciseHabit::Daily),
                smoking: Some(SmokingStatus::Non),
                alcohol: Some(AlcoholUse::None),
                ..blank.clone()
            },
        ),
        (
            "Cardiac symptoms with lifestyle risk",
            Questionnaire {
                name: "Morgan".to_string(),
                age: Some(55),
                height_cm: Some(170.0),
                weight_kg: Some(95.0),
                symptoms: vec![Symptom::ChestPain, Symptom::ShortnessOfBreath],
                sleep: Some(SleepPattern::LessThanFive),
                exercise: Some(ExerciseHabit::Never),
                smoking: Some(SmokingStatus::Regular),
                alcohol: Some(AlcoholUse::High),
                ..blank.clone()
            },
        ),
        (
            "Partial answers",
            Questionnaire {
                symptoms: vec![Symptom::Fatigue, Symptom::Dizziness],
                other_symptoms: Some("trouble focusing in the afternoon".to_string()),
                ..blank
            },
        ),
    ]
}

fn render_report(analysis: &RiskAnalysis, verbose: bool) {
    println!(
        "{} | {} risk ({}%) | source {} | {}",
        analysis.user_name,
        analysis.risk_level.label(),
        analysis.risk_score,
        analysis.source.label(),
        analysis.date
    );
    println!("Summary: {}", analysis.summary);

    println!("Category breakdown");
    for detail in &analysis.details {
        println!(
            "- {}: {} ({}%)",
            detail.category.label(),
            detail.risk.label(),
            detail.score
        );
    }

    if !verbose {
        return;
    }

    println!("Recommendations");
    for item in &analysis.recommendations {
        println!("- {item}");
    }
    println!("Health tips");
    for item in &analysis.tips {
        println!("- {item}");
    }
    println!("Diet options");
    for item in &analysis.diet_options {
        println!("- {item}");
    }
}
