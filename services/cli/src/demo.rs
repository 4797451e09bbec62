use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use arune::config::AppConfig;
use arune::error::AppError;
use arune::survey::{
    AruneReport, CallerIdentity, PersonalInfo, ProfileAnalyzer, SessionId, SessionRecord,
    SessionStatus, SessionStore, SurveyAnswers, SurveyService, SurveyState, SurveySubmission,
    UserId, UserRole,
};
use chrono::{Datelike, Utc};
use clap::Args;
use tracing::info;

use crate::infra::{sample_answers, InMemorySessionStore};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Birth year for the demo respondent (defaults to a 40-year-old)
    #[arg(long)]
    pub(crate) birth_year: Option<i32>,
    /// Emit the full report as JSON instead of the readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON object mapping question ids to chosen option values
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Birth year of the respondent
    #[arg(long)]
    pub(crate) birth_year: i32,
    /// Emit the full report as JSON instead of the readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let birth_year = args.birth_year.unwrap_or_else(|| Utc::now().year() - 40);

    let store = Arc::new(InMemorySessionStore::default());
    let service = SurveyService::new(store.clone(), config.analyzer.clone());

    let client = CallerIdentity {
        user_id: UserId("demo-employee".to_string()),
        role: UserRole::Employee,
    };
    let session = store.insert(SessionRecord {
        session_id: SessionId("demo-session".to_string()),
        client: client.user_id.clone(),
        advisor: Some(UserId("demo-advisor".to_string())),
        scheduled_date: Utc::now(),
        status: SessionStatus::Scheduled,
        survey: SurveyState::pending(),
        report: None,
    })?;

    let receipt = service.submit_survey(
        &session.session_id,
        &client,
        SurveySubmission {
            answers: sample_answers(),
            personal_info: demo_personal_info(birth_year),
        },
    )?;
    info!(session_id = %receipt.session_id.0, "demo survey submitted");

    let report = service.generate_report(&session.session_id, &client)?;
    render_report(&report, args.json)
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.answers)?;
    let answers: SurveyAnswers = serde_json::from_str(&raw)?;

    let analyzer = ProfileAnalyzer::new(config.analyzer.clone());
    let report = analyzer.analyze(&SurveySubmission {
        answers,
        personal_info: demo_personal_info(args.birth_year),
    });

    render_report(&report, args.json)
}

fn demo_personal_info(birth_year: i32) -> PersonalInfo {
    PersonalInfo {
        birth_year,
        gender: None,
        occupation: None,
        marital_status: None,
    }
}

fn render_report(report: &AruneReport, as_json: bool) -> Result<(), AppError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Arune report {}", report.analysis_id);
    println!("Generated at: {}", report.generated_at);

    println!("\nScores");
    println!("- spending: {}", report.scores.spending);
    println!("- saving: {}", report.scores.saving);
    println!("- investment: {}", report.scores.investment);
    println!("- risk management: {}", report.scores.risk_management);
    println!("- total: {}", report.scores.total);

    println!("\nProfile: {}", report.animal_type);
    println!("{}", report.animal_type_description);

    println!(
        "\nLife clock: {} ({}, {}% of the journey, age {})",
        report.life_clock.time_string,
        report.life_clock.phase.label(),
        report.life_clock.percentage_complete,
        report.life_clock.age
    );

    for (title, lines) in [
        ("Spending", &report.recommendations.spending),
        ("Saving", &report.recommendations.saving),
        ("Investment", &report.recommendations.investment),
        ("Risk", &report.recommendations.risk),
    ] {
        println!("\n{title} recommendations");
        for line in lines {
            println!("- {line}");
        }
    }

    Ok(())
}
