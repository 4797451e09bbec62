use std::sync::Arc;

use super::common::{
    answers_from, deterministic_analyzer, fixed_now, sample_answers, submission, FixedStamper,
};
use crate::survey::analysis::{detailed_scores, AnalyzerConfig, ProfileAnalyzer};
use crate::survey::domain::SurveyAnswers;

#[test]
fn report_assembles_every_section() {
    let analyzer = deterministic_analyzer();
    let report = analyzer.analyze(&submission(sample_answers(), 1986));

    assert_eq!(report.analysis_id, "ARU-TEST-0001");
    assert_eq!(report.generated_at, fixed_now());
    assert_eq!(report.scores.total, 162);
    assert_eq!(report.animal_type, "거북이형");
    assert!(report.animal_type_description.contains("안전한 투자"));
    assert_eq!(report.life_clock.age, 40);
    assert_eq!(report.recommendations.investment.len(), 4);
    assert_eq!(report.raw_analysis.personal_info.birth_year, 1986);
}

#[test]
fn empty_answers_produce_the_neutral_mid_tier_report() {
    let analyzer = deterministic_analyzer();
    let report = analyzer.analyze(&submission(SurveyAnswers::new(), 1986));

    assert_eq!(report.scores.total, 200);
    assert_eq!(report.animal_type, "양형");
    assert!(report.raw_analysis.detailed_scores.is_empty());
}

#[test]
fn repeated_analysis_is_deterministic_apart_from_the_stamp() {
    let analyzer = deterministic_analyzer();
    let input = submission(sample_answers(), 1986);

    let first = analyzer.analyze(&input);
    let second = analyzer.analyze(&input);

    assert_eq!(first.scores, second.scores);
    assert_eq!(first.animal_type, second.animal_type);
    assert_eq!(first.animal_type_description, second.animal_type_description);
    assert_eq!(first.life_clock, second.life_clock);
    assert_eq!(first.recommendations, second.recommendations);
    assert_ne!(first.analysis_id, second.analysis_id);
}

#[test]
fn detailed_scores_cover_every_submitted_answer() {
    let answers = answers_from(&[("FB01-3", 3), ("ST02-43", 2), ("BOGUS-1", 1)]);

    let detailed = detailed_scores(&answers);

    assert_eq!(detailed.len(), 3);
    assert_eq!(detailed["FB01-3"].score, 3);
    assert_eq!(detailed["ST02-43"].category, "unknown");
    assert_eq!(detailed["BOGUS-1"].category, "unknown");
}

#[test]
fn system_stamper_ids_follow_the_aru_format() {
    let analyzer = ProfileAnalyzer::new(AnalyzerConfig::default());
    let report = analyzer.analyze(&submission(SurveyAnswers::new(), 1990));

    let mut parts = report.analysis_id.splitn(3, '-');
    assert_eq!(parts.next(), Some("ARU"));
    let millis = parts.next().expect("timestamp segment");
    assert!(millis.chars().all(|c| c.is_ascii_digit()));
    let suffix = parts.next().expect("random segment");
    assert_eq!(suffix.len(), 6);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn report_serializes_with_the_stored_document_field_names() {
    let analyzer = deterministic_analyzer();
    let report = analyzer.analyze(&submission(sample_answers(), 1986));

    let value = serde_json::to_value(&report).expect("report serializes");

    assert!(value.get("analysisId").is_some());
    assert!(value.get("generatedAt").is_some());
    assert!(value["scores"].get("riskManagement").is_some());
    assert_eq!(value["lifeClock"]["phase"], "중년기 진입");
    assert_eq!(value["animalType"], "거북이형");
    assert!(value["recommendations"].get("risk").is_some());
    assert_eq!(
        value["rawAnalysis"]["detailedScores"]["ST02-43"]["type"],
        "unknown"
    );
    assert_eq!(value["rawAnalysis"]["personalInfo"]["birthYear"], 1986);
}

#[test]
fn band_configuration_moves_the_classification() {
    let config = AnalyzerConfig {
        band_thresholds: crate::survey::analysis::BandThresholds {
            aggressive: 160,
            active: 120,
            balanced: 80,
            conservative: 40,
        },
        ..AnalyzerConfig::default()
    };
    let analyzer =
        ProfileAnalyzer::with_stamper(config, Arc::new(FixedStamper::new(fixed_now())));

    let report = analyzer.analyze(&submission(sample_answers(), 1986));

    assert_eq!(report.animal_type, "돼지형");
}
