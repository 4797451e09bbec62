use serde::{Deserialize, Serialize};

use super::super::domain::SurveyAnswers;

/// Question ids feeding the spending average. Answers are 1-4, mapped onto
/// 0-100 in 25-point steps.
const SPENDING_QUESTIONS: [&str; 4] = ["ST02-01", "ST02-06", "ST02-08", "ST02-32"];

const SAVING_QUESTIONS: [&str; 7] = [
    "ST02-02", "ST02-07", "ST02-10", "ST02-13", "ST02-14", "ST02-18", "ST02-40",
];

/// (question id, option count) pairs. Each answer is normalized by its own
/// option count so 4- and 5-option questions weigh equally.
const INVESTMENT_QUESTIONS: [(&str, u8); 7] = [
    ("FB01-3", 5),
    ("FB05-1", 4),
    ("FB05-3", 5),
    ("FB16-2", 4),
    ("FB22-3", 5),
    ("ST02-43", 4),
    ("ST02-46", 4),
];

const RISK_QUESTIONS: [(&str, u8); 6] = [
    ("FB02-1", 4),
    ("FB09-3", 5),
    ("FB11-3", 5),
    ("FB12-1", 5),
    ("FB17-1", 5),
    ("FB21-1", 2),
];

/// Score applied to a category when none of its questions were answered.
const NEUTRAL_SCORE: u8 = 50;

/// The four 0-100 category scores plus their exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub spending: u8,
    pub saving: u8,
    pub investment: u8,
    pub risk_management: u8,
    pub total: u16,
}

/// Compute all four category scores from the answer map.
///
/// `total` is the sum of the four already-rounded scores; it is never
/// re-derived from raw answers.
pub(crate) fn category_scores(answers: &SurveyAnswers) -> CategoryScores {
    let spending = quarter_step_average(answers, &SPENDING_QUESTIONS);
    let saving = quarter_step_average(answers, &SAVING_QUESTIONS);
    let investment = normalized_average(answers, &INVESTMENT_QUESTIONS);
    let risk_management = normalized_average(answers, &RISK_QUESTIONS);

    CategoryScores {
        spending,
        saving,
        investment,
        risk_management,
        total: u16::from(spending)
            + u16::from(saving)
            + u16::from(investment)
            + u16::from(risk_management),
    }
}

fn quarter_step_average(answers: &SurveyAnswers, questions: &[&str]) -> u8 {
    let mut sum = 0.0;
    let mut count = 0u32;

    for id in questions {
        if let Some(value) = answered(answers, id) {
            sum += f64::from(value - 1) * 25.0;
            count += 1;
        }
    }

    finish_average(sum, count)
}

fn normalized_average(answers: &SurveyAnswers, questions: &[(&str, u8)]) -> u8 {
    let mut sum = 0.0;
    let mut count = 0u32;

    for (id, option_count) in questions {
        if let Some(value) = answered(answers, id) {
            sum += f64::from(value - 1) / f64::from(option_count - 1) * 100.0;
            count += 1;
        }
    }

    finish_average(sum, count)
}

/// Option values are 1-based; zero means unanswered.
fn answered(answers: &SurveyAnswers, id: &str) -> Option<u8> {
    match answers.get(id) {
        None | Some(0) => None,
        Some(value) => Some(*value),
    }
}

fn finish_average(sum: f64, count: u32) -> u8 {
    if count == 0 {
        return NEUTRAL_SCORE;
    }
    (sum / f64::from(count)).round().clamp(0.0, 100.0) as u8
}
