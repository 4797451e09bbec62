use crate::survey::catalog::{question, questions, score_for};

#[test]
fn known_answers_map_to_their_score_and_category() {
    let result = score_for("FB01-3", 3);

    assert_eq!(result.question_id.as_deref(), Some("FB01-3"));
    assert_eq!(result.score, 3);
    assert_eq!(result.category, "비용");
    assert_eq!(result.text, "수수료(비용)");
}

#[test]
fn option_scores_are_not_always_the_option_value() {
    // FB17-1 weights family history: option 1 (cancer) scores 4.
    let result = score_for("FB17-1", 1);

    assert_eq!(result.score, 4);
    assert_eq!(result.category, "암가족력");
}

#[test]
fn unknown_question_degrades_to_the_neutral_result() {
    let result = score_for("XX99-9", 1);

    assert_eq!(result.score, 0);
    assert_eq!(result.category, "unknown");
    assert_eq!(result.text, "");
    assert!(result.question_id.is_none());
}

#[test]
fn invalid_option_value_degrades_to_the_neutral_result() {
    let result = score_for("FB21-1", 9);

    assert_eq!(result.score, 0);
    assert_eq!(result.category, "unknown");
}

#[test]
fn catalog_holds_the_full_question_set() {
    assert_eq!(questions().len(), 26);
    assert!(question("FB01-3").is_some());
    assert!(question("ST02-56").is_some());
}

#[test]
fn scored_investment_questions_are_not_all_catalogued() {
    // ST02-43/ST02-46 feed the investment average but have no catalog entry;
    // their detailed-score lookups stay neutral.
    assert!(question("ST02-43").is_none());
    assert!(question("ST02-46").is_none());
    assert_eq!(score_for("ST02-43", 2).category, "unknown");
}

#[test]
fn extended_option_sets_reuse_scores() {
    // FB09-3 options 6 and 7 both score 4 alongside distinct categories.
    assert_eq!(score_for("FB09-3", 6).score, 4);
    assert_eq!(score_for("FB09-3", 7).score, 4);
    assert_eq!(score_for("FB09-3", 6).category, "서적");
}
