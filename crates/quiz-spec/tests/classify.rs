use quiz_spec::{
    AnswerTag, FALLBACK_FOCUS, MessageCatalog, QuizSession, QuizSpec, Scorecard, Submission,
    WellnessResult, WellnessType,
};

fn tag(raw: &str) -> AnswerTag {
    raw.parse().expect("valid tag")
}

fn tags(raw: &[&str]) -> Vec<AnswerTag> {
    raw.iter().map(|value| tag(value)).collect()
}

fn run_quiz(spec: QuizSpec, answers: &[&str]) -> WellnessResult {
    let mut session = QuizSession::new(spec).expect("session");
    let mut last = None;
    for raw in answers {
        last = Some(session.submit_answer(tag(raw)).expect("submission"));
    }
    match last {
        Some(Submission::Complete(result)) => result,
        other => panic!("quiz did not complete: {:?}", other),
    }
}

fn balanced() -> QuizSpec {
    serde_json::from_str(include_str!("fixtures/balanced.json")).expect("deserialize")
}

#[test]
fn single_strong_eat_answer_still_lands_on_explorer() {
    // Scenario A: one eat question and one live question cap each score at 2.
    let result = run_quiz(
        QuizSpec::wellness(),
        &["eat_pro", "live_con", "challenge_time"],
    );
    assert_eq!(result.kind, WellnessType::Explorer);
    assert_eq!(result.scorecard.eat, 2);
    assert_eq!(result.scorecard.live, 0);
    assert!(result.message.contains("time"));
}

#[test]
fn neutral_answers_land_on_explorer_with_their_focus() {
    // Scenario B.
    let result = run_quiz(
        QuizSpec::wellness(),
        &["eat_neutral", "live_neutral", "challenge_motivation"],
    );
    assert_eq!(result.kind, WellnessType::Explorer);
    assert_eq!(result.scorecard.eat, 1);
    assert_eq!(result.scorecard.live, 1);
    assert!(result.message.contains("motivation"));
}

#[test]
fn missing_challenge_answer_falls_back_to_the_generic_phrase() {
    // Scenario C: no challenge-category answer was ever recorded.
    let catalog = MessageCatalog::new().expect("catalog");
    let card = Scorecard::tally(&tags(&["eat_pro", "live_neutral"]));
    assert_eq!(card.challenge_focus, None);

    let result = catalog.result_for(&card).expect("result");
    assert!(result.message.contains(FALLBACK_FOCUS));
}

#[test]
fn every_default_quiz_path_reaches_the_explorer_branch() {
    // With one question per category the >= 3 thresholds are unreachable.
    let spec = QuizSpec::wellness();
    for first in &spec.questions[0].options {
        for second in &spec.questions[1].options {
            for third in &spec.questions[2].options {
                let card = Scorecard::tally(&[
                    first.tag.clone(),
                    second.tag.clone(),
                    third.tag.clone(),
                ]);
                assert_eq!(card.classify(), WellnessType::Explorer);
            }
        }
    }
}

#[test]
fn both_categories_strong_selects_champion() {
    let result = run_quiz(
        balanced(),
        &["eat_pro", "eat_pro", "live_pro", "live_neutral", "challenge_time"],
    );
    assert_eq!(result.kind, WellnessType::Champion);
    assert_eq!(result.scorecard.eat, 4);
    assert_eq!(result.scorecard.live, 3);
    // The champion message carries no challenge interpolation.
    assert!(!result.message.contains("time"));
}

#[test]
fn strong_eating_alone_selects_eat_enthusiast() {
    let result = run_quiz(
        balanced(),
        &["eat_pro", "eat_pro", "live_con", "live_con", "challenge_time"],
    );
    assert_eq!(result.kind, WellnessType::EatEnthusiast);
    assert!(result.message.contains("Focus on overcoming time."));
}

#[test]
fn strong_living_alone_selects_live_mover() {
    let result = run_quiz(
        balanced(),
        &["eat_con", "eat_con", "live_pro", "live_pro", "challenge_motivation"],
    );
    assert_eq!(result.kind, WellnessType::LiveMover);
    assert!(result.message.contains("motivation"));
}

#[test]
fn threshold_is_met_at_exactly_three_points() {
    let at_threshold = Scorecard::tally(&tags(&["eat_pro", "eat_neutral"]));
    assert_eq!(at_threshold.eat, 3);
    assert_eq!(at_threshold.classify(), WellnessType::EatEnthusiast);

    let below_threshold = Scorecard::tally(&tags(&["eat_neutral", "eat_neutral"]));
    assert_eq!(below_threshold.eat, 2);
    assert_eq!(below_threshold.classify(), WellnessType::Explorer);
}

#[test]
fn reordering_answers_preserves_scores_and_branch() {
    let forward = Scorecard::tally(&tags(&[
        "eat_pro",
        "eat_neutral",
        "live_con",
        "challenge_time",
    ]));
    let shuffled = Scorecard::tally(&tags(&[
        "challenge_time",
        "live_con",
        "eat_neutral",
        "eat_pro",
    ]));
    assert_eq!(forward.eat, shuffled.eat);
    assert_eq!(forward.live, shuffled.live);
    assert_eq!(forward.classify(), shuffled.classify());
}

#[test]
fn the_last_challenge_answer_wins() {
    let card = Scorecard::tally(&tags(&["challenge_motivation", "challenge_time"]));
    assert_eq!(card.challenge_focus.as_deref(), Some("time"));
}

#[test]
fn unknown_payloads_score_zero() {
    let card = Scorecard::tally(&tags(&["eat_sometimes", "live_maybe"]));
    assert_eq!(card.eat, 0);
    assert_eq!(card.live, 0);
}
