use quiz_spec::{
    AnswerTag, QuizSession, QuizSpec, SessionError, SessionStatus, Submission, WellnessType,
};

fn tag(raw: &str) -> AnswerTag {
    raw.parse().expect("valid tag")
}

fn wellness_session() -> QuizSession {
    QuizSession::new(QuizSpec::wellness()).expect("session")
}

#[test]
fn fresh_session_starts_at_question_zero() {
    let session = wellness_session();
    assert_eq!(session.status(), SessionStatus::InProgress { index: 0 });
    assert_eq!(session.answered(), 0);
    assert_eq!(session.total(), 3);
    assert!(!session.is_complete());
    assert!(session.result().is_none());
    assert_eq!(session.current_question().unwrap().id, "cooking");
}

#[test]
fn each_submission_advances_by_exactly_one() {
    let mut session = wellness_session();

    assert_eq!(
        session.submit_answer(tag("eat_pro")).unwrap(),
        Submission::Next(1)
    );
    assert_eq!(session.answered(), 1);
    assert_eq!(session.status(), SessionStatus::InProgress { index: 1 });
    assert_eq!(session.current_question().unwrap().id, "activity");

    assert_eq!(
        session.submit_answer(tag("live_neutral")).unwrap(),
        Submission::Next(2)
    );
    assert_eq!(session.answered(), 2);
    assert_eq!(session.current_question().unwrap().id, "challenge");
}

#[test]
fn completes_after_the_final_answer() {
    let mut session = wellness_session();
    session.submit_answer(tag("eat_pro")).unwrap();
    session.submit_answer(tag("live_pro")).unwrap();

    let submission = session.submit_answer(tag("challenge_time")).unwrap();
    let result = match submission {
        Submission::Complete(result) => result,
        other => panic!("expected completion, got {:?}", other),
    };

    assert!(session.is_complete());
    assert_eq!(session.status(), SessionStatus::Completed);
    assert_eq!(session.answers().len(), 3);
    assert_eq!(session.result(), Some(&result));
}

#[test]
fn current_question_fails_once_complete() {
    let mut session = wellness_session();
    session.submit_answer(tag("eat_con")).unwrap();
    session.submit_answer(tag("live_con")).unwrap();
    session.submit_answer(tag("challenge_cost")).unwrap();

    assert!(matches!(
        session.current_question(),
        Err(SessionError::AlreadyComplete)
    ));
}

#[test]
fn submitting_after_completion_is_an_invalid_transition() {
    let mut session = wellness_session();
    session.submit_answer(tag("eat_con")).unwrap();
    session.submit_answer(tag("live_con")).unwrap();
    session.submit_answer(tag("challenge_cost")).unwrap();

    assert!(matches!(
        session.submit_answer(tag("challenge_time")),
        Err(SessionError::AlreadyComplete)
    ));
}

#[test]
fn rejects_answers_the_current_question_does_not_offer() {
    let mut session = wellness_session();

    let err = session.submit_answer(tag("live_pro")).unwrap_err();
    match err {
        SessionError::AnswerNotOffered { question_id, tag } => {
            assert_eq!(question_id, "cooking");
            assert_eq!(tag, "live_pro");
        }
        other => panic!("expected AnswerNotOffered, got {:?}", other),
    }
    // The rejected answer leaves the session untouched.
    assert_eq!(session.answered(), 0);
    assert_eq!(session.status(), SessionStatus::InProgress { index: 0 });
}

#[test]
fn reset_returns_to_the_initial_state_from_any_point() {
    let mut session = wellness_session();
    session.submit_answer(tag("eat_pro")).unwrap();
    session.reset();
    assert_eq!(session.status(), SessionStatus::InProgress { index: 0 });
    assert!(session.answers().is_empty());

    session.submit_answer(tag("eat_pro")).unwrap();
    session.submit_answer(tag("live_pro")).unwrap();
    session.submit_answer(tag("challenge_time")).unwrap();
    assert!(session.is_complete());

    session.reset();
    assert_eq!(session.status(), SessionStatus::InProgress { index: 0 });
    assert!(session.answers().is_empty());
    assert!(session.result().is_none());
}

#[test]
fn reset_mid_quiz_leaves_no_residue_in_the_next_result() {
    let mut session = wellness_session();
    session.submit_answer(tag("eat_pro")).unwrap();
    session.reset();

    session.submit_answer(tag("eat_con")).unwrap();
    session.submit_answer(tag("live_pro")).unwrap();
    let submission = session.submit_answer(tag("challenge_cost")).unwrap();

    let result = match submission {
        Submission::Complete(result) => result,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(result.kind, WellnessType::Explorer);
    assert_eq!(result.scorecard.eat, 0);
    assert_eq!(result.scorecard.live, 2);
    assert_eq!(result.scorecard.challenge_focus.as_deref(), Some("cost"));
    assert!(result.message.contains("cost"));
}

#[test]
fn empty_quiz_definitions_are_rejected() {
    let spec = QuizSpec {
        id: "empty".into(),
        title: "Empty".into(),
        version: "0.1.0".into(),
        description: None,
        presentation: None,
        questions: vec![],
    };
    assert!(matches!(
        QuizSession::new(spec),
        Err(SessionError::EmptyQuiz(id)) if id == "empty"
    ));
}
