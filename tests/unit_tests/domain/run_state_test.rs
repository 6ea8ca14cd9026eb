use pdfqa::domain::RunState;

#[test]
fn given_happy_path_when_advancing_then_every_transition_is_accepted() {
    let state = RunState::Idle
        .advance(RunState::Ingesting)
        .and_then(|s| s.advance(RunState::Answering { question: 0 }))
        .and_then(|s| s.advance(RunState::Answering { question: 1 }))
        .and_then(|s| s.advance(RunState::Reporting))
        .and_then(|s| s.advance(RunState::Done));

    assert_eq!(state, Ok(RunState::Done));
}

#[test]
fn given_no_questions_when_ingestion_finishes_then_may_go_straight_to_reporting() {
    assert_eq!(
        RunState::Ingesting.advance(RunState::Reporting),
        Ok(RunState::Reporting)
    );
}

#[test]
fn given_skipped_question_index_when_advancing_then_is_rejected() {
    let result = RunState::Answering { question: 0 }.advance(RunState::Answering { question: 2 });

    let error = result.unwrap_err();
    assert_eq!(error.from, RunState::Answering { question: 0 });
    assert_eq!(error.to, RunState::Answering { question: 2 });
}

#[test]
fn given_any_active_state_when_failing_then_is_accepted() {
    for state in [
        RunState::Idle,
        RunState::Ingesting,
        RunState::Answering { question: 3 },
        RunState::Reporting,
    ] {
        assert_eq!(state.advance(RunState::Failed), Ok(RunState::Failed));
    }
}

#[test]
fn given_terminal_state_when_advancing_then_is_rejected() {
    assert!(RunState::Done.advance(RunState::Failed).is_err());
    assert!(RunState::Failed.advance(RunState::Ingesting).is_err());
    assert!(RunState::Done.is_terminal());
    assert!(RunState::Failed.is_terminal());
}

#[test]
fn given_answering_state_when_displayed_then_includes_position() {
    assert_eq!(RunState::Answering { question: 4 }.to_string(), "ANSWERING(4)");
    assert_eq!(RunState::Idle.to_string(), "IDLE");
}
