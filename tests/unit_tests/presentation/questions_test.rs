use std::fs;

use pdfqa::presentation::questions::{
    QuestionsError, collect_questions, parse_question_lines, parse_question_list,
};

#[test]
fn given_file_content_with_blank_lines_when_parsing_then_keeps_trimmed_questions() {
    let questions = parse_question_lines("  What is X?  \n\n\t\nWho is Y?\n");

    assert_eq!(questions, vec!["What is X?", "Who is Y?"]);
}

#[test]
fn given_comma_separated_list_when_parsing_then_splits_and_trims() {
    let questions = parse_question_list("What is X? , Who is Y?,,");

    assert_eq!(questions, vec!["What is X?", "Who is Y?"]);
}

#[tokio::test]
async fn given_file_and_inline_list_when_collecting_then_file_questions_come_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.txt");
    fs::write(&path, "From file?\n").unwrap();

    let questions = collect_questions(Some(&path), Some("Inline?")).await.unwrap();

    assert_eq!(questions, vec!["From file?", "Inline?"]);
}

#[tokio::test]
async fn given_no_questions_when_collecting_then_returns_empty_error() {
    let result = collect_questions(None, Some(" , ")).await;

    assert!(matches!(result, Err(QuestionsError::Empty)));
}

#[tokio::test]
async fn given_missing_file_when_collecting_then_returns_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let result = collect_questions(Some(&path), None).await;

    assert!(matches!(result, Err(QuestionsError::Read { .. })));
}
