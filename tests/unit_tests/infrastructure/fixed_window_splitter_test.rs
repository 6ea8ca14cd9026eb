use pdfqa::application::ports::{TextSplitter, TextSplitterError};
use pdfqa::infrastructure::text_processing::FixedWindowSplitter;

fn texts(splitter: &FixedWindowSplitter, text: &str) -> Vec<String> {
    splitter.windows(text).map(|c| c.text).collect()
}

#[tokio::test]
async fn given_text_shorter_than_window_when_splitting_then_returns_single_chunk() {
    let splitter = FixedWindowSplitter::new(10, 2).unwrap();

    let chunks = splitter.split("abc").await.unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "abc");
    assert_eq!(chunks[0].start, 0);
}

#[tokio::test]
async fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let splitter = FixedWindowSplitter::new(10, 2).unwrap();

    let chunks = splitter.split("").await.unwrap();

    assert!(chunks.is_empty());
}

#[test]
fn given_window_reaching_end_when_splitting_then_stops_without_tail_chunk() {
    let splitter = FixedWindowSplitter::new(5, 2).unwrap();

    assert_eq!(texts(&splitter, "abcdefgh"), vec!["abcde", "defgh"]);
}

#[test]
fn given_text_not_aligned_to_step_when_splitting_then_last_chunk_is_shorter() {
    let splitter = FixedWindowSplitter::new(4, 1).unwrap();

    assert_eq!(texts(&splitter, "abcdefghij"), vec!["abcd", "defg", "ghij"]);
    assert_eq!(texts(&splitter, "abcdefghijk"), vec!["abcd", "defg", "ghij", "jk"]);
}

#[test]
fn given_no_overlap_when_splitting_then_concatenation_reconstructs_text() {
    let splitter = FixedWindowSplitter::new(3, 0).unwrap();
    let text = "the quick brown fox";

    let joined: String = texts(&splitter, text).concat();

    assert_eq!(joined, text);
}

#[test]
fn given_overlapping_chunks_when_stripping_overlap_then_reconstructs_text() {
    let (size, overlap) = (7, 3);
    let splitter = FixedWindowSplitter::new(size, overlap).unwrap();
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

    let chunks: Vec<_> = splitter.windows(text).collect();
    let mut rebuilt: String = chunks[0].text.clone();
    for chunk in &chunks[1..] {
        rebuilt.extend(chunk.text.chars().skip(overlap));
    }

    assert_eq!(rebuilt, text);
    for pair in chunks.windows(2) {
        let tail: String = pair[0].text.chars().skip(size - overlap).collect();
        let head: String = pair[1].text.chars().take(overlap).collect();
        assert_eq!(tail, head);
    }
}

#[test]
fn given_long_text_when_splitting_then_chunk_count_matches_window_arithmetic() {
    let (size, overlap) = (10, 4);
    let splitter = FixedWindowSplitter::new(size, overlap).unwrap();
    let text = "x".repeat(100);

    let chunks: Vec<_> = splitter.windows(&text).collect();

    let step = size - overlap;
    let expected = (text.len() - overlap).div_ceil(step);
    assert_eq!(chunks.len(), expected);
    assert!(chunks.iter().all(|c| c.char_len() <= size));
    assert!(chunks.iter().enumerate().all(|(i, c)| c.index == i && c.start == i * step));
}

#[test]
fn given_multibyte_text_when_splitting_then_windows_count_characters() {
    let splitter = FixedWindowSplitter::new(3, 1).unwrap();

    let chunks: Vec<_> = splitter.windows("héllo wörld").collect();

    assert_eq!(chunks[0].text, "hél");
    assert_eq!(chunks[1].text, "llo");
    assert_eq!(chunks[1].start, 2);
    assert!(chunks.iter().all(|c| c.char_len() <= 3));
}

#[test]
fn given_zero_chunk_size_when_constructing_then_returns_configuration_error() {
    let result = FixedWindowSplitter::new(0, 0);

    assert!(matches!(
        result,
        Err(TextSplitterError::InvalidConfiguration(_))
    ));
}

#[test]
fn given_overlap_equal_to_size_when_constructing_then_returns_configuration_error() {
    assert!(matches!(
        FixedWindowSplitter::new(5, 5),
        Err(TextSplitterError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        FixedWindowSplitter::new(5, 9),
        Err(TextSplitterError::InvalidConfiguration(_))
    ));
}
