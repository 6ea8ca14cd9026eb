use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum QuestionsError {
    #[error("failed to read questions from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no questions given: pass a questions file or --questions")]
    Empty,
}

/// One question per line, trimmed, blank lines dropped.
pub fn parse_question_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_question_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn read_questions_file(path: &Path) -> Result<Vec<String>, QuestionsError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| QuestionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_question_lines(&content))
}

/// Questions from the file come first, then those from the inline list.
pub async fn collect_questions(
    file: Option<&Path>,
    inline: Option<&str>,
) -> Result<Vec<String>, QuestionsError> {
    let mut questions = match file {
        Some(path) => read_questions_file(path).await?,
        None => Vec::new(),
    };
    if let Some(list) = inline {
        questions.extend(parse_question_list(list));
    }

    if questions.is_empty() {
        return Err(QuestionsError::Empty);
    }
    Ok(questions)
}
