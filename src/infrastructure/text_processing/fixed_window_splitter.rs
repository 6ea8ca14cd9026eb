use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::Chunk;

/// Overlapping fixed-size character windows. Consecutive windows share
/// `chunk_overlap` characters; splitting stops at the first window that
/// reaches the end of the text, so the last window may be shorter.
#[derive(Debug, Clone, Copy)]
pub struct FixedWindowSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedWindowSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextSplitterError> {
        if chunk_size == 0 {
            return Err(TextSplitterError::InvalidConfiguration(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(TextSplitterError::InvalidConfiguration(format!(
                "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Lazily walks `text`. Calling it again restarts from the beginning.
    pub fn windows<'a>(&self, text: &'a str) -> Windows<'a> {
        Windows {
            text,
            size: self.chunk_size,
            step: self.chunk_size - self.chunk_overlap,
            next_byte: 0,
            next_char: 0,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Windows<'a> {
    text: &'a str,
    size: usize,
    step: usize,
    next_byte: usize,
    next_char: usize,
    index: usize,
}

impl Iterator for Windows<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.next_byte >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.next_byte..];
        let window_end = byte_offset(rest, self.size);
        let chunk = Chunk::new(self.index, self.next_char, rest[..window_end].to_string());
        tracing::trace!(
            index = self.index,
            start = self.next_char,
            "Chunk created"
        );

        if window_end == rest.len() {
            self.next_byte = self.text.len();
        } else {
            self.next_byte += byte_offset(rest, self.step);
        }
        self.next_char += self.step;
        self.index += 1;

        Some(chunk)
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

#[async_trait]
impl TextSplitter for FixedWindowSplitter {
    async fn split(&self, text: &str) -> Result<Vec<Chunk>, TextSplitterError> {
        let chunks: Vec<Chunk> = self.windows(text).collect();
        tracing::debug!(chunk_count = chunks.len(), "Text chunking completed");
        Ok(chunks)
    }
}
