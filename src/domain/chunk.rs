/// A window of source text. `start` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, start: usize, text: String) -> Self {
        Self { index, start, text }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
