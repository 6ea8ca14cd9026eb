#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub text: String,
    pub distance: f32,
}
