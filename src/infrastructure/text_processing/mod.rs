mod fixed_window_splitter;
mod pdf_adapter;

pub use fixed_window_splitter::{FixedWindowSplitter, Windows};
pub use pdf_adapter::PdfAdapter;
