use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

struct PageContent {
    page_number: u32,
    text: String,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Fails on the first page lopdf cannot extract. Only a document with no
    /// pages at all yields an empty page list.
    fn extract_pages(data: &[u8]) -> Result<Vec<PageContent>, FileLoaderError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for page_number in page_numbers {
            let text = doc.extract_text(&[page_number]).map_err(|e| {
                tracing::error!(page_number, error = %e, "Failed to extract page text");
                FileLoaderError::ExtractionFailed(format!("page {page_number}: {e}"))
            })?;
            pages.push(PageContent { page_number, text });
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let bytes = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::TimedOut(EXTRACTION_TIMEOUT))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if pages.is_empty() {
            tracing::warn!("The PDF file contains no pages");
            return Ok(String::new());
        }

        tracing::info!(
            page_count = pages.len(),
            last_page = pages.last().map(|p| p.page_number),
            "PDF text extraction complete"
        );

        Ok(pages
            .into_iter()
            .map(|p| p.text.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
