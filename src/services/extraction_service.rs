use crate::error::{Error, Result};
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Text,
    Pdf,
}

impl UploadKind {
    pub const ALLOWED: [&'static str; 2] = ["txt", "pdf"];

    pub fn from_filename(filename: &str) -> Result<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(UploadKind::Text),
            "pdf" => Ok(UploadKind::Pdf),
            _ => Err(Error::UnsupportedFormat(format!(
                "'{}' (allowed: {})",
                filename,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

pub async fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    match UploadKind::from_filename(filename)? {
        UploadKind::Text => String::from_utf8(data.to_vec())
            .map_err(|_| Error::BadRequest("Text file is not valid UTF-8".to_string())),
        UploadKind::Pdf => {
            if !data.starts_with(b"%PDF") {
                return Err(Error::BadRequest("Invalid PDF file content".into()));
            }
            extract_pdf_text(data).await
        }
    }
}

async fn extract_pdf_text(data: &[u8]) -> Result<String> {
    // Removed when dropped, including when the request is cancelled mid-run.
    let temp = tempfile::Builder::new()
        .prefix("context_")
        .suffix(".pdf")
        .tempfile()?;
    fs::write(temp.path(), data).await?;

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(temp.path())
        .arg("-")
        .kill_on_drop(true)
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => Ok(join_pages(&String::from_utf8_lossy(&out.stdout))),
        Ok(out) => {
            tracing::error!("pdftotext failed: {}", String::from_utf8_lossy(&out.stderr));
            Err(Error::Internal("Failed to extract text from PDF".to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to run pdftotext: {}", e);
            Err(Error::Internal("PDF text extraction is not available".to_string()))
        }
    }
}

/// Joins the per-page text of a `pdftotext` dump (pages end with a form
/// feed) in document order, one page per line block.
pub fn join_pages(raw: &str) -> String {
    let mut pages: Vec<&str> = raw.split('\x0c').map(|p| p.trim_end()).collect();
    if pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages.join("\n")
}
