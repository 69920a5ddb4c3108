//! OCR engines: tesseract CLI and a canned mock

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use meibo_common::config::OcrConfig;

/// OCR errors
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("failed to launch {bin}: {source}")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ocr exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Text recognition over an image file on disk
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &Path) -> Result<String, OcrError>;
}

/// Tesseract CLI engine
///
/// Invokes `tesseract <image> stdout -l <langs>`; namecards default to
/// combined `jpn+eng` recognition.
pub struct TesseractOcr {
    bin: String,
    langs: String,
}

impl TesseractOcr {
    pub fn new(bin: impl Into<String>, langs: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            langs: langs.into(),
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(&config.tesseract_bin, &config.langs)
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    #[instrument(skip(self), fields(bin = %self.bin, langs = %self.langs))]
    async fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.bin)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.langs)
            .output()
            .await
            .map_err(|source| OcrError::Launch {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(chars = text.len(), "ocr finished");
        Ok(text)
    }
}

/// Canned-text engine for tests and development without tesseract
pub struct MockOcr {
    text: String,
}

impl MockOcr {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl OcrEngine for MockOcr {
    async fn recognize(&self, _image: &Path) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}
