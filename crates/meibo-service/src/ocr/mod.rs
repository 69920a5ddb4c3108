//! OCR engine abstraction
//!
//! The import pipeline talks to OCR through a trait so tests can run
//! without a tesseract binary on the machine.

mod engine;
mod normalize;

pub use engine::{MockOcr, OcrEngine, OcrError, TesseractOcr};
pub use normalize::normalize_for_ocr;
