//! # meibo-service
//!
//! Application layer containing business logic, services, DTOs and the
//! namecard import pipeline (image normalization + OCR engine).

pub mod dto;
pub mod ocr;
pub mod services;

pub use ocr::{MockOcr, OcrEngine, OcrError, TesseractOcr};
pub use services::{
    AuthService, EventService, ImportService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
