// PDF text production: OCR and text extraction collaborators
pub mod command;
pub mod document_processor;
pub mod ocr_engine;
pub mod text_extractor;

pub use command::{ensure_program, resolve_program};
pub use document_processor::DocumentProcessor;
pub use ocr_engine::{OcrEngine, OcrMyPdf};
pub use text_extractor::{PdfToText, TextExtractor};
