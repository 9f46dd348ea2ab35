pub mod pdftotext;

pub use pdftotext::PdftotextExtractor;
