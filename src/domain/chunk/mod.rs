pub mod entity;
pub mod patterns;
pub mod segmenter;

pub use entity::{DocType, LegalChunk};
pub use segmenter::{clean_text, segment};
