//! Legal chunk entity and document type

use serde::{Deserialize, Serialize};

/// Kind of statutory document a chunk was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    /// Codul Muncii (labor code)
    Cm,
    /// Constitutia
    Const,
    /// Codul Civil
    Cc,
    /// Codul Fiscal
    Cf,
    /// Any other statutory text
    Legal,
}

impl DocType {
    /// Detect the document type from a source filename
    pub fn from_filename(filename: &str) -> Self {
        let name = filename.to_lowercase();

        if name.contains("codul-muncii") || name.contains("cod muncii") {
            Self::Cm
        } else if name.contains("constitutia") {
            Self::Const
        } else if name.contains("cod-civil") || name.contains("cod civil") {
            Self::Cc
        } else if name.contains("cod-fiscal") || name.contains("cod fiscal") {
            Self::Cf
        } else {
            Self::Legal
        }
    }

    /// Short code used in chunk ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "CM",
            Self::Const => "CONST",
            Self::Cc => "CC",
            Self::Cf => "CF",
            Self::Legal => "LEGAL",
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One statutory article as a retrievable unit
///
/// Identity is `doc_type + article_number`, unique within a corpus. Chunks are
/// immutable once stored; a corpus is replaced only by full re-ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalChunk {
    /// Stable id, `{doc_type}_art_{article_number}`
    pub id: String,
    /// Article body text (never empty, always more than minimal length)
    pub text: String,
    /// Source document type
    pub doc_type: DocType,
    /// Article number as it appears in the source, sub-article suffix included
    /// (e.g. `132^1`)
    pub article_number: String,
    /// Article title, empty when the source gives none
    pub article_title: String,
}

impl LegalChunk {
    /// Create a chunk, deriving the id from the document type and number
    pub fn new(
        doc_type: DocType,
        article_number: impl Into<String>,
        article_title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let article_number = article_number.into();
        Self {
            id: format!("{}_art_{}", doc_type, article_number),
            text: text.into(),
            doc_type,
            article_number,
            article_title: article_title.into(),
        }
    }
}
