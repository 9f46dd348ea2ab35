//! Regex predicates for statutory article segmentation
//!
//! The patterns are kept as independent, individually testable statics rather
//! than one chained expression. All matching is case-insensitive; the corpus
//! uses both the full keyword (`Articolul`) and the abbreviated one (`art.`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Article marker: keyword + number, with an optional `^n` sub-article suffix.
/// Capture group 1 is the article number, preserved verbatim.
pub static ARTICLE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:articolul|art\.?)\s+(\d+(?:\^\d+)?)\.?").unwrap());

/// Reference phrase immediately governing an article mention, e.g.
/// "conform art. 53" or "potrivit articolului 12". Used over the context
/// window around a marker.
pub static REFERENCE_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:conform|potrivit|prevederile|prevazut\s+(?:la|de)|dispozitiile|la|din|de)\s+(?:art\.|articolul)\s+\d+\b",
    )
    .unwrap()
});

/// Any inline article mention, without a governing phrase
pub static ARTICLE_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:art\.|articolul)\s+\d+").unwrap());

/// Line-level reference patterns: a line matching any of these cites an
/// article rather than stating it
static REFERENCE_LINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\s*(?:conform|potrivit|prevederile|prevazut\s+(?:la|de)|dispozitiile|in\s+sensul|in\s+conditiile)\s+(?:art\.|articolul)\s+\d+",
        r"(?i)(?:conform|potrivit|prevederile|prevazut\s+(?:la|de)|dispozitiile)\s+(?:art\.|articolul)\s+\d+(?:\s*[-,.]|\s*$)",
        r"(?i)^\s*(?:art\.|articolul)\s+\d+\s*[-,.]?\s*(?:alin|lit|pct)\.",
        r"(?i)\bla\s+(?:art\.|articolul)\s+\d+",
        r"(?i)\bdin\s+(?:art\.|articolul)\s+\d+",
        r"(?i)\bde\s+(?:art\.|articolul)\s+\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Noise stripped before segmentation
pub static PAGE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Pagina?\s+\d+\s+din\s+\d+").unwrap());
pub static PAGE_FRACTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+/\d+").unwrap());
pub static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
pub static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap());
pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());
pub static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Does this window of text contain a phrase-governed article reference?
pub fn has_reference_phrase(window: &str) -> bool {
    REFERENCE_CONTEXT.is_match(window)
}

/// Does this full line read as an article reference on its own?
pub fn is_reference_line(line: &str) -> bool {
    REFERENCE_LINE_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Does this text contain any inline article mention?
pub fn has_article_mention(text: &str) -> bool {
    ARTICLE_MENTION.is_match(text)
}
