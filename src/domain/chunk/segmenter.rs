//! Article-level segmentation of statutory text
//!
//! Splits cleaned legal text into one chunk per *defined* article. A marker
//! that merely cites an article elsewhere (e.g. "conform art. 53") must not
//! produce a chunk; three independent heuristics guard against that.

use tracing::debug;

use super::entity::{DocType, LegalChunk};
use super::patterns;

/// Characters of context inspected before a marker when checking for a
/// governing reference phrase
const CONTEXT_BEFORE: usize = 100;
/// Characters of context inspected after a marker
const CONTEXT_AFTER: usize = 50;
/// Characters previewed after a marker for the inline-reference heuristic
const INLINE_PREVIEW: usize = 10;
/// Minimum substantive content length in characters; shorter articles are
/// discarded as reference artifacts
const MIN_CONTENT_CHARS: usize = 10;

/// Strip known noise (page numbers, bare page fractions, URLs, dates) and
/// normalize whitespace ahead of segmentation
pub fn clean_text(raw: &str) -> String {
    let text = patterns::PAGE_NUMBER.replace_all(raw, "");
    let text = patterns::PAGE_FRACTION.replace_all(&text, "");
    let text = patterns::URL.replace_all(&text, "");
    let text = patterns::DATE.replace_all(&text, "");
    let text = patterns::WHITESPACE_RUN.replace_all(&text, " ");
    let text = patterns::NEWLINE_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Split cleaned text into article chunks
///
/// Markers are scanned as non-overlapping positions; an article's content
/// runs from the end of its marker to the start of the next marker (of any
/// classification) or the end of text.
pub fn segment(text: &str, doc_type: DocType) -> Vec<LegalChunk> {
    let markers: Vec<Marker> = patterns::ARTICLE_MARKER
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).expect("match group 0 always present");
            Marker {
                start: m.start(),
                end: m.end(),
                number: caps[1].to_string(),
            }
        })
        .collect();

    let mut chunks = Vec::new();

    for (idx, marker) in markers.iter().enumerate() {
        if is_reference(text, marker) {
            continue;
        }

        let content_start = marker.end;
        let content_end = markers
            .get(idx + 1)
            .map(|next| next.start)
            .unwrap_or(text.len());

        let title = marker_line_title(text, marker.end, content_end);

        let content = text[content_start..content_end].trim();
        let content = patterns::NEWLINE_RUN.replace_all(content, "\n\n");
        let content = content.trim();

        if content.chars().count() <= MIN_CONTENT_CHARS {
            debug!(
                article = %marker.number,
                "Skipping article with insubstantial content"
            );
            continue;
        }

        chunks.push(LegalChunk::new(doc_type, &marker.number, title, content));
    }

    chunks
}

struct Marker {
    start: usize,
    end: usize,
    number: String,
}

/// Classify a marker as a reference (true) or a definition (false).
/// Any single heuristic suffices to mark it a reference.
fn is_reference(text: &str, marker: &Marker) -> bool {
    // a. governing reference phrase within the surrounding window, measured
    //    in characters so diacritics do not shrink it
    let window_start = back_by_chars(text, marker.start, CONTEXT_BEFORE);
    let window_end = forward_by_chars(text, marker.end, CONTEXT_AFTER);
    if patterns::has_reference_phrase(&text[window_start..window_end]) {
        return true;
    }

    // b. the marker's full line reads as a reference on its own
    let line_start = text[..marker.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[marker.end..]
        .find('\n')
        .map(|i| marker.end + i)
        .unwrap_or(text.len());
    if patterns::is_reference_line(&text[line_start..line_end]) {
        return true;
    }

    // c. the marker is immediately followed by another article mention
    //    instead of substantive content
    let preview_end = forward_by_chars(text, marker.end, INLINE_PREVIEW);
    let preview = text[marker.end..preview_end].trim();
    if preview.chars().count() < INLINE_PREVIEW && patterns::has_article_mention(preview) {
        return true;
    }

    false
}

/// Title is the remainder of the marker's line, after an optional dash
fn marker_line_title(text: &str, marker_end: usize, content_end: usize) -> String {
    let line_end = text[marker_end..content_end]
        .find('\n')
        .map(|i| marker_end + i)
        .unwrap_or(content_end);

    text[marker_end..line_end]
        .trim()
        .trim_start_matches(['-', '\u{2013}'])
        .trim()
        .to_string()
}

/// Byte index `n` characters before `idx`, clamped to the start of text
fn back_by_chars(text: &str, idx: usize, n: usize) -> usize {
    text[..idx]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(idx)
}

/// Byte index `n` characters after `idx`, clamped to the end of text
fn forward_by_chars(text: &str, idx: usize, n: usize) -> usize {
    text[idx..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| idx + i)
        .unwrap_or(text.len())
}
