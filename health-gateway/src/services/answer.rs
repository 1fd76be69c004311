//! Post-processing of generated answers.

/// Substituted when the generation API returns no usable text.
pub const NO_ANSWER_FALLBACK: &str = "No answer received";

/// Markdown markup that is stripped from the edges of every term.
const MARKUP_CHARS: &[char] = &['*', '_', '`', '#'];

/// Re-tokenize `text` into terms and join them back with single spaces.
///
/// Line breaks and runs of whitespace collapse, and markdown emphasis or
/// heading markers around a term are dropped (`**Tip:**` becomes `Tip:`).
/// Markup inside a term (`snake_case`) is left alone. Applying it twice gives
/// the same result as applying it once.
pub fn normalize_answer(text: &str) -> String {
    text.split_whitespace()
        .map(|term| term.trim_matches(MARKUP_CHARS))
        .filter(|term| !term.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
