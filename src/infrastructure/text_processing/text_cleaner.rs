use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.([A-Z])").unwrap());
static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",([A-Z])").unwrap());

/// Spoken-out long forms, applied in order with exact (case-sensitive)
/// substring matches. Later entries may act on text rewritten by earlier
/// ones.
const ABBREVIATIONS: [(&str, &str); 5] = [
    ("et al.", "et al"),
    ("e.g.", "for example"),
    ("i.e.", "that is"),
    ("vs.", "versus"),
    ("etc.", "et cetera"),
];

/// Normalizes raw extracted paragraph text for speech synthesis: collapses
/// whitespace runs, restores the pause after sentence- and clause-ending
/// punctuation that extraction tends to swallow, and expands common
/// abbreviations to their spoken forms. Total function.
pub fn clean_for_speech(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let sentences = SENTENCE_BREAK.replace_all(&collapsed, ". $1");
    let clauses = CLAUSE_BREAK.replace_all(&sentences, ", $1");

    let mut cleaned = clauses.into_owned();
    for (abbreviation, spoken) in ABBREVIATIONS {
        cleaned = cleaned.replace(abbreviation, spoken);
    }

    cleaned.trim().to_string()
}
