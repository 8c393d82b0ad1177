use regex::Regex;
use std::sync::LazyLock;

static FIGURE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)figure\s+\d+",
        r"(?i)table\s+\d+",
        r"(?i)chart\s+\d+",
        r"(?i)graph\s+\d+",
        r"(?i)diagram\s+\d+",
        r"(?i)see\s+above",
        r"(?i)see\s+below",
        r"(?i)as\s+shown",
        r"(?i)illustrated\s+in",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

#[derive(Debug, Clone, PartialEq)]
pub struct FigureReferences {
    pub has_figure_reference: bool,
    pub figure_references: Vec<String>,
}

/// Scans text for references to visual content. Matches are collected in
/// pattern-then-position order: all matches of the first pattern across the
/// text, then all of the second, and so on. Total function.
pub fn detect_figure_references(text: &str) -> FigureReferences {
    let mut references = Vec::new();

    for pattern in FIGURE_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            references.push(found.as_str().to_string());
        }
    }

    FigureReferences {
        has_figure_reference: !references.is_empty(),
        figure_references: references,
    }
}
