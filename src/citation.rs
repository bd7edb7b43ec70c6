use std::fmt::Write as _;

const TERMINALS: [char; 3] = ['.', '!', '?'];

/// A sentence paired with the bullet positions it cites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SentenceUnit {
    pub(crate) text: String,
    pub(crate) citations: Vec<usize>,
}

impl SentenceUnit {
    pub(crate) fn new(text: impl Into<String>, citations: &[usize]) -> Self {
        Self {
            text: text.into(),
            citations: citations.to_vec(),
        }
    }

    /// Renders the sentence with its citation markers attached.
    pub(crate) fn render(&self) -> String {
        apply_citations(&self.text, &self.citations)
    }
}

/// Appends `(n)` markers for each cited position to a sentence.
///
/// Positions are rendered in the order given. A sentence without terminal
/// punctuation gets a period before the markers. An empty position list
/// leaves the sentence untouched.
///
/// # Examples
///
/// ```
/// use research_summary::apply_citations;
///
/// assert_eq!(apply_citations("Sales rose", &[1, 2]), "Sales rose. (1)(2)");
/// assert_eq!(apply_citations("Sales rose!", &[3]), "Sales rose! (3)");
/// assert_eq!(apply_citations("Sales rose", &[]), "Sales rose");
/// ```
#[must_use]
pub fn apply_citations(sentence: &str, citations: &[usize]) -> String {
    if citations.is_empty() {
        return sentence.to_string();
    }

    let mut markers = String::with_capacity(citations.len() * 4);
    for index in citations {
        // Writing to a String cannot fail.
        let _ = write!(markers, "({index})");
    }

    let rendered = if sentence.ends_with(TERMINALS) {
        format!("{sentence} {markers}")
    } else {
        format!("{sentence}. {markers}")
    };

    rendered.trim_end().to_string()
}

/// Trims a bullet and makes sure it ends in `.`, `?` or `!`.
///
/// Blank input normalizes to an empty string.
///
/// # Examples
///
/// ```
/// use research_summary::normalize_sentence;
///
/// assert_eq!(normalize_sentence("  Enrolment closed "), "Enrolment closed.");
/// assert_eq!(normalize_sentence("Was it blinded?"), "Was it blinded?");
/// assert_eq!(normalize_sentence("   "), "");
/// ```
#[must_use]
pub fn normalize_sentence(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with(TERMINALS) {
        return trimmed.to_string();
    }
    format!("{trimmed}.")
}
