//! The generated summary value and its export forms.

use crate::bank::{INSUFFICIENT_DATA_TITLE, SUBSTANTIVE_TITLE};
use crate::error::{Error, Result};
use crate::padding::count_words;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Which template produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SummaryKind {
    /// Built from the caller's bullets and padded to the word target
    Substantive,
    /// Fixed narrative for empty or placeholder-only input
    InsufficientData,
}

impl SummaryKind {
    /// Returns the fixed title for this kind.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Substantive => SUBSTANTIVE_TITLE,
            Self::InsufficientData => INSUFFICIENT_DATA_TITLE,
        }
    }

    /// Parses a kind from its title.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        match title {
            SUBSTANTIVE_TITLE => Some(Self::Substantive),
            INSUFFICIENT_DATA_TITLE => Some(Self::InsufficientData),
            _ => None,
        }
    }
}

impl From<SummaryKind> for String {
    fn from(kind: SummaryKind) -> Self {
        kind.title().to_string()
    }
}

impl TryFrom<String> for SummaryKind {
    type Error = Error;

    fn try_from(title: String) -> Result<Self> {
        Self::from_title(&title).ok_or_else(|| Error::unknown_title(title))
    }
}

/// A titled narrative with one citation list per sentence.
///
/// Title and summary text are fixed once generated. The citation lists are
/// owned by the value and may be edited in place through
/// [`citations_mut`](Self::citations_mut); [`to_value`](Self::to_value)
/// exports an independent deep copy.
///
/// Generated values always carry exactly one citation list per sentence.
/// Deserialization does not check this, so a hand-written document may pair
/// a narrative with any number of lists; [`sentence_count`](Self::sentence_count)
/// then reports the list count, not the sentences in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(rename = "title")]
    kind: SummaryKind,
    summary: String,
    citations: Vec<Vec<usize>>,
}

impl SummaryResult {
    pub(crate) fn new(kind: SummaryKind, summary: String, citations: Vec<Vec<usize>>) -> Self {
        Self {
            kind,
            summary,
            citations,
        }
    }

    /// Returns the summary title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Returns which template produced this summary.
    #[must_use]
    pub const fn kind(&self) -> SummaryKind {
        self.kind
    }

    /// Returns the narrative text.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the citation lists, one per sentence in order.
    #[must_use]
    pub fn citations(&self) -> &[Vec<usize>] {
        &self.citations
    }

    /// Returns the citation lists for in-place editing.
    pub fn citations_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.citations
    }

    /// Number of sentences in the narrative.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.citations.len()
    }

    /// Number of whitespace-separated words in the narrative.
    #[must_use]
    pub fn word_count(&self) -> usize {
        count_words(&self.summary)
    }

    /// Exports the summary as a plain JSON object.
    ///
    /// The returned value shares nothing with `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use research_summary::SummaryGenerator;
    ///
    /// let result = SummaryGenerator::default().generate_summary(["Uptake doubled"]);
    /// let value = result.to_value();
    /// assert_eq!(value["title"], "Research Summary");
    /// assert_eq!(value["citations"][0][0], 1);
    /// ```
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "title": self.title(),
            "summary": self.summary,
            "citations": self.citations,
        })
    }

    /// Renders the summary as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Consumes the summary, returning title, narrative and citations.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, String, Vec<Vec<usize>>) {
        (self.kind.title(), self.summary, self.citations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryResult {
        SummaryResult::new(
            SummaryKind::Substantive,
            "First. (1)(2) Second. (2)".to_string(),
            vec![vec![1, 2], vec![2]],
        )
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(SummaryKind::Substantive.title(), "Research Summary");
        assert_eq!(
            SummaryKind::InsufficientData.title(),
            "Insufficient Data to Summarize Research"
        );
        for kind in [SummaryKind::Substantive, SummaryKind::InsufficientData] {
            assert_eq!(SummaryKind::from_title(kind.title()), Some(kind));
        }
        assert_eq!(SummaryKind::from_title("research summary"), None);
    }

    #[test]
    fn test_accessors() {
        let result = sample();
        assert_eq!(result.title(), "Research Summary");
        assert_eq!(result.kind(), SummaryKind::Substantive);
        assert_eq!(result.sentence_count(), 2);
        assert_eq!(result.word_count(), 4);
    }

    #[test]
    fn test_export_is_a_deep_copy() {
        let result = sample();
        let mut exported = result.to_value();

        exported["citations"][0]
            .as_array_mut()
            .unwrap()
            .push(Value::from(99));
        exported["summary"] = Value::from("changed");

        assert_eq!(result.citations(), &[vec![1, 2], vec![2]]);
        assert_eq!(result.summary(), "First. (1)(2) Second. (2)");
    }

    #[test]
    fn test_in_place_mutation_is_observable() {
        let mut result = sample();
        result.citations_mut()[1].push(7);

        assert_eq!(result.citations()[1], vec![2, 7]);
        assert_eq!(result.to_value()["citations"][1][1], 7);
    }

    #[test]
    fn test_json_round_trip() {
        let result = sample();
        let json = result.to_json(false).unwrap();
        assert!(json.contains(r#""title":"Research Summary""#));

        let parsed: SummaryResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(serde_json::to_value(&result).unwrap(), result.to_value());
    }

    #[test]
    fn test_unknown_title_is_rejected() {
        let json = r#"{"title":"Weekly Digest","summary":"","citations":[]}"#;
        let err = serde_json::from_str::<SummaryResult>(json).unwrap_err();
        assert!(err.to_string().contains("Weekly Digest"));
    }

    #[test]
    fn test_deserialized_citations_are_taken_as_given() {
        let value = json!({
            "title": "Research Summary",
            "summary": "One. (1) Two. (1)",
            "citations": [[1]],
        });
        let parsed: SummaryResult = serde_json::from_value(value).unwrap();

        assert_eq!(parsed.sentence_count(), 1);
        assert_eq!(parsed.citations(), &[vec![1]]);
    }

    #[test]
    fn test_into_parts() {
        let (title, summary, citations) = sample().into_parts();
        assert_eq!(title, "Research Summary");
        assert!(summary.starts_with("First."));
        assert_eq!(citations.len(), 2);
    }
}
