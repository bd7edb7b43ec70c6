use crate::bank::FILLER_SENTENCES;
use crate::citation::apply_citations;
use tracing::trace;

/// Counts whitespace-separated words.
///
/// # Examples
///
/// ```
/// use research_summary::count_words;
///
/// assert_eq!(count_words("  two\twords\n"), 2);
/// assert_eq!(count_words(""), 0);
/// ```
#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Appends filler sentences until the joined text holds at least `word_target` words.
///
/// Fillers are taken from the bank in order, wrapping around, and each cites
/// `all_indices` through its own copy of the list. Returns the number of
/// fillers added.
pub(crate) fn pad_sentences(
    sentences: &mut Vec<String>,
    citations: &mut Vec<Vec<usize>>,
    all_indices: &[usize],
    word_target: usize,
) -> usize {
    // Sentences are joined by single spaces, so per-sentence counts add up.
    let mut word_count: usize = sentences.iter().map(|s| count_words(s)).sum();
    let mut added = 0;

    for filler in FILLER_SENTENCES.iter().cycle() {
        if word_count >= word_target {
            break;
        }

        let rendered = apply_citations(filler, all_indices);
        word_count += count_words(&rendered);
        trace!(added, word_count, word_target, "appended filler sentence");

        sentences.push(rendered);
        citations.push(all_indices.to_vec());
        added += 1;
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("  hello   world  "), 2);
        assert_eq!(count_words("Done. (1)(2)"), 2);
    }

    #[test]
    fn test_zero_target_adds_nothing() {
        let mut sentences = vec!["One sentence. (1)".to_string()];
        let mut citations = vec![vec![1]];

        let added = pad_sentences(&mut sentences, &mut citations, &[1], 0);

        assert_eq!(added, 0);
        assert_eq!(sentences.len(), 1);
        assert_eq!(citations.len(), 1);
    }

    #[test]
    fn test_target_already_met_adds_nothing() {
        let mut sentences = vec!["a b c d e".to_string()];
        let mut citations = vec![vec![1]];

        assert_eq!(pad_sentences(&mut sentences, &mut citations, &[1], 5), 0);
    }

    #[test]
    fn test_fillers_cycle_in_order() {
        let mut sentences = Vec::new();
        let mut citations = Vec::new();

        let added = pad_sentences(&mut sentences, &mut citations, &[1, 3], 60);

        // 15 + 18 + 17 words per filler including the marker.
        assert_eq!(added, 4);
        assert_eq!(sentences[0], apply_citations(FILLER_SENTENCES[0], &[1, 3]));
        assert_eq!(sentences[1], apply_citations(FILLER_SENTENCES[1], &[1, 3]));
        assert_eq!(sentences[2], apply_citations(FILLER_SENTENCES[2], &[1, 3]));
        assert_eq!(sentences[3], sentences[0]);
        assert!(citations.iter().all(|c| c == &[1, 3]));
    }

    #[test]
    fn test_stops_as_soon_as_target_is_reached() {
        let mut sentences = vec!["seed".to_string()];
        let mut citations = vec![vec![1]];

        pad_sentences(&mut sentences, &mut citations, &[1], 10);

        let total: usize = sentences.iter().map(|s| count_words(s)).sum();
        assert_eq!(sentences.len(), 2);
        assert!(total >= 10);
        assert_eq!(total, count_words(&sentences.join(" ")));
    }
}
