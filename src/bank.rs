//! Fixed sentence banks used by the summary templates.
//!
//! Every table here is process-wide, read-only and ordered. Generation only
//! copies entries into its output.

/// Title used when the bullets carry substantive content.
pub(crate) const SUBSTANTIVE_TITLE: &str = "Research Summary";

/// Title used when the bullets are empty or all placeholders.
pub(crate) const INSUFFICIENT_DATA_TITLE: &str = "Insufficient Data to Summarize Research";

/// Narrative emitted, in order, when there is nothing to summarize.
pub(crate) const MISSING_DATA_SENTENCES: [&str; 9] = [
    "This report set out to explain recent scientific findings for an informed general \
     audience, yet the source material provides no substantive statements to interpret, \
     offering only ellipses where evidence should appear.",
    "Because the bullet points contain no descriptions of the study's aims, methods, \
     participants, measurements, or outcomes, it is impossible to summarize what was \
     investigated or discovered, and any attempt to extrapolate would require speculation \
     that violates the evidence-based mandate.",
    "Without even a hint about the research field\u{2014}whether biomedical, environmental, \
     social, or technological\u{2014}we cannot infer the subject matter or relevance of the \
     absent findings.",
    "Critical scientific literacy depends on transparent documentation of questions asked, \
     experimental or observational designs deployed, analytical techniques applied, and \
     uncertainties acknowledged, none of which can be reported because the dataset is \
     entirely empty.",
    "Ordinarily, a research summary would trace the logical flow from hypothesis through \
     methodology to findings and limitations, translating technical language into accessible \
     explanations, but here that narrative arc collapses because the foundational evidence \
     has not been shared, leaving a reminder of the importance of transparent communication \
     in science.",
    "In the absence of concrete data, the most responsible course is to highlight this gap, \
     urge the provider of the bullet points to supply verifiable details, and caution readers \
     that any interpretations of the supposed study cannot be confirmed or debunked without \
     actual evidence.",
    "Stakeholders such as policymakers, educators, clinicians, and community advocates depend \
     on accurate reporting to inform decisions, but they should postpone action because \
     neither the scope nor the direction of the missing findings can be determined from the \
     silent placeholders provided.",
    "Until substantive content is shared, the most constructive takeaway is a meta-lesson \
     about scientific transparency: rigorous inquiry requires not only careful \
     experimentation but also thorough dissemination of methods, data, and interpretations, \
     and without those elements, even the most enthusiastic communicator cannot craft a \
     responsible or meaningful summary for the public.",
    "Consequently, this document stands as an invitation for the original researchers or \
     organizers to release the missing information so that future summaries can offer the \
     clarity, nuance, and evidence that readers deserve in full.",
];

/// Sentences cycled through, in order, to reach the word target.
pub(crate) const FILLER_SENTENCES: [&str; 3] = [
    "This reminder keeps the narrative tethered to the supplied evidence without \
     extrapolating beyond it.",
    "The emphasis on direct citation underscores that interpretation should remain firmly \
     grounded in the documented bullet points.",
    "By reiterating the same source material, the summary protects readers from mistaking \
     speculation for reported observation.",
];

pub(crate) const INTRODUCTION: &str = "This overview synthesizes the supplied research bullet \
     points to craft an accessible narrative for informed readers.";

pub(crate) const GROUNDING: &str = "Every statement remains grounded in the documented notes \
     so that accuracy is preserved without extrapolation.";

/// Follows every restated bullet.
pub(crate) const RESTATEMENT_CAUTION: &str = "This restatement mirrors the source language to \
     prevent accidental distortion of the documented evidence.";

pub(crate) const CLOSING_SYNTHESIS: &str = "Taken together, these observations form a cohesive \
     outline that readers can map directly back to the enumerated bullet points.";

pub(crate) const CLOSING_CAUTION: &str = "The conclusion reiterates that any deeper \
     interpretation should await additional context beyond the supplied notes.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::count_words;

    #[test]
    fn test_missing_data_bank_is_long_enough() {
        let words: usize = MISSING_DATA_SENTENCES.iter().map(|s| count_words(s)).sum();
        // Nine citation markers push this past the default target of 350.
        assert_eq!(words, 343);
    }

    #[test]
    fn test_line_continuations_leave_single_spaces() {
        let fixed = [
            INTRODUCTION,
            GROUNDING,
            RESTATEMENT_CAUTION,
            CLOSING_SYNTHESIS,
            CLOSING_CAUTION,
        ];
        let all = MISSING_DATA_SENTENCES
            .iter()
            .chain(FILLER_SENTENCES.iter())
            .chain(fixed.iter());

        for sentence in all {
            assert!(!sentence.contains("  "), "double space in: {sentence}");
            assert!(sentence.ends_with('.'), "unterminated: {sentence}");
        }
    }

    #[test]
    fn test_filler_sentences_have_words() {
        assert!(FILLER_SENTENCES.iter().all(|s| count_words(s) > 0));
    }
}
