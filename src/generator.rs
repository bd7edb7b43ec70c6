use crate::{
    bank::{
        CLOSING_CAUTION, CLOSING_SYNTHESIS, GROUNDING, INTRODUCTION, MISSING_DATA_SENTENCES,
        RESTATEMENT_CAUTION,
    },
    citation::{SentenceUnit, normalize_sentence},
    classify::{Bullet, Classification, classify},
    config::Config,
    error::Result,
    padding::pad_sentences,
    summary::{SummaryKind, SummaryResult},
};
use tracing::{Span, debug, field, instrument};

/// Turns research bullet points into a cited narrative.
///
/// The generator holds only its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SummaryGenerator {
    config: Config,
}

impl SummaryGenerator {
    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a generator padding to `word_target` words.
    ///
    /// Negative targets are clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is out of range.
    pub fn with_word_target(word_target: i64) -> Result<Self> {
        Self::new(Config::builder().word_target(word_target).build()?)
    }

    /// Returns the configured word target.
    #[must_use]
    pub const fn word_target(&self) -> usize {
        self.config.word_target
    }

    /// Builds a summary from the given bullet points.
    ///
    /// Blank and placeholder-only input yields the fixed insufficient-data
    /// narrative, citing every supplied position. Otherwise each usable
    /// bullet is restated with its own citation and the result is padded
    /// with filler sentences up to the word target.
    ///
    /// # Examples
    ///
    /// ```
    /// use research_summary::{SummaryGenerator, SummaryKind};
    ///
    /// let generator = SummaryGenerator::with_word_target(0)?;
    /// let result = generator.generate_summary(["", "Attrition stayed under 5%"]);
    ///
    /// assert_eq!(result.kind(), SummaryKind::Substantive);
    /// assert!(
    ///     result
    ///         .summary()
    ///         .contains("Bullet 2 reports that Attrition stayed under 5%. (2)")
    /// );
    /// assert_eq!(result.sentence_count(), 6);
    /// # Ok::<(), research_summary::Error>(())
    /// ```
    #[instrument(
        skip_all,
        fields(word_target = self.config.word_target, bullet_count = field::Empty)
    )]
    pub fn generate_summary<I, S>(&self, bullets: I) -> SummaryResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classification = classify(bullets);
        Span::current().record("bullet_count", classification.bullet_count());

        match classification {
            Classification::MissingData { bullet_count } => {
                debug!(bullet_count, "no usable bullets, using insufficient-data template");
                Self::missing_data_summary(bullet_count)
            }
            Classification::Usable { bullets, .. } => {
                debug!(usable = bullets.len(), "building substantive summary");
                self.substantive_summary(&bullets)
            }
        }
    }

    fn missing_data_summary(bullet_count: usize) -> SummaryResult {
        let all_indices: Vec<usize> = (1..=bullet_count).collect();

        let units: Vec<SentenceUnit> = MISSING_DATA_SENTENCES
            .iter()
            .map(|sentence| SentenceUnit::new(*sentence, &all_indices))
            .collect();

        let (sentences, citations) = render_units(units);
        SummaryResult::new(SummaryKind::InsufficientData, sentences.join(" "), citations)
    }

    fn substantive_summary(&self, bullets: &[Bullet]) -> SummaryResult {
        let all_indices: Vec<usize> = bullets.iter().map(|b| b.position).collect();

        let mut units = Vec::with_capacity(bullets.len() * 2 + 4);
        units.push(SentenceUnit::new(INTRODUCTION, &all_indices));
        units.push(SentenceUnit::new(GROUNDING, &all_indices));

        for bullet in bullets {
            let own = [bullet.position];
            units.push(SentenceUnit::new(
                format!(
                    "Bullet {} reports that {}",
                    bullet.position,
                    normalize_sentence(&bullet.text)
                ),
                &own,
            ));
            units.push(SentenceUnit::new(RESTATEMENT_CAUTION, &own));
        }

        units.push(SentenceUnit::new(CLOSING_SYNTHESIS, &all_indices));
        units.push(SentenceUnit::new(CLOSING_CAUTION, &all_indices));

        let (mut sentences, mut citations) = render_units(units);
        let added = pad_sentences(
            &mut sentences,
            &mut citations,
            &all_indices,
            self.config.word_target,
        );
        debug!(added, sentences = sentences.len(), "padded summary");

        SummaryResult::new(SummaryKind::Substantive, sentences.join(" "), citations)
    }
}

fn render_units(units: Vec<SentenceUnit>) -> (Vec<String>, Vec<Vec<usize>>) {
    units
        .into_iter()
        .map(|unit| {
            let rendered = unit.render();
            (rendered, unit.citations)
        })
        .unzip()
}
