//! # research-summary
//!
//! Deterministic conversion of research bullet points into a cited narrative.
//!
//! ## Features
//!
//! - Placeholder detection (`…`, `N/A` and friends) with a fixed fallback narrative
//! - One restated sentence per bullet, cited back to its original position
//! - Filler padding up to a configurable word target
//! - Deep-copy JSON export of the result
//!
//! ## Quick Start
//!
//! ```
//! use research_summary::{Config, SummaryGenerator};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder().word_target(200).build()?;
//! let generator = SummaryGenerator::new(config)?;
//!
//! let result = generator.generate_summary([
//!     "The trial enrolled 120 adults",
//!     "Median follow-up was 14 months.",
//! ]);
//!
//! assert_eq!(result.title(), "Research Summary");
//! assert!(result.word_count() >= 200);
//! assert_eq!(result.citations().len(), result.sentence_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Classifier**: trims and numbers bullets, detects placeholder-only input
//! 2. **Templates**: builds either the insufficient-data or the substantive narrative
//! 3. **Citations**: appends `(n)` markers to each sentence
//! 4. **Padding**: cycles filler sentences until the word target is met

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod bank;
mod citation;
mod classify;
mod config;
mod error;
mod generator;
mod padding;
mod summary;

pub use citation::{apply_citations, normalize_sentence};
pub use classify::{PLACEHOLDER_TOKENS, is_placeholder};
pub use config::{Config, ConfigBuilder, DEFAULT_WORD_TARGET, MAX_WORD_TARGET};
pub use error::{Error, Result};
pub use generator::SummaryGenerator;
pub use padding::count_words;
pub use summary::{SummaryKind, SummaryResult};

/// Generates a summary with the given word target.
///
/// Shorthand for building a [`SummaryGenerator`] and calling
/// [`SummaryGenerator::generate_summary`].
///
/// # Errors
///
/// Returns an error if `word_target` exceeds [`MAX_WORD_TARGET`].
///
/// # Examples
///
/// ```
/// use research_summary::generate_summary;
///
/// let result = generate_summary(["N/A", "..."], 350)?;
/// assert_eq!(result.title(), "Insufficient Data to Summarize Research");
/// assert!(result.citations().iter().all(|c| c == &[1, 2]));
/// # Ok::<(), research_summary::Error>(())
/// ```
pub fn generate_summary<I, S>(bullets: I, word_target: i64) -> Result<SummaryResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(SummaryGenerator::with_word_target(word_target)?.generate_summary(bullets))
}
