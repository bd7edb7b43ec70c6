use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Literal bullet values treated as "no content". Matching is case-sensitive.
pub const PLACEHOLDER_TOKENS: [&str; 6] = ["\u{2026}", "...", "N/A", "NA", "n/a", "na"];

static PLACEHOLDERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PLACEHOLDER_TOKENS.into_iter().collect());

/// A non-empty bullet together with its 1-based position in the caller's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bullet {
    /// Position in the original, unfiltered input
    pub(crate) position: usize,
    /// Trimmed bullet text
    pub(crate) text: String,
}

/// Outcome of inspecting the caller's bullets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classification {
    /// Nothing usable; carries how many bullets were supplied in total.
    MissingData { bullet_count: usize },
    /// Non-empty bullets in input order, plus the total supplied.
    Usable {
        bullets: Vec<Bullet>,
        bullet_count: usize,
    },
}

impl Classification {
    /// Number of bullets supplied, blanks and placeholders included.
    pub(crate) const fn bullet_count(&self) -> usize {
        match self {
            Self::MissingData { bullet_count } | Self::Usable { bullet_count, .. } => {
                *bullet_count
            }
        }
    }
}

/// Returns true if the text is blank or one of [`PLACEHOLDER_TOKENS`]
/// once surrounding whitespace is removed.
///
/// # Examples
///
/// ```
/// use research_summary::is_placeholder;
///
/// assert!(is_placeholder(" N/A "));
/// assert!(is_placeholder("   "));
/// assert!(!is_placeholder("N/a"));
/// ```
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || PLACEHOLDERS.contains(trimmed)
}

/// Trims, numbers and filters the bullets, then decides which template applies.
///
/// Positions are assigned before blanks are dropped, so they always refer
/// back to the caller's original list.
pub(crate) fn classify<I, S>(bullets: I) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bullet_count = 0;
    let mut usable = Vec::new();

    for (index, raw) in bullets.into_iter().enumerate() {
        bullet_count += 1;
        let text = raw.as_ref().trim();
        if !text.is_empty() {
            usable.push(Bullet {
                position: index + 1,
                text: text.to_string(),
            });
        }
    }

    if usable.iter().all(|bullet| is_placeholder(&bullet.text)) {
        return Classification::MissingData { bullet_count };
    }

    Classification::Usable {
        bullets: usable,
        bullet_count,
    }
}
