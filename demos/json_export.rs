//! Exporting summaries as JSON
//!
//! Shows the plain-object export and that editing the exported copy
//! leaves the original summary untouched.

use research_summary::{Config, SummaryGenerator, SummaryResult};

fn main() -> anyhow::Result<()> {
    let config = Config::from_json(r#"{ "word_target": 120 }"#)?;
    let generator = SummaryGenerator::new(config)?;

    // Placeholder-only input falls back to the insufficient-data narrative.
    let missing = generator.generate_summary(["\u{2026}", "N/A"]);
    println!("{}", missing.to_json(true)?);

    let mut result = generator.generate_summary(["Observation protocols were pre-registered"]);

    let mut exported = result.to_value();
    exported["citations"][0] = serde_json::json!([42]);
    assert_eq!(result.citations()[0], vec![1]);

    // Direct edits, on the other hand, are visible on the next read.
    result.citations_mut()[0].push(1);
    println!("first citation list now {:?}", result.citations()[0]);

    let json = result.to_json(false)?;
    let parsed: SummaryResult = serde_json::from_str(&json)?;
    println!("✓ round-tripped '{}' with {} sentences", parsed.title(), parsed.sentence_count());

    Ok(())
}
