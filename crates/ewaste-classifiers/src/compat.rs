//! Legacy-shaped fields for older consumers of device records

use ewaste_core::ClassificationResult;
use serde::Serialize;

/// Characters of the environmental impact kept in the summary
pub const SUMMARY_CHARS: usize = 150;

/// Steps mirrored into `recommendations`
pub const RECOMMENDATION_COUNT: usize = 3;

/// `classificationResults` and `recommendations` as older clients read them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFields {
    pub classification_results: String,
    pub recommendations: Vec<String>,
}

impl LegacyFields {
    pub fn from_result(name: &str, category: &str, result: &ClassificationResult) -> Self {
        Self {
            classification_results: format!(
                "{} ({}): {}",
                name,
                category,
                truncate_chars(&result.environmental_impact, SUMMARY_CHARS)
            ),
            recommendations: result
                .recycling_steps
                .iter()
                .take(RECOMMENDATION_COUNT)
                .cloned()
                .collect(),
        }
    }
}

/// Truncate on a character boundary, marking the cut with "..."
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FallbackClassifier;

    #[test]
    fn test_summary_is_truncated() {
        let result = FallbackClassifier::new().classify_device("iPhone 12", "E-waste");
        let legacy = LegacyFields::from_result("iPhone 12", "E-waste", &result);

        assert!(legacy.classification_results.starts_with("iPhone 12 (E-waste): iPhone 12 contains"));
        assert!(legacy.classification_results.ends_with("..."));

        let prefix = "iPhone 12 (E-waste): ".chars().count();
        assert_eq!(
            legacy.classification_results.chars().count(),
            prefix + SUMMARY_CHARS + 3
        );
    }

    #[test]
    fn test_recommendations_mirror_first_three_steps() {
        let result = FallbackClassifier::new().classify_device("Plastic Tray", "Plastic");
        let legacy = LegacyFields::from_result("Plastic Tray", "Plastic", &result);
        assert_eq!(legacy.recommendations, result.recycling_steps[..3].to_vec());
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_chars("short", 150), "short");
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let text = "é".repeat(200);
        let truncated = truncate_chars(&text, 150);
        assert_eq!(truncated.chars().count(), 153);
    }

    #[test]
    fn test_fewer_steps_than_three() {
        let mut result = FallbackClassifier::new().classify_device("Tray", "Plastic");
        result.recycling_steps.truncate(1);
        let legacy = LegacyFields::from_result("Tray", "Plastic", &result);
        assert_eq!(legacy.recommendations.len(), 1);
    }
}
