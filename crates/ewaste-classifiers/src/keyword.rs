//! Keyword classifier (Local tier)
//!
//! Direct lookup against the static knowledge base. The first declared
//! keyword found in the device name or category decides the profile;
//! devices matching nothing get the generic fallback profile.

use crate::classifier::{ClassifierTier, HazardClassifier};
use crate::knowledge_base::{self, KnowledgeBaseEntry};
use aho_corasick::AhoCorasick;
use ewaste_core::{ClassificationResult, DeviceSubmission, Error, Result};
use serde::Serialize;

const COMPONENT_BREAKDOWN: &str = "Circuit boards, plastic housing, glass, and metal alloys. \
Most of the device by weight can be recovered by a certified recycler.";

const DISPOSAL_WARNINGS: [&str; 3] = [
    "Do not place in household trash.",
    "Do not burn or incinerate.",
    "Use a certified e-waste collection point.",
];

const ESTIMATED_VALUE: &str = "Recoverable material value depends on condition and local market rates.";

const CARBON_FOOTPRINT: &str =
    "Certified recycling avoids the emissions of mining virgin materials and landfill leaching.";

/// The knowledge base profile a device resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileMatch {
    /// Matched keyword, `None` for the generic profile
    pub keyword: Option<&'static str>,

    #[serde(flatten)]
    pub entry: &'static KnowledgeBaseEntry,
}

impl ProfileMatch {
    pub fn is_generic(&self) -> bool {
        self.keyword.is_none()
    }
}

/// Knowledge-base keyword classifier
pub struct KeywordClassifier {
    name: String,
    keywords: AhoCorasick,
}

impl KeywordClassifier {
    /// Create a classifier over the static knowledge base
    pub fn new() -> Result<Self> {
        let keywords = AhoCorasick::new(knowledge_base::keywords())
            .map_err(|e| Error::internal(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            name: "keyword".to_string(),
            keywords,
        })
    }

    /// Resolve the profile for a device. First-declared keyword wins.
    pub fn lookup(&self, name: &str, category: &str) -> ProfileMatch {
        let name = name.to_lowercase();
        let category = category.to_lowercase();

        let first_declared = [name.as_str(), category.as_str()]
            .into_iter()
            .flat_map(|haystack| self.keywords.find_overlapping_iter(haystack))
            .map(|m| m.pattern().as_usize())
            .min();

        match first_declared {
            Some(index) => {
                let (keyword, entry) = &knowledge_base::entries()[index];
                ProfileMatch {
                    keyword: Some(*keyword),
                    entry,
                }
            }
            None => ProfileMatch {
                keyword: None,
                entry: knowledge_base::generic_profile(),
            },
        }
    }

    /// Classify without I/O. Total over any input.
    pub fn classify_device(&self, name: &str, category: &str) -> ClassificationResult {
        let profile = self.lookup(name, category);
        let entry = profile.entry;

        let environmental_impact = if profile.is_generic() {
            format!(
                "General Analysis: This {} requires professional handling to prevent environmental impact from plastics and trace metals.",
                category
            )
        } else {
            format!(
                "Scientific Analysis: This device contains critical hazards. {} were identified.",
                entry.elements().join(", ")
            )
        };

        ClassificationResult {
            hazard_level: entry.hazard_level,
            hazardous_materials: entry.elements(),
            environmental_impact,
            safety_precautions: entry
                .hazards
                .iter()
                .map(|h| format!("{}: {}", h.element, h.risk))
                .collect(),
            recycling_steps: entry.process.iter().map(|s| s.to_string()).collect(),
            component_breakdown: COMPONENT_BREAKDOWN.to_string(),
            disposal_warnings: DISPOSAL_WARNINGS.iter().map(|s| s.to_string()).collect(),
            estimated_value: ESTIMATED_VALUE.to_string(),
            carbon_footprint: CARBON_FOOTPRINT.to_string(),
        }
        .ensure_recycling_step()
    }
}

#[async_trait::async_trait]
impl HazardClassifier for KeywordClassifier {
    async fn classify(&self, device: &DeviceSubmission) -> Result<ClassificationResult> {
        Ok(self.classify_device(&device.name, &device.category))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::Local
    }
}
