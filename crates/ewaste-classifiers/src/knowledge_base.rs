//! Static hazard knowledge base
//!
//! Device keywords mapped to hazard profiles. The table is ordered: when
//! several keywords match the same device, the one declared first wins,
//! so reordering entries changes classification results.

use ewaste_core::{HazardLevel, HazardMaterial};
use serde::Serialize;

/// Hazard profile for one device keyword
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseEntry {
    pub hazard_level: HazardLevel,
    pub hazards: &'static [HazardMaterial],
    /// Recycling process steps in presentation order
    pub process: &'static [&'static str],
}

impl KnowledgeBaseEntry {
    /// Names of the hazardous materials, in table order
    pub fn elements(&self) -> Vec<String> {
        self.hazards.iter().map(|h| h.element.to_string()).collect()
    }
}

const SMARTPHONE: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::High,
    hazards: &[
        HazardMaterial::new("Lithium", "Highly reactive, fire risk if punctured, environmental toxicity."),
        HazardMaterial::new("Cobalt", "Mining ethics and high toxicity in soil/water."),
        HazardMaterial::new("Arsenic", "Found in microchips; chronic exposure is carcinogenic."),
    ],
    process: &[
        "Battery Extraction: Safely remove Li-ion battery for specialized processing.",
        "Manual Dismantling: Separate screen, circuit boards, and plastic casing.",
        "Material Recovery: Smelt circuit boards to recover gold, silver, and copper.",
        "Shredding: Process plastic and glass into secondary raw materials.",
    ],
};

const LAPTOP: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::High,
    hazards: &[
        HazardMaterial::new("Mercury", "Used in LCD backlights; potent neurotoxin."),
        HazardMaterial::new("Lead", "Found in CRT monitors and solder; causes cognitive damage."),
        HazardMaterial::new("Brominated Flame Retardants", "PBT substances that accumulate in humans."),
    ],
    process: &[
        "Hazardous Removal: Extract mercury-containing backlights and CMOS batteries.",
        "Partial Shredding: Mechanical separation of ferrous and non-ferrous metals.",
        "Electromagnetic Separation: Filter out precious metal components.",
        "Polishing: Refine recovered glass for industrial reuse.",
    ],
};

const BATTERY: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::High,
    hazards: &[
        HazardMaterial::new("Cadmium", "Extremely toxic to kidneys and bones."),
        HazardMaterial::new("Sulfuric Acid", "Causes severe chemical burns and soil acidification."),
    ],
    process: &[
        "Neutralization: Stabilize acids and reactive chemicals.",
        "Hydrometallurgical Processing: Use aqueous chemistry for metal recovery.",
        "Pyrometallurgical Treatment: High-heat smelting to isolate nickel and cadmium.",
    ],
};

const MONITOR: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::High,
    hazards: &[
        HazardMaterial::new("Phosphor Powder", "Toxic when inhaled; used in older CRT screens."),
        HazardMaterial::new("Barium", "Used to protect users from X-rays; toxic but stable unless crushed."),
    ],
    process: &[
        "Glass Separation: Separate panel glass from funnel glass (which contains lead).",
        "Phosphor Recovery: Vacuum remove phosphor coating for hazardous waste disposal.",
        "Metal Extraction: Recover steel and copper from yolk and housing.",
    ],
};

const CABLE: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::Medium,
    hazards: &[
        HazardMaterial::new("PVC", "Releases dioxins when burned; non-biodegradable."),
        HazardMaterial::new("Phthalates", "Endocrine disruptors found in plastic insulation."),
    ],
    process: &[
        "Mechanical Stripping: Strip insulation from copper wire.",
        "Granulation: Chop cables into fine pieces for density separation.",
        "Refining: Purify copper through electrolysis.",
    ],
};

/// Profile used when no keyword matches
pub static GENERIC_PROFILE: KnowledgeBaseEntry = KnowledgeBaseEntry {
    hazard_level: HazardLevel::Medium,
    hazards: &[
        HazardMaterial::new("Complex Polymers", "Hard-to-recycle plastics that may contain stabilizers."),
        HazardMaterial::new("Heavy Metals", "Potential trace amounts of lead or cadmium in solder."),
        HazardMaterial::new("Residual Charge", "Risk of electric shock or short circuit if disassembled roughly."),
    ],
    process: &[
        "Safe Storage: Keep in a dry place to prevent leaching of chemicals.",
        "Collection: Deliver to a certified e-waste aggregator.",
        "Sorting: Professionals will categorize the device for component recovery.",
        "Downcycling: Materials that cannot be recovered will be safely downcycled.",
    ],
};

/// Keyword table in declaration (tie-break) order
static ENTRIES: [(&str, KnowledgeBaseEntry); 5] = [
    ("smartphone", SMARTPHONE),
    ("laptop", LAPTOP),
    ("battery", BATTERY),
    ("monitor", MONITOR),
    ("cable", CABLE),
];

/// All keyword entries in declaration order
pub fn entries() -> &'static [(&'static str, KnowledgeBaseEntry)] {
    &ENTRIES
}

/// Keywords in declaration order
pub fn keywords() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(keyword, _)| *keyword)
}

/// Look up an entry by its exact keyword
pub fn get(keyword: &str) -> Option<&'static KnowledgeBaseEntry> {
    ENTRIES
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, entry)| entry)
}

/// The generic fallback profile
pub fn generic_profile() -> &'static KnowledgeBaseEntry {
    &GENERIC_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let keywords: Vec<_> = keywords().collect();
        assert_eq!(
            keywords,
            vec!["smartphone", "laptop", "battery", "monitor", "cable"]
        );
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for keyword in keywords() {
            assert_eq!(keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_every_entry_has_process_steps() {
        for (keyword, entry) in entries() {
            assert!(!entry.process.is_empty(), "{} has no process", keyword);
            assert!(!entry.hazards.is_empty(), "{} has no hazards", keyword);
        }
    }

    #[test]
    fn test_generic_profile_shape() {
        let generic = generic_profile();
        assert_eq!(generic.hazard_level, HazardLevel::Medium);
        assert_eq!(
            generic.elements(),
            vec!["Complex Polymers", "Heavy Metals", "Residual Charge"]
        );
        assert_eq!(generic.process.len(), 4);
    }

    #[test]
    fn test_get_by_keyword() {
        assert_eq!(get("cable").map(|e| e.hazard_level), Some(HazardLevel::Medium));
        assert!(get("toaster").is_none());
    }
}
