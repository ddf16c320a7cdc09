//! Enhanced fallback classifier (Local tier)
//!
//! Used when AI-backed classification is unavailable. Risk is a binary
//! call: batteries, phones, laptops and monitors get the high-risk
//! template, everything else the default one.

use crate::classifier::{ClassifierTier, HazardClassifier};
use ewaste_core::{ClassificationResult, DeviceSubmission, HazardLevel, Result};

const HIGH_RISK_MATERIALS: [&str; 6] = [
    "Lithium-ion batteries",
    "Lead",
    "Mercury",
    "Cadmium",
    "Brominated flame retardants",
    "Beryllium",
];

const DEFAULT_MATERIALS: [&str; 3] = ["Lead", "PVC plastics", "Polychlorinated biphenyls (PCBs)"];

const RECYCLING_STEPS: [&str; 7] = [
    "Back up and erase all personal data from the device",
    "Remove any batteries if safely accessible",
    "Check if the device is still functional - consider donation or refurbishment",
    "Locate a certified e-waste recycling center near you",
    "Transport safely in a padded container",
    "Request a receipt or certificate of proper disposal",
    "Ask the facility about their recycling process and certifications (R2 or e-Stewards)",
];

const CARBON_FOOTPRINT: &str = "Proper recycling can save approximately 20-50kg of CO2 emissions compared to manufacturing from virgin materials. Landfill disposal would contribute to methane production and prevent material recovery, resulting in 3-5x higher carbon impact over the device lifecycle.";

/// Binary risk heuristic over the device name and category
pub fn is_high_risk(name: &str, category: &str) -> bool {
    let name = name.to_lowercase();
    let category = category.to_lowercase();

    category.contains("battery")
        || name.contains("phone")
        || name.contains("laptop")
        || category.contains("monitor")
}

/// Template-based fallback classifier
pub struct FallbackClassifier {
    name: String,
}

impl FallbackClassifier {
    pub fn new() -> Self {
        Self {
            name: "enhanced-fallback".to_string(),
        }
    }

    /// Build the fallback result. Never fails.
    pub fn classify_device(&self, name: &str, category: &str) -> ClassificationResult {
        let high_risk = is_high_risk(name, category);

        let (hazard_level, materials, estimated_value): (_, &[&str], _) = if high_risk {
            (
                HazardLevel::High,
                &HIGH_RISK_MATERIALS[..],
                "Contains $5-15 worth of recoverable materials including precious metals and rare earth elements",
            )
        } else {
            (
                HazardLevel::Medium,
                &DEFAULT_MATERIALS[..],
                "Contains $2-8 worth of recoverable metals and plastics",
            )
        };

        let handling = if high_risk {
            "Keep away from heat sources and avoid puncturing batteries"
        } else {
            "Handle with care to avoid cuts from sharp edges"
        };

        let specific_warning = if high_risk {
            "Battery may explode if damaged or overheated"
        } else {
            "May contain mercury in switches or displays"
        };

        ClassificationResult {
            hazard_level,
            hazardous_materials: to_strings(materials),
            environmental_impact: format!(
                "{} contains materials that can contaminate soil and water if improperly disposed. \
                 Heavy metals can persist in the environment for decades and enter the food chain. \
                 Proper recycling can recover valuable materials like gold, silver, copper, and rare earth \
                 elements while preventing environmental harm.",
                name
            ),
            safety_precautions: to_strings(&[
                "Wear protective gloves when handling",
                handling,
                "Store in a cool, dry place before recycling",
                "Do not attempt to disassemble without proper training",
                "Keep away from children and pets",
            ]),
            recycling_steps: to_strings(&RECYCLING_STEPS),
            component_breakdown: format!(
                "{} typically contains: Circuit boards with precious metals (gold, silver, copper), \
                 plastic housing (recyclable), glass components, various metal alloys, and electronic \
                 components. Approximately 80% of the device by weight is recyclable. The remaining 20% \
                 requires special hazardous waste handling.",
                name
            ),
            disposal_warnings: to_strings(&[
                "NEVER throw in regular trash - illegal in many jurisdictions",
                "Do not burn or incinerate - releases toxic fumes",
                "Avoid landfill disposal - contaminates groundwater",
                specific_warning,
                "Improper disposal may result in fines or legal penalties",
            ]),
            estimated_value: estimated_value.to_string(),
            carbon_footprint: CARBON_FOOTPRINT.to_string(),
        }
    }
}

impl Default for FallbackClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HazardClassifier for FallbackClassifier {
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

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_high_risk_rules() {
        assert!(is_high_risk("iPhone 12", "E-waste"));
        assert!(is_high_risk("Old ThinkPad Laptop", "Computers"));
        assert!(is_high_risk("AA pack", "Battery"));
        assert!(is_high_risk("Dell P2419H", "Monitor"));
        assert!(!is_high_risk("Plastic Tray", "Plastic"));
    }

    #[test]
    fn test_rules_check_the_documented_field_only() {
        // "battery" and "monitor" are category rules, "phone" and "laptop" name rules
        assert!(!is_high_risk("battery", "Misc"));
        assert!(!is_high_risk("monitor arm", "Furniture"));
        assert!(!is_high_risk("Case", "Phone accessories"));
    }

    #[test]
    fn test_high_risk_template() {
        let result = FallbackClassifier::new().classify_device("iPhone 12", "E-waste");
        assert_eq!(result.hazard_level, HazardLevel::High);
        assert_eq!(result.hazardous_materials.len(), 6);
        assert_eq!(result.hazardous_materials[0], "Lithium-ion batteries");
        assert_eq!(result.recycling_steps.len(), 7);
        assert!(result.environmental_impact.starts_with("iPhone 12 contains"));
        assert!(result.estimated_value.contains("$5-15"));
        assert_eq!(result.disposal_warnings[3], "Battery may explode if damaged or overheated");
    }

    #[test]
    fn test_default_template() {
        let result = FallbackClassifier::new().classify_device("Plastic Tray", "Plastic");
        assert_eq!(result.hazard_level, HazardLevel::Medium);
        assert_eq!(
            result.hazardous_materials,
            vec!["Lead", "PVC plastics", "Polychlorinated biphenyls (PCBs)"]
        );
        assert_eq!(result.recycling_steps.len(), 7);
        assert_eq!(
            result.safety_precautions[1],
            "Handle with care to avoid cuts from sharp edges"
        );
    }

    proptest! {
        #[test]
        fn prop_fallback_is_total_and_deterministic(name in ".*", category in ".*") {
            let classifier = FallbackClassifier::new();
            let first = classifier.classify_device(&name, &category);
            prop_assert_eq!(&first, &classifier.classify_device(&name, &category));
            prop_assert!(!first.recycling_steps.is_empty());
        }
    }
}
