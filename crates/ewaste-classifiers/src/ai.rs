//! AI-backed classifier (Remote tier)
//!
//! Sends a fixed prompt to a completion provider in JSON mode and
//! validates the reply against the `ClassificationResult` schema.

use crate::classifier::{ClassifierTier, HazardClassifier};
use crate::config::ClassifierConfig;
use ewaste_core::{
    ChatMessage, ClassificationResult, CompletionProvider, CompletionRequest, DeviceSubmission,
    Error, HazardLevel, Result,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

const SYSTEM_PROMPT: &str = "You are an expert e-waste recycling consultant with deep knowledge of electronics, environmental science, and hazardous materials. Provide detailed, accurate, and actionable information.";

/// Build the user prompt for one device
pub fn build_prompt(name: &str, category: &str) -> String {
    format!(
        r#"Analyze the following electronic device for e-waste recycling purposes:

Device: {name}
Category: {category}

Please provide a comprehensive analysis in the following JSON format:
{{
  "hazardLevel": "Low/Medium/High",
  "hazardousMaterials": ["list of hazardous materials present"],
  "environmentalImpact": "detailed description of environmental impact",
  "safetyPrecautions": ["list of safety precautions when handling"],
  "recyclingSteps": ["detailed step-by-step recycling instructions"],
  "componentBreakdown": "description of major components and their recyclability",
  "disposalWarnings": ["important warnings about disposal"],
  "estimatedValue": "estimated recyclable material value",
  "carbonFootprint": "estimated carbon impact if properly recycled vs landfill"
}}

Be specific, detailed, and scientifically accurate. Focus on practical information for e-waste recycling."#
    )
}

/// Parse and validate a provider reply
pub fn parse_response(raw: &str) -> Result<ClassificationResult> {
    let json = strip_code_fence(raw);

    let wire: AnalysisWire = serde_json::from_str(json)
        .map_err(|e| Error::parse(format!("provider reply does not match schema: {}", e)))?;

    let hazard_level: HazardLevel = wire.hazard_level.parse()?;

    Ok(ClassificationResult {
        hazard_level,
        hazardous_materials: wire.hazardous_materials,
        environmental_impact: wire.environmental_impact,
        safety_precautions: wire.safety_precautions,
        recycling_steps: wire.recycling_steps,
        component_breakdown: wire.component_breakdown,
        disposal_warnings: wire.disposal_warnings,
        estimated_value: wire.estimated_value,
        carbon_footprint: wire.carbon_footprint,
    }
    .ensure_recycling_step())
}

/// Some models wrap JSON in a Markdown fence even in JSON mode
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Classifier backed by an external completion provider
pub struct AiClassifier {
    name: String,
    provider: Arc<dyn CompletionProvider>,
    model: String,
    temperature: f32,
}

impl AiClassifier {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &ClassifierConfig) -> Self {
        Self {
            name: format!("ai:{}", provider.name()),
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Ask the provider to classify a device
    pub async fn classify_with_ai(&self, name: &str, category: &str) -> Result<ClassificationResult> {
        info!("Analyzing device: {} ({})", name, category);

        let request = CompletionRequest::new(
            self.model.clone(),
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_prompt(name, category)),
            ],
        )
        .with_temperature(self.temperature)
        .json();

        let raw = self.provider.complete(&request).await?;
        debug!("Provider returned {} bytes", raw.len());

        parse_response(&raw)
    }
}

#[async_trait::async_trait]
impl HazardClassifier for AiClassifier {
    async fn classify(&self, device: &DeviceSubmission) -> Result<ClassificationResult> {
        self.classify_with_ai(&device.name, &device.category).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::Remote
    }
}

// =============================================================================
// Provider Reply Schema
// =============================================================================

/// Every field is required; a missing one is a parse error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisWire {
    hazard_level: String,
    hazardous_materials: Vec<String>,
    environmental_impact: String,
    safety_precautions: Vec<String>,
    recycling_steps: Vec<String>,
    component_breakdown: String,
    disposal_warnings: Vec<String>,
    estimated_value: String,
    carbon_footprint: String,
}
