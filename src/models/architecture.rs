//! Records behind the architecture explainer page.

use serde::{Deserialize, Serialize};

use super::ColorTag;

/// One stage of the illustrative processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineStage {
    pub id: String,
    pub name: String,
    /// Short line shown under the diagram node
    pub summary: String,
    /// Longer text shown on the component card
    pub description: String,
    #[serde(default)]
    pub components: Vec<String>,
    pub color: ColorTag,
}

/// A label/value pair in the "key technical characteristics" grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Characteristic {
    pub label: String,
    pub value: String,
}

/// Architecture explainer content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Architecture {
    #[serde(default)]
    pub stages: Vec<PipelineStage>,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
}
