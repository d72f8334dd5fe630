//! # Pipeline Status
//!
//! Status types for the Pipeline resource. The status is a list of standard
//! Kubernetes condition records; one of them, typed with the reserved marker,
//! carries the pipeline's overall status.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of the Pipeline resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStatus {
    /// Conditions represent the latest available observations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl PipelineStatus {
    /// First condition with the given type, in list order
    pub fn condition(&self, condition_type: &str) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.r#type == condition_type)
    }
}

/// Tri-state status of a condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

/// Condition represents a condition of a resource
///
/// Mirrors the Kubernetes `metav1.Condition` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    #[serde(default)]
    pub status: ConditionStatus,
    /// Machine-readable reason for the last transition
    #[serde(default)]
    pub reason: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Last transition time (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    /// Generation the condition was set against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}
