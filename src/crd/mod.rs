//! # Custom Resource Definitions
//!
//! CRD types for the Pipeline resource.
//!
//! The resource carries a free-text description in its spec and exposes the
//! pipeline's lifecycle status through a single reserved condition in its status.

mod status;

pub use status::{Condition, ConditionStatus, PipelineStatus};

use kube::core::ObjectList;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pipeline Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: pipelines.kubeflow.org/v2beta1
/// kind: Pipeline
/// metadata:
///   name: p1
///   namespace: ns
/// spec:
///   description: demo
/// status:
///   conditions:
///     - type: PipelineStatus
///       status: "True"
///       reason: PipelineReady
///       message: PipelineReady
///       lastTransitionTime: "2025-01-01T00:00:00Z"
/// ```
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Pipeline",
    group = "pipelines.kubeflow.org",
    version = "v2beta1",
    plural = "pipelines",
    namespaced,
    status = "PipelineStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Status", "type":"string", "jsonPath":".status.conditions[?(@.type==\"PipelineStatus\")].reason"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSpec {
    /// Free-text description of the pipeline
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// List wrapper for Pipeline resources
pub type PipelineList = ObjectList<Pipeline>;
