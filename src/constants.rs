//! # Constants
//!
//! API identity of the Pipeline resource and defaults shared by the library and binaries.

/// API group of the Pipeline custom resource
pub const PIPELINE_GROUP: &str = "pipelines.kubeflow.org";

/// API version of the Pipeline custom resource
pub const PIPELINE_VERSION: &str = "v2beta1";

/// Kind of the singular resource
pub const PIPELINE_KIND: &str = "Pipeline";

/// Kind of the list wrapper
pub const PIPELINE_LIST_KIND: &str = "PipelineList";

/// Plural resource name used in API paths
pub const PIPELINE_PLURAL: &str = "pipelines";

/// Reserved condition type that carries the pipeline's overall status.
///
/// At most one condition with this type is expected in `status.conditions`;
/// decoding honors only the first one.
pub const PIPELINE_STATUS_CONDITION_TYPE: &str = "PipelineStatus";

/// Default namespace for CLI operations
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default field manager for server-side apply
pub const DEFAULT_FIELD_MANAGER: &str = "pipelinectl";

/// Default tracing directive for the CLI
pub const DEFAULT_LOG_FILTER: &str = "pipelinectl=info,pipeline_crd=info";
