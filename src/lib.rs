//! # Pipeline CRD
//!
//! The `Pipeline` Kubernetes custom resource and its bridge to the pipeline
//! service model.
//!
//! ## Overview
//!
//! - **Schema** - [`crd::Pipeline`] with its spec, status and list wrapper
//! - **Bridge** - [`crd::Pipeline::from_model`] and [`crd::Pipeline::to_model`]
//! - **Status codec** - the model status travels as one condition typed
//!   [`constants::PIPELINE_STATUS_CONDITION_TYPE`]
//! - **Registry** - [`registry::init`] registers the kinds at startup

pub mod bridge;
pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod model;
pub mod observability;
pub mod registry;

// Re-export CRD types for convenience
pub use crd::*;
