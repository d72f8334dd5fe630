//! # Error Types
//!
//! Errors raised by the model bridge and the type registry.

use thiserror::Error;

/// A status string that names no known pipeline status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized pipeline status: {0:?}")]
pub struct StatusParseError(pub String);

/// Strict conversion failures from the resource shape into the model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The reserved status condition carried a reason that is not a known status
    #[error("pipeline {namespace}/{name} carries unrecognized status reason {reason:?}")]
    UnrecognizedStatus {
        name: String,
        namespace: String,
        reason: String,
    },
}

/// Type registry failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same group/version/kind was registered under a different plural
    #[error("kind {kind} in {group}/{version} already registered as {existing:?}, refusing {requested:?}")]
    Conflict {
        group: String,
        version: String,
        kind: String,
        existing: String,
        requested: String,
    },
    /// A kind was used before it was added to the registry
    #[error("kind {kind} in {group}/{version} is not registered")]
    NotRegistered {
        group: String,
        version: String,
        kind: String,
    },
}
