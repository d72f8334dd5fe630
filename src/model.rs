//! # Pipeline Service Model
//!
//! The record the pipeline service layer works with. The bridge in
//! [`crate::bridge`] only reads and writes the fields declared here.

use crate::error::StatusParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Lifecycle status of a pipeline in the service layer
///
/// A status is identified by its string form: `Unrecognized("PipelineReady")`
/// equals `Ready`, and [`PipelineStatus::normalized`] folds it into `Ready`.
#[derive(Debug, Clone, Default)]
pub enum PipelineStatus {
    /// Newly created, not yet usable
    #[default]
    Creating,
    /// Ready for runs
    Ready,
    /// Being torn down
    Deleting,
    /// A status string this build does not know, kept verbatim
    ///
    /// [`PipelineStatus::parse_lenient`] never builds this from a known string.
    Unrecognized(String),
}

impl PipelineStatus {
    /// String form used on the wire and in the service layer
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Creating => "PipelineCreating",
            PipelineStatus::Ready => "PipelineReady",
            PipelineStatus::Deleting => "PipelineDeleting",
            PipelineStatus::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Parse a status string, keeping unknown values as [`PipelineStatus::Unrecognized`]
    pub fn parse_lenient(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| PipelineStatus::Unrecognized(value.to_string()))
    }

    /// Whether this is one of the known statuses
    pub fn is_known(&self) -> bool {
        !matches!(self.normalized(), PipelineStatus::Unrecognized(_))
    }

    /// Canonical form, mapping an `Unrecognized` known string to its variant
    pub fn normalized(&self) -> Self {
        PipelineStatus::parse_lenient(self.as_str())
    }
}

impl PartialEq for PipelineStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PipelineStatus {}

impl Hash for PipelineStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PipelineCreating" => Ok(PipelineStatus::Creating),
            "PipelineReady" => Ok(PipelineStatus::Ready),
            "PipelineDeleting" => Ok(PipelineStatus::Deleting),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

impl Serialize for PipelineStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PipelineStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(PipelineStatus::parse_lenient(&raw))
    }
}

/// Pipeline record owned by the service layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub namespace: String,
    /// Unique identifier, mirrored as the resource's `metadata.uid`
    #[serde(default)]
    pub uuid: String,
    /// Creation instant in seconds since the Unix epoch
    #[serde(default)]
    pub created_at_in_sec: i64,
    #[serde(default)]
    pub status: PipelineStatus,
}
