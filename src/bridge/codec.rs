//! # Status Codec
//!
//! Encodes the model's single status value into the resource's condition list
//! and decodes it back. Callers go through [`StatusCodec`] so the encoding
//! convention can change without touching them.

use crate::bridge::time::rfc3339;
use crate::constants::PIPELINE_STATUS_CONDITION_TYPE;
use crate::crd::{Condition, ConditionStatus};
use crate::model::PipelineStatus;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Encode/decode pair between a model status and a condition list
pub trait StatusCodec {
    /// Conditions that carry `status`, stamped with `at` as the transition time
    fn encode(&self, status: &PipelineStatus, at: DateTime<Utc>) -> Vec<Condition>;

    /// Status carried by `conditions`, or `None` when no carrier is present
    fn decode(&self, conditions: &[Condition]) -> Option<PipelineStatus>;
}

/// Carries the status in one condition typed with a reserved marker
///
/// The status string goes into both `reason` and `message`; the condition's
/// own status is always `True`. Decoding takes the first condition with the
/// marker type and ignores any later ones.
#[derive(Debug, Clone, Copy)]
pub struct MarkerConditionCodec {
    marker: &'static str,
}

impl MarkerConditionCodec {
    pub const fn new(marker: &'static str) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> &'static str {
        self.marker
    }
}

impl Default for MarkerConditionCodec {
    fn default() -> Self {
        Self::new(PIPELINE_STATUS_CONDITION_TYPE)
    }
}

impl StatusCodec for MarkerConditionCodec {
    fn encode(&self, status: &PipelineStatus, at: DateTime<Utc>) -> Vec<Condition> {
        vec![Condition {
            r#type: self.marker.to_string(),
            status: ConditionStatus::True,
            reason: status.to_string(),
            message: status.to_string(),
            last_transition_time: Some(rfc3339(at)),
            observed_generation: None,
        }]
    }

    fn decode(&self, conditions: &[Condition]) -> Option<PipelineStatus> {
        let mut carriers = conditions.iter().filter(|c| c.r#type == self.marker);
        let first = carriers.next()?;

        let ignored = carriers.count();
        if ignored > 0 {
            warn!(
                marker = self.marker,
                ignored, "Multiple status conditions present, using the first"
            );
        }

        let status = PipelineStatus::parse_lenient(&first.reason);
        if !status.is_known() {
            warn!(
                marker = self.marker,
                reason = %first.reason,
                "Status condition carries an unrecognized reason"
            );
        }
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(reason: &str) -> Condition {
        Condition {
            r#type: PIPELINE_STATUS_CONDITION_TYPE.to_string(),
            reason: reason.to_string(),
            ..Condition::default()
        }
    }

    #[test]
    fn test_encode_single_true_condition() {
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let conditions = MarkerConditionCodec::default().encode(&PipelineStatus::Ready, at);

        assert_eq!(conditions.len(), 1);
        let c = &conditions[0];
        assert_eq!(c.r#type, "PipelineStatus");
        assert_eq!(c.status, ConditionStatus::True);
        assert_eq!(c.reason, "PipelineReady");
        assert_eq!(c.message, "PipelineReady");
        assert_eq!(c.last_transition_time.as_deref(), Some("2023-11-14T22:13:20Z"));
    }

    #[test]
    fn test_decode_without_carrier() {
        let other = Condition {
            r#type: "Ready".to_string(),
            reason: "PipelineReady".to_string(),
            ..Condition::default()
        };
        assert_eq!(MarkerConditionCodec::default().decode(&[]), None);
        assert_eq!(MarkerConditionCodec::default().decode(&[other]), None);
    }

    #[test]
    fn test_decode_first_carrier_wins() {
        let conditions = vec![marker("PipelineDeleting"), marker("PipelineReady")];
        assert_eq!(
            MarkerConditionCodec::default().decode(&conditions),
            Some(PipelineStatus::Deleting)
        );
    }

    #[test]
    fn test_decode_unrecognized_reason_is_kept() {
        let conditions = vec![marker("PipelinePaused")];
        assert_eq!(
            MarkerConditionCodec::default().decode(&conditions),
            Some(PipelineStatus::Unrecognized("PipelinePaused".to_string()))
        );
    }

    #[test]
    fn test_custom_marker() {
        let codec = MarkerConditionCodec::new("Lifecycle");
        let at = Utc::now();
        let conditions = codec.encode(&PipelineStatus::Deleting, at);
        assert_eq!(conditions[0].r#type, "Lifecycle");
        assert_eq!(codec.decode(&conditions), Some(PipelineStatus::Deleting));
        assert_eq!(MarkerConditionCodec::default().decode(&conditions), None);
    }
}
