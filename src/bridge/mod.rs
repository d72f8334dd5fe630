//! # Model Bridge
//!
//! Conversions between the Pipeline resource and the service-layer model.
//!
//! Both directions are pure: each call builds a fresh value and keeps no state.
//! The only non-determinism is the wall clock read by [`Pipeline::from_model`],
//! which stamps the status condition's transition time.

mod codec;
mod time;

pub use codec::{MarkerConditionCodec, StatusCodec};
pub use time::{epoch_secs_from_time, max_epoch_secs, min_epoch_secs, rfc3339, time_from_epoch_secs};

use crate::crd::{Pipeline, PipelineSpec, PipelineStatus};
use crate::error::ConversionError;
use crate::model;
use chrono::{DateTime, Utc};

impl Pipeline {
    /// Project a model record into a resource, stamping the status with the current time
    pub fn from_model(pipeline: &model::Pipeline) -> Self {
        Self::from_model_at(pipeline, Utc::now())
    }

    /// Project a model record into a resource, stamping the status with `at`
    pub fn from_model_at(pipeline: &model::Pipeline, at: DateTime<Utc>) -> Self {
        Self::from_model_with(pipeline, at, &MarkerConditionCodec::default())
    }

    /// Project a model record into a resource using `codec` for the status
    ///
    /// Identity fields are copied verbatim; an empty namespace or uuid is left
    /// unset. A zero creation instant leaves the creation timestamp unset.
    pub fn from_model_with<C: StatusCodec + ?Sized>(
        pipeline: &model::Pipeline,
        at: DateTime<Utc>,
        codec: &C,
    ) -> Self {
        let mut resource = Pipeline::new(
            &pipeline.name,
            PipelineSpec {
                description: pipeline.description.clone(),
            },
        );
        resource.metadata.namespace = non_empty(&pipeline.namespace);
        resource.metadata.uid = non_empty(&pipeline.uuid);
        if pipeline.created_at_in_sec != 0 {
            resource.metadata.creation_timestamp = time_from_epoch_secs(pipeline.created_at_in_sec);
        }
        resource.status = Some(PipelineStatus {
            conditions: codec.encode(&pipeline.status, at),
        });
        resource
    }

    /// Project this resource back into a model record
    ///
    /// Missing metadata becomes empty strings and a zero creation instant.
    /// Without a status condition the model status is `Creating`. An unknown
    /// status reason is kept as [`model::PipelineStatus::Unrecognized`].
    pub fn to_model(&self) -> model::Pipeline {
        self.to_model_with(&MarkerConditionCodec::default())
    }

    /// Project this resource back into a model record using `codec` for the status
    pub fn to_model_with<C: StatusCodec + ?Sized>(&self, codec: &C) -> model::Pipeline {
        let status = self
            .status
            .as_ref()
            .and_then(|s| codec.decode(&s.conditions))
            .unwrap_or_default();

        model::Pipeline {
            name: self.metadata.name.clone().unwrap_or_default(),
            description: self.spec.description.clone(),
            namespace: self.metadata.namespace.clone().unwrap_or_default(),
            uuid: self.metadata.uid.clone().unwrap_or_default(),
            created_at_in_sec: self
                .metadata
                .creation_timestamp
                .as_ref()
                .map_or(0, epoch_secs_from_time),
            status,
        }
    }

    /// Like [`Pipeline::to_model`], but rejects an unrecognized status reason
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnrecognizedStatus`] when the status condition
    /// names a status this build does not know.
    pub fn try_to_model(&self) -> Result<model::Pipeline, ConversionError> {
        let pipeline = self.to_model();
        match &pipeline.status {
            model::PipelineStatus::Unrecognized(reason) => {
                Err(ConversionError::UnrecognizedStatus {
                    name: pipeline.name.clone(),
                    namespace: pipeline.namespace.clone(),
                    reason: reason.clone(),
                })
            }
            _ => Ok(pipeline),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{Condition, ConditionStatus};
    use crate::model::PipelineStatus as ModelStatus;

    fn sample_model() -> model::Pipeline {
        model::Pipeline {
            name: "p1".to_string(),
            description: "demo".to_string(),
            namespace: "ns".to_string(),
            uuid: "abc-123".to_string(),
            created_at_in_sec: 0,
            status: ModelStatus::Creating,
        }
    }

    #[test]
    fn test_from_model_scenario() {
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let resource = Pipeline::from_model_at(&sample_model(), at);

        assert_eq!(resource.metadata.name.as_deref(), Some("p1"));
        assert_eq!(resource.metadata.namespace.as_deref(), Some("ns"));
        assert_eq!(resource.metadata.uid.as_deref(), Some("abc-123"));
        assert!(resource.metadata.creation_timestamp.is_none());
        assert_eq!(resource.spec.description, "demo");

        let conditions = &resource.status.as_ref().unwrap().conditions;
        assert_eq!(
            conditions,
            &vec![Condition {
                r#type: "PipelineStatus".to_string(),
                status: ConditionStatus::True,
                reason: "PipelineCreating".to_string(),
                message: "PipelineCreating".to_string(),
                last_transition_time: Some("2023-11-14T22:13:20Z".to_string()),
                observed_generation: None,
            }]
        );
    }

    #[test]
    fn test_to_model_without_status_defaults_to_creating() {
        let resource = Pipeline::new("p1", PipelineSpec::default());
        let model = resource.to_model();
        assert_eq!(model.status, ModelStatus::Creating);
        assert_eq!(model.created_at_in_sec, 0);
        assert!(model.namespace.is_empty());
        assert!(model.uuid.is_empty());
    }

    #[test]
    fn test_try_to_model_rejects_unknown_reason() {
        let mut resource = Pipeline::new("p1", PipelineSpec::default());
        resource.metadata.namespace = Some("ns".to_string());
        resource.status = Some(PipelineStatus {
            conditions: vec![Condition {
                r#type: "PipelineStatus".to_string(),
                reason: "PipelineExploded".to_string(),
                ..Condition::default()
            }],
        });

        assert_eq!(
            resource.to_model().status,
            ModelStatus::Unrecognized("PipelineExploded".to_string())
        );
        assert_eq!(
            resource.try_to_model().unwrap_err(),
            ConversionError::UnrecognizedStatus {
                name: "p1".to_string(),
                namespace: "ns".to_string(),
                reason: "PipelineExploded".to_string(),
            }
        );
    }

    #[test]
    fn test_creation_instant_round_trip() {
        let mut model = sample_model();
        model.created_at_in_sec = 1_700_000_000;
        let resource = Pipeline::from_model(&model);
        assert!(resource.metadata.creation_timestamp.is_some());
        assert_eq!(resource.to_model().created_at_in_sec, 1_700_000_000);
    }

    #[test]
    fn test_pre_epoch_creation_instant_round_trip() {
        let mut model = sample_model();
        model.created_at_in_sec = -86_400;
        model.status = ModelStatus::Ready;
        let back = Pipeline::from_model(&model).to_model();
        assert_eq!(back, model);
    }

    #[test]
    fn test_unrepresentable_creation_instant_is_left_unset() {
        let mut model = sample_model();
        model.created_at_in_sec = i64::MAX;
        let resource = Pipeline::from_model(&model);
        assert!(resource.metadata.creation_timestamp.is_none());
    }

    #[test]
    fn test_empty_namespace_and_uuid_are_omitted() {
        let mut model = sample_model();
        model.namespace = String::new();
        model.uuid = String::new();

        let resource = Pipeline::from_model(&model);
        assert!(resource.metadata.namespace.is_none());
        assert!(resource.metadata.uid.is_none());

        let value = serde_json::to_value(&resource).unwrap();
        assert!(value["metadata"].get("namespace").is_none());
        assert!(value["metadata"].get("uid").is_none());

        let back = resource.to_model();
        assert!(back.namespace.is_empty());
        assert!(back.uuid.is_empty());
    }

    #[test]
    fn test_custom_codec_entry_points() {
        let codec = MarkerConditionCodec::new("Lifecycle");
        let mut model = sample_model();
        model.status = ModelStatus::Deleting;
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();

        let resource = Pipeline::from_model_with(&model, at, &codec);
        let conditions = &resource.status.as_ref().unwrap().conditions;
        assert_eq!(conditions[0].r#type, "Lifecycle");

        assert_eq!(resource.to_model_with(&codec), model);
        // The default marker finds no carrier and falls back to Creating
        assert_eq!(resource.to_model().status, ModelStatus::Creating);
    }
}
