//! Variable resource.
//!
//! Variables are time series owned by a source. Unlike other objects they are
//! created and updated through routes nested under their source:
//!
//! - create: `variables/source/<source id>`
//! - update: `sources/<source id>/variables/<id>`
//!
//! Delete uses the generic `variables/<id>` route. The source id is always
//! taken from the `parent_id` given to the dispatcher, never from
//! [`Variable::source_id`].

use serde::{Deserialize, Serialize};

use crate::rest::errors::PathError;
use crate::rest::object::{ObjectType, RemoteObject};
use crate::rest::path::{encode_segment, require_object_id, ResourceOperation, ResourceRoute};

/// An Opisense variable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// The unique identifier of the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The owning source, as reported by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variable type (e.g. active energy, temperature).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_type_id: Option<u64>,

    /// Unit of the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<u64>,

    /// Number of time base units between two values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<u32>,

    /// Time base of the granularity (e.g. `Minute`, `Hour`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity_time_base: Option<String>,

    /// Aggregation semantics (e.g. `Averaged`, `Integrated`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_type: Option<String>,

    /// Import mapping configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_config: Option<String>,
}

impl Variable {
    fn missing_parent(operation: ResourceOperation) -> PathError {
        PathError::MissingParentId {
            object_type: ObjectType::Variable.name().to_string(),
            operation,
        }
    }
}

impl RemoteObject for Variable {
    fn type_name(&self) -> &str {
        ObjectType::Variable.name()
    }

    fn resource_path(&self) -> &str {
        ObjectType::Variable.default_path()
    }

    fn object_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn create_route(&self, parent_id: Option<&str>) -> Result<ResourceRoute, PathError> {
        let source_id = parent_id.ok_or_else(|| Self::missing_parent(ResourceOperation::Create))?;
        Ok(ResourceRoute::Nested(format!(
            "variables/source/{}",
            encode_segment(source_id)
        )))
    }

    fn update_route(&self, parent_id: Option<&str>) -> Result<ResourceRoute, PathError> {
        let source_id = parent_id.ok_or_else(|| Self::missing_parent(ResourceOperation::Update))?;
        let id = require_object_id(self, ResourceOperation::Update)?;
        Ok(ResourceRoute::Nested(format!(
            "sources/{}/variables/{}",
            encode_segment(source_id),
            encode_segment(&id)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_route_is_nested_under_source() {
        let variable = Variable::default();
        assert_eq!(
            variable.create_route(Some("42")).unwrap(),
            ResourceRoute::Nested("variables/source/42".to_string())
        );
    }

    #[test]
    fn test_update_route_checks_parent_before_id() {
        let variable = Variable::default();
        assert!(matches!(
            variable.update_route(None),
            Err(PathError::MissingParentId { .. })
        ));
    }

    #[test]
    fn test_source_id_field_does_not_stand_in_for_parent() {
        let variable = Variable {
            source_id: Some(42),
            ..Variable::default()
        };
        assert!(variable.create_route(None).is_err());
    }

    #[test]
    fn test_variable_payload() {
        let variable = Variable {
            name: Some("Active energy".to_string()),
            unit_id: Some(8),
            granularity: Some(15),
            granularity_time_base: Some("Minute".to_string()),
            ..Variable::default()
        };

        let payload = variable.to_payload().unwrap();
        assert_eq!(payload["granularityTimeBase"], "Minute");
        assert_eq!(payload["unitId"], 8);
        assert!(payload.get("id").is_none());
    }
}
