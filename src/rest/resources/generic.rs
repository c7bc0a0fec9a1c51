//! Free-form resource.
//!
//! [`GenericObject`] addresses any Opisense resource without a dedicated
//! type. It carries its type name, resource path, optional id and JSON fields.

use serde::{Deserialize, Serialize};

use crate::rest::object::RemoteObject;

/// A resource described at runtime.
///
/// The payload is the `id` (when set) followed by the fields.
///
/// # Example
///
/// ```rust
/// use opisense_client::rest::resources::GenericObject;
/// use opisense_client::rest::{resolve_path, ResourceOperation};
///
/// let form = GenericObject::new("form", "forms")
///     .with_id("abc")
///     .with_field("title", "Monthly readings");
///
/// assert_eq!(
///     resolve_path(&form, ResourceOperation::Update, None, None).unwrap(),
///     "forms/abc"
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenericObject {
    #[serde(skip)]
    type_name: String,

    #[serde(skip)]
    resource_path: String,

    /// The object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The object fields.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl GenericObject {
    /// Creates an object of type `type_name` living under `resource_path`.
    #[must_use]
    pub fn new(type_name: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            resource_path: resource_path.into(),
            id: None,
            fields: serde_json::Map::new(),
        }
    }

    /// Sets the object id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl RemoteObject for GenericObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn object_id(&self) -> Option<String> {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_contains_id_and_fields_only() {
        let object = GenericObject::new("meter", "meters")
            .with_id("abc")
            .with_field("label", "Boiler")
            .with_field("active", true);

        assert_eq!(
            object.to_payload().unwrap(),
            serde_json::json!({"id": "abc", "label": "Boiler", "active": true})
        );
    }

    #[test]
    fn test_type_name_and_path() {
        let object = GenericObject::new("meter", "meters");
        assert_eq!(object.type_name(), "meter");
        assert_eq!(object.resource_path(), "meters");
        assert_eq!(object.object_id(), None);
    }
}
