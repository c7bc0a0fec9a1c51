//! Source resource.

use serde::{Deserialize, Serialize};

use crate::rest::object::{ObjectType, RemoteObject};

/// An Opisense source: a meter, sensor or any other data provider attached
/// to a site.
///
/// Sources use the generic routes: `sources` and `sources/<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The site owning this source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,

    /// European Article Number of the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_type_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<serde_json::Value>,
}

impl RemoteObject for Source {
    fn type_name(&self) -> &str {
        ObjectType::Source.name()
    }

    fn resource_path(&self) -> &str {
        ObjectType::Source.default_path()
    }

    fn object_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
