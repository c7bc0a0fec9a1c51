//! Site resource.
//!
//! A site is a physical location (building, plant, campus) that owns sources.
//! Sites use the generic routes: `sites` and `sites/<id>`.

use serde::{Deserialize, Serialize};

use crate::rest::object::{ObjectType, RemoteObject};

/// An Opisense site.
///
/// # Example
///
/// ```rust
/// use opisense_client::rest::resources::Site;
///
/// let site = Site {
///     name: Some("Brussels HQ".to_string()),
///     city: Some("Brussels".to_string()),
///     ..Site::default()
/// };
/// let payload = serde_json::to_value(&site).unwrap();
/// assert_eq!(payload["name"], "Brussels HQ");
/// assert!(payload.get("id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// The unique identifier of the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Street and number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Time zone identifier (e.g. `Romance Standard Time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_id: Option<String>,

    /// Site type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,

    /// Free-form client data attached to the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_data: Option<serde_json::Value>,
}

impl RemoteObject for Site {
    fn type_name(&self) -> &str {
        ObjectType::Site.name()
    }

    fn resource_path(&self) -> &str {
        ObjectType::Site.default_path()
    }

    fn object_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
