//! The [`RemoteObject`] trait and the platform's object kinds.
//!
//! Every object the dispatcher can write implements [`RemoteObject`]. The
//! trait exposes the object's identity and resource path, and two routing
//! hooks with generic defaults. Objects with nested routes override the hooks
//! instead of being special-cased in the dispatcher.

use std::fmt;

use serde::Serialize;

use crate::rest::errors::PathError;
use crate::rest::path::{require_object_id, ResourceOperation, ResourceRoute};

/// Object kinds known to the Opisense platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// The account bound to the current token.
    Account,
    /// A physical site.
    Site,
    /// A data source (meter, sensor, ...) attached to a site.
    Source,
    /// A variable (time series) owned by a source.
    Variable,
}

impl ObjectType {
    /// Returns the singular type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Site => "site",
            Self::Source => "source",
            Self::Variable => "variable",
        }
    }

    /// Returns the default resource path.
    #[must_use]
    pub const fn default_path(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Site => "sites",
            Self::Source => "sources",
            Self::Variable => "variables",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An object that can be written to the Opisense API.
///
/// The serialized form of the object is the request payload.
///
/// # Routing hooks
///
/// [`create_route`](Self::create_route) and [`update_route`](Self::update_route)
/// decide the route shape and check the identifiers the route needs. The
/// defaults address the object by its own resource path and id. Delete is
/// always addressed by the object's id and has no hook.
///
/// # Example
///
/// ```rust
/// use opisense_client::rest::{resolve_path, RemoteObject, ResourceOperation};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Alarm {
///     id: Option<u64>,
///     name: String,
/// }
///
/// impl RemoteObject for Alarm {
///     fn type_name(&self) -> &str {
///         "alarm"
///     }
///
///     fn resource_path(&self) -> &str {
///         "alarms"
///     }
///
///     fn object_id(&self) -> Option<String> {
///         self.id.map(|id| id.to_string())
///     }
/// }
///
/// let alarm = Alarm { id: Some(4), name: "Overheat".to_string() };
/// assert_eq!(
///     resolve_path(&alarm, ResourceOperation::Update, None, None).unwrap(),
///     "alarms/4"
/// );
/// ```
pub trait RemoteObject: Serialize + Send + Sync {
    /// The singular type name, used in error messages.
    fn type_name(&self) -> &str;

    /// The default resource path (e.g. `sites`).
    fn resource_path(&self) -> &str;

    /// The object's id, if it has one.
    fn object_id(&self) -> Option<String>;

    /// Chooses the create route.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if an identifier the route needs is missing.
    fn create_route(&self, _parent_id: Option<&str>) -> Result<ResourceRoute, PathError> {
        Ok(ResourceRoute::Collection)
    }

    /// Chooses the update route.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if an identifier the route needs is missing.
    fn update_route(&self, _parent_id: Option<&str>) -> Result<ResourceRoute, PathError> {
        require_object_id(self, ResourceOperation::Update).map(ResourceRoute::Member)
    }

    /// Serializes the object into its request payload.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if the object cannot be represented as JSON.
    fn to_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
