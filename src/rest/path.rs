//! Path resolution for Opisense resources.
//!
//! [`resolve_path`] is the single place that turns an object, an operation
//! and the optional parent id and forced path into the relative URL path of a
//! resource call. It is pure and performs no I/O.
//!
//! # Routes
//!
//! | Object   | Operation | Route                              |
//! |----------|-----------|------------------------------------|
//! | any      | read      | `<path>`                           |
//! | generic  | create    | `<path>`                           |
//! | generic  | update    | `<path>/<id>`                      |
//! | any      | delete    | `<path>/<id>`                      |
//! | variable | create    | `variables/source/<parent id>`     |
//! | variable | update    | `sources/<parent id>/variables/<id>` |
//!
//! `<path>` is the object's resource path, replaced by the forced path when
//! one is given. A forced path replaces the variable nested routes verbatim.
//!
//! Identifiers are trimmed and percent-encoded as single path segments, so an
//! id can never step outside its resource path or start a query string.
//!
//! # Example
//!
//! ```rust
//! use opisense_client::rest::{resolve_path, ResourceOperation};
//! use opisense_client::rest::resources::{Site, Variable};
//!
//! let site = Site { id: Some(12), ..Site::default() };
//! assert_eq!(
//!     resolve_path(&site, ResourceOperation::Update, None, None).unwrap(),
//!     "sites/12"
//! );
//!
//! let variable = Variable::default();
//! assert_eq!(
//!     resolve_path(&variable, ResourceOperation::Create, Some("42"), None).unwrap(),
//!     "variables/source/42"
//! );
//! ```

use std::fmt;

use crate::clients::HttpMethod;
use crate::rest::errors::PathError;
use crate::rest::object::RemoteObject;

/// Operations that can be performed on an Opisense resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List or fetch resources (GET).
    Read,
    /// Create a new resource (POST).
    Create,
    /// Update an existing resource (PUT).
    Update,
    /// Delete a resource (DELETE).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method used for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Read => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a route chosen by an object's routing hooks.
///
/// The resource path itself is filled in by [`resolve_path`] so that a forced
/// path applies uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute {
    /// The resource path alone.
    Collection,
    /// The resource path followed by `/<id>`.
    Member(String),
    /// A fully formed route that does not start from the resource path.
    Nested(String),
}

impl ResourceRoute {
    fn render(self, resource_path: &str, force_path: Option<&str>) -> String {
        match self {
            Self::Collection => force_path.unwrap_or(resource_path).to_string(),
            Self::Member(id) => {
                let base = force_path.unwrap_or(resource_path).trim_end_matches('/');
                format!("{base}/{}", encode_segment(&id))
            }
            Self::Nested(route) => force_path.map_or(route, str::to_string),
        }
    }
}

/// Returns the trimmed `value` if it holds something other than whitespace.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Percent-encodes an identifier for use as one path segment.
///
/// ```rust
/// use opisense_client::rest::encode_segment;
///
/// assert_eq!(encode_segment("42"), "42");
/// assert_eq!(encode_segment("../sites/9"), "..%2Fsites%2F9");
/// ```
#[must_use]
pub fn encode_segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}

/// Returns the object's trimmed id or a [`PathError::MissingObjectId`] for
/// `operation`. The id is not encoded.
///
/// # Errors
///
/// Returns [`PathError::MissingObjectId`] if the object has no id or an empty one.
pub fn require_object_id<O: RemoteObject + ?Sized>(
    object: &O,
    operation: ResourceOperation,
) -> Result<String, PathError> {
    object
        .object_id()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PathError::MissingObjectId {
            object_type: object.type_name().to_string(),
            operation,
        })
}

/// Resolves the relative path for `operation` on `object`.
///
/// Preconditions are checked before anything else. Blank identifiers count as
/// missing, and so does a blank forced path.
///
/// # Errors
///
/// - [`PathError::MissingParentId`] if the route needs a parent id and none is given
/// - [`PathError::MissingObjectId`] if the route needs the object's id and it has none
pub fn resolve_path<O: RemoteObject>(
    object: &O,
    operation: ResourceOperation,
    parent_id: Option<&str>,
    force_path: Option<&str>,
) -> Result<String, PathError> {
    let parent_id = present(parent_id);
    let route = match operation {
        ResourceOperation::Read => ResourceRoute::Collection,
        ResourceOperation::Create => object.create_route(parent_id)?,
        ResourceOperation::Update => object.update_route(parent_id)?,
        ResourceOperation::Delete => {
            ResourceRoute::Member(require_object_id(object, ResourceOperation::Delete)?)
        }
    };
    Ok(route.render(object.resource_path(), present(force_path)))
}
