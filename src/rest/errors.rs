//! Error types for resource operations.
//!
//! Two tiers are kept apart:
//!
//! - [`PathError`]: a precondition violation found while resolving the route,
//!   raised before any network call
//! - [`DispatchError`]: everything a dispatcher call can fail with, including
//!   transport and decoding failures
//!
//! A non-2xx status is not an error at this layer. The response is returned
//! and the caller inspects [`HttpResponse::code`](crate::clients::HttpResponse::code).
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::rest::{DispatchError, PathError};
//!
//! match dispatcher.create(&variable, &token, None, None).await {
//!     Ok(response) if response.is_ok() => println!("created"),
//!     Ok(response) => println!("rejected with {}", response.code),
//!     Err(DispatchError::Precondition(PathError::MissingParentId { .. })) => {
//!         println!("a source id is required");
//!     }
//!     Err(e) => println!("call failed: {e}"),
//! }
//! ```

use crate::clients::{DecodeError, HttpError};
use crate::rest::path::ResourceOperation;
use thiserror::Error;

/// A route could not be resolved because an identifier is missing.
///
/// # Example
///
/// ```rust
/// use opisense_client::rest::{PathError, ResourceOperation};
///
/// let error = PathError::MissingParentId {
///     object_type: "variable".to_string(),
///     operation: ResourceOperation::Create,
/// };
/// assert_eq!(
///     error.to_string(),
///     "A parent source id is required to create a variable"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The route is nested under a parent and no parent id was given.
    #[error("A parent source id is required to {operation} a {object_type}")]
    MissingParentId {
        /// The type name of the object.
        object_type: String,
        /// The operation being attempted.
        operation: ResourceOperation,
    },

    /// The route addresses the object by id and the object has none.
    #[error("An object id is required to {operation} a {object_type}")]
    MissingObjectId {
        /// The type name of the object.
        object_type: String,
        /// The operation being attempted.
        operation: ResourceOperation,
    },

    /// A read was requested without a resource path.
    #[error("A resource path is required to read")]
    EmptyReadPath,

    /// A read path carries its own query string; filters belong in the filter.
    #[error("The read path '{path}' contains a query string; use filter values instead")]
    QueryInReadPath {
        /// The offending path.
        path: String,
    },
}

/// Error type for dispatcher calls.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required identifier was missing. No request was sent.
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PathError),

    /// The request could not be sent or its response could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A decoded body was requested and the body is not valid JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The object could not be serialized into a payload.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DispatchError {
    /// Returns `true` if this error was raised before any network call.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_object_id_message() {
        let error = PathError::MissingObjectId {
            object_type: "site".to_string(),
            operation: ResourceOperation::Delete,
        };
        assert_eq!(error.to_string(), "An object id is required to delete a site");
    }

    #[test]
    fn test_precondition_wraps_path_error() {
        let error: DispatchError = PathError::MissingParentId {
            object_type: "variable".to_string(),
            operation: ResourceOperation::Update,
        }
        .into();

        assert!(error.is_precondition());
        assert!(error.to_string().starts_with("Precondition violated"));
    }

    #[test]
    fn test_decode_error_is_not_precondition() {
        let error: DispatchError = DecodeError::EmptyBody { status: 204 }.into();
        assert!(!error.is_precondition());
        assert!(matches!(error, DispatchError::Decode(_)));
    }

    #[test]
    fn test_dispatch_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DispatchError>();
        assert_send_sync::<PathError>();
    }
}
