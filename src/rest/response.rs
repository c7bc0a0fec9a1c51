//! Read output selection.

use crate::clients::HttpResponse;

/// How a read should hand back its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The raw response, whatever its status or body.
    #[default]
    Raw,
    /// The body decoded as JSON.
    Json,
}

/// The result of [`Dispatcher::read`](crate::rest::Dispatcher::read).
#[derive(Clone, Debug)]
pub enum ReadOutput {
    /// The raw response.
    Raw(HttpResponse),
    /// The decoded body.
    Json(serde_json::Value),
}

impl ReadOutput {
    /// Returns the raw response, if this output is raw.
    #[must_use]
    pub fn into_raw(self) -> Option<HttpResponse> {
        match self {
            Self::Raw(response) => Some(response),
            Self::Json(_) => None,
        }
    }

    /// Returns the decoded body, if this output is decoded.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_format_is_raw() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Raw);
    }

    #[test]
    fn test_output_accessors() {
        let raw = ReadOutput::Raw(HttpResponse::new(200, HashMap::new(), "[]".to_string()));
        assert!(raw.clone().into_json().is_none());
        assert_eq!(raw.into_raw().map(|r| r.code), Some(200));

        let json = ReadOutput::Json(serde_json::json!([1, 2]));
        assert_eq!(json.into_json(), Some(serde_json::json!([1, 2])));
    }
}
