//! Resource access for the Opisense API.
//!
//! This module resolves resource routes and dispatches reads and writes:
//!
//! - [`Dispatcher`]: `get`, `get_json`, `read`, `create`, `update`, `delete`
//! - [`resolve_path`] and [`ResourceOperation`]: route resolution
//! - [`RemoteObject`]: the trait every writable object implements
//! - [`ApiFilter`]: read targets with repeated-key query filters
//! - [`ResponseFormat`], [`ReadOutput`]: raw or decoded reads
//! - [`PathError`], [`DispatchError`]: error types
//! - [`resources`]: typed Opisense resources
//!
//! # Example
//!
//! ```rust,ignore
//! use opisense_client::rest::{ApiFilter, Dispatcher, ResponseFormat};
//! use opisense_client::rest::resources::{Site, Source};
//!
//! let dispatcher = Dispatcher::new(&config)?;
//!
//! let sites: Vec<Site> = dispatcher.get_json(&token, &ApiFilter::new("sites")).await?;
//!
//! let source = Source {
//!     site_id: sites[0].id,
//!     name: Some("Main meter".to_string()),
//!     ..Source::default()
//! };
//! let response = dispatcher.create(&source, &token, None, None).await?;
//! if !response.is_ok() {
//!     eprintln!("create rejected: {} {}", response.code, response.text());
//! }
//! ```

mod dispatcher;
mod errors;
mod filter;
mod object;
mod path;
pub mod resources;
mod response;

pub use dispatcher::Dispatcher;
pub use errors::{DispatchError, PathError};
pub use filter::ApiFilter;
pub use object::{ObjectType, RemoteObject};
pub use path::{
    encode_segment, require_object_id, resolve_path, ResourceOperation, ResourceRoute,
};
pub use response::{ReadOutput, ResponseFormat};
