//! Typed Opisense resources.
//!
//! - [`Site`], [`Source`]: generic routes (`<path>`, `<path>/<id>`)
//! - [`Variable`]: create and update nested under the owning source
//! - [`Account`]: the account bound to the current token
//! - [`GenericObject`]: any other resource, described at runtime
//!
//! All typed resources serialize with camelCase field names and omit unset
//! fields from the payload.

mod account;
mod generic;
mod site;
mod source;
mod variable;

pub use account::Account;
pub use generic::GenericObject;
pub use site::Site;
pub use source::Source;
pub use variable::Variable;
