//! Account resource.

use serde::{Deserialize, Serialize};

use crate::rest::object::{ObjectType, RemoteObject};

/// The account bound to a token, read from `account`.
///
/// Fields other than `id` and `name` are kept in [`Account::extra`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RemoteObject for Account {
    fn type_name(&self) -> &str {
        ObjectType::Account.name()
    }

    fn resource_path(&self) -> &str {
        ObjectType::Account.default_path()
    }

    fn object_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
