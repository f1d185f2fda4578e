use serde::{Deserialize, Serialize};

use crate::values::ServerCode;

/// Entry of the upstream server list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "ServerCode")]
    pub code: ServerCode,
    #[serde(rename = "ServerName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ServerRegion", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "IsActive", default)]
    pub is_active: bool,
}

impl ServerInfo {
    pub fn new(code: impl Into<ServerCode>, is_active: bool) -> Self {
        Self {
            code: code.into(),
            name: None,
            region: None,
            is_active,
        }
    }
}
