use serde::{Deserialize, Serialize};

/// Tag de um workspace
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}
