//! Workspaces, usuários de workspace e dashboard

use super::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Workspace do Toggl
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admins_may_create_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admins_see_billable_rates: Option<bool>,

    /// -1 = para baixo, 0 = mais próximo, 1 = para cima
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

/// Vínculo usuário-workspace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceUser {
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Presente enquanto o convite não foi aceito
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

/// Usuários de um workspace: contas (`/users`) ou vínculos (`/workspace_users`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkspaceUsers {
    Users(Vec<User>),
    Memberships(Vec<WorkspaceUser>),
}

impl WorkspaceUsers {
    pub fn len(&self) -> usize {
        match self {
            Self::Users(users) => users.len(),
            Self::Memberships(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Contas de usuário, quando pedidas com `actual_users`
    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Users(users) => Some(users),
            Self::Memberships(_) => None,
        }
    }

    pub fn memberships(&self) -> Option<&[WorkspaceUser]> {
        match self {
            Self::Users(_) => None,
            Self::Memberships(links) => Some(links),
        }
    }
}

/// Resposta de `POST /api/v8/workspaces/{wid}/invite`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InviteResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Vec<WorkspaceUser>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub notifications: Vec<String>,
}

/// Dashboard de um workspace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub most_active_user: Vec<Value>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub activity: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invite_response_with_null_lists() {
        let response: InviteResponse =
            serde_json::from_value(json!({"data": null, "notifications": null})).unwrap();

        assert!(response.data.is_empty());
        assert!(response.notifications.is_empty());
    }

    #[test]
    fn test_workspace_users_serialize_as_list() {
        let users = WorkspaceUsers::Users(vec![User {
            id: Some(1),
            fullname: Some("John Swift".to_string()),
            ..Default::default()
        }]);

        assert_eq!(users.len(), 1);
        assert!(users.memberships().is_none());
        assert_eq!(
            serde_json::to_value(&users).unwrap(),
            json!([{"id": 1, "fullname": "John Swift"}])
        );
    }
}
