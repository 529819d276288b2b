use serde::Serialize;

use crate::types::admin::{ClientId, NotificationDraft};

/// Requests to the admin backend. The serialized form is the POST wire
/// payload; reads go out as `?action=<name>` queries instead.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum AdminRequest {
    GetAllClients,
    GetRecentRequests,
    #[serde(rename_all = "camelCase")]
    SendAdminNotification {
        client_id: ClientId,
        title: String,
        body: String,
    },
}

impl AdminRequest {
    pub fn action_name(&self) -> &'static str {
        match self {
            AdminRequest::GetAllClients => "getAllClients",
            AdminRequest::GetRecentRequests => "getRecentRequests",
            AdminRequest::SendAdminNotification { .. } => "sendAdminNotification",
        }
    }
    pub fn send_admin_notification(client_id: ClientId, draft: NotificationDraft) -> Self {
        AdminRequest::SendAdminNotification {
            client_id,
            title: draft.title,
            body: draft.body,
        }
    }
}
