use serde::Serialize;

use crate::models::common::DashboardError;
use crate::types::admin::ClientId;

///
/// Those messages are meant to be dispatched by the crate and handled
/// by its users — the host surfaces them to the operator.
///
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    NotificationSent { client_id: ClientId },
    #[serde(rename_all = "camelCase")]
    NotificationFailed {
        client_id: ClientId,
        error: DashboardError,
    },
    ActiveClientsFetchFailed { error: DashboardError },
    RequestsFeedFetchFailed { error: DashboardError },
}
