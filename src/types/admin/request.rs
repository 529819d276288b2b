use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the recent requests log, kept in backend arrival order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub r#type: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}
