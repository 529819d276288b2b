use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DELIVERY_SUCCESS_STATUS;
use crate::types::admin::{Client, ServiceRequest};

/// Any response may carry an `error` field instead of the payload; the
/// error variant comes first so such a payload is treated as a failure.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiResult<T> {
    Err { error: ApiError },
    Ok(T),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct ApiError {
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ClientsResponse {
    pub clients: Vec<Client>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RequestsResponse {
    pub requests: Vec<ServiceRequest>,
}

/// Outcome of a notification POST. Anything but the success status is a
/// failure, with `message` carrying the reason when the backend sent one.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DeliveryResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeliveryResponse {
    pub fn is_success(&self) -> bool {
        self.status == DELIVERY_SUCCESS_STATUS
    }
}
