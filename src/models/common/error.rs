use std::fmt;

use derive_more::From;
use serde::Serialize;

use crate::runtime::EnvError;
use crate::types::api::ApiError;

/// Failure of one dashboard flow: the backend reported an error, or the
/// environment failed to fetch or parse.
#[derive(Clone, PartialEq, From, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum DashboardError {
    API(ApiError),
    Env(EnvError),
}

impl DashboardError {
    pub fn message(&self) -> String {
        match &self {
            DashboardError::API(error) => error.message.to_owned(),
            DashboardError::Env(error) => error.message(),
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            DashboardError::API(error) => write!(f, "API: {error}"),
            DashboardError::Env(error) => write!(f, "Env: {error}"),
        }
    }
}
