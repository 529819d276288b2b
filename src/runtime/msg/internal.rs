use crate::models::common::DashboardError;
use crate::types::admin::{Client, ClientId, ServiceRequest};

//
// Those messages are meant to be dispatched and handled only inside the crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result for the active clients read.
    ActiveClientsResult(Result<Vec<Client>, DashboardError>),
    /// Result for a requests feed read, initial load or poll refresh alike.
    RequestsFeedResult(Result<Vec<ServiceRequest>, DashboardError>),
    /// Result for a notification delivery, keyed by the addressed client.
    NotificationDeliveryResult(ClientId, Result<(), DashboardError>),
}
