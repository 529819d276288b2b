use serde::{Deserialize, Serialize};

pub type ClientId = String;

/// One active client as reported by the backend. Identity is `client_id`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: ClientId,
    pub client_name: String,
    pub address: String,
    pub days_on_site: u32,
}
