use chrono::{TimeZone, Utc};

use crate::types::admin::{NotificationDraft, ServiceRequest};
use crate::types::api::{
    AdminRequest, ApiError, ApiResult, ClientsResponse, DeliveryResponse,
};

#[test]
fn send_admin_notification_wire_format() {
    let request = AdminRequest::send_admin_notification(
        "C1".to_owned(),
        NotificationDraft {
            title: "Pickup scheduled".to_owned(),
            body: "The crew arrives tomorrow at 08:00".to_owned(),
        },
    );
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"action":"sendAdminNotification","clientId":"C1","title":"Pickup scheduled","body":"The crew arrives tomorrow at 08:00"}"#,
        "The POST body is the tagged action payload"
    );
}

#[test]
fn read_action_names() {
    assert_eq!(AdminRequest::GetAllClients.action_name(), "getAllClients");
    assert_eq!(
        AdminRequest::GetRecentRequests.action_name(),
        "getRecentRequests"
    );
}

#[test]
fn error_payload_wins_over_the_result() {
    let result: ApiResult<ClientsResponse> =
        serde_json::from_str(r#"{"error":"No such action"}"#).unwrap();
    assert_eq!(
        result,
        ApiResult::Err {
            error: ApiError {
                message: "No such action".to_owned(),
            },
        }
    );
}

#[test]
fn clients_payload_deserializes() {
    let result: ApiResult<ClientsResponse> = serde_json::from_str(
        r#"{"clients":[{"clientId":"C1","clientName":"Acme","address":"1 Example St","daysOnSite":12}]}"#,
    )
    .unwrap();
    match result {
        ApiResult::Ok(response) => {
            assert_eq!(response.clients.len(), 1);
            assert_eq!(response.clients[0].client_id, "C1");
            assert_eq!(response.clients[0].client_name, "Acme");
            assert_eq!(response.clients[0].days_on_site, 12);
        }
        ApiResult::Err { error } => panic!("Expected clients, got error: {error}"),
    }
}

#[test]
fn service_request_timestamp_parses() {
    let request: ServiceRequest = serde_json::from_str(
        r#"{"type":"pickup","clientName":"Acme","timestamp":"2024-05-04T08:30:00Z"}"#,
    )
    .unwrap();
    assert_eq!(request.r#type, "pickup");
    assert_eq!(
        request.timestamp,
        Utc.with_ymd_and_hms(2024, 5, 4, 8, 30, 0).unwrap()
    );
}

#[test]
fn delivery_response_statuses() {
    let accepted: DeliveryResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert!(accepted.is_success());
    assert_eq!(accepted.message, None);

    let rejected: DeliveryResponse =
        serde_json::from_str(r#"{"status":"error","message":"Push token expired"}"#).unwrap();
    assert!(!rejected.is_success());
    assert_eq!(rejected.message, Some("Push token expired".to_owned()));
}
