use http::Request;
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::constants::{ADMIN_API_URL, URI_COMPONENT_ENCODE_SET};
use crate::runtime::{ConditionalSend, Env, TryEnvFuture};
use crate::types::api::{AdminRequest, ApiResult};

pub fn fetch_admin_api<
    E: Env,
    RESP: for<'de> Deserialize<'de> + ConditionalSend + 'static,
>(
    api_request: &AdminRequest,
) -> TryEnvFuture<ApiResult<RESP>> {
    match api_request {
        AdminRequest::GetAllClients | AdminRequest::GetRecentRequests => {
            let mut url = ADMIN_API_URL.to_owned();
            let action = utf8_percent_encode(api_request.action_name(), URI_COMPONENT_ENCODE_SET);
            url.set_query(Some(&format!("action={action}")));
            let request = Request::get(url.as_str())
                .body(())
                .expect("request builder failed");
            E::fetch(request)
        }
        AdminRequest::SendAdminNotification { .. } => {
            // text/plain keeps the request CORS-simple; the backend
            // parses the JSON body itself.
            let request = Request::post(ADMIN_API_URL.as_str())
                .header(http::header::CONTENT_TYPE, "text/plain;charset=utf-8")
                .body(api_request.to_owned())
                .expect("request builder failed");
            E::fetch(request)
        }
    }
}
