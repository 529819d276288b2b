use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use url::Url;

/// Cadence on which the recent requests feed is refreshed.
pub const RECENT_REQUESTS_POLL_INTERVAL: Duration = Duration::from_secs(15);
/// Delivery status the backend reports for an accepted notification.
pub const DELIVERY_SUCCESS_STATUS: &str = "success";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref ADMIN_API_URL: Url = Url::parse(
        "https://script.google.com/macros/s/AKfycbyKeDJI-bLYcpnqo3-iTz0ZlA-Zg_EDPLSPFtGcNIRjkf1QZojGiwaxZZwzYo007nEaoQ/exec"
    )
    .expect("ADMIN_API_URL parse failed");
}
