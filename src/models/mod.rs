pub mod active_clients;
pub mod common;
pub mod notification_composer;
pub mod requests_feed;
