mod client;
pub use client::*;

mod notification;
pub use notification::*;

mod request;
pub use request::*;
