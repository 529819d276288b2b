mod fetch_admin;
pub use fetch_admin::*;

mod request;
pub use request::*;

mod response;
pub use response::*;
