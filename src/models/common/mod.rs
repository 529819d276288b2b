mod eq_update;
pub use eq_update::*;

mod error;
pub use error::*;

mod loadable;
pub use loadable::*;
