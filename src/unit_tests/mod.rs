use futures::channel::mpsc::Receiver;

use crate::runtime::msg::Event;
use crate::runtime::{Env, Model, RuntimeEvent};

mod env;
pub use env::*;

mod active_clients;
mod notification_composer;
mod poller;
mod requests_feed;
mod serde;

/// Drains the runtime channel, keeping only the core events.
pub fn core_events<E: Env, M: Model<E>>(rx: &mut Receiver<RuntimeEvent<E, M>>) -> Vec<Event> {
    let mut events = vec![];
    while let Ok(Some(event)) = rx.try_next() {
        if let RuntimeEvent::CoreEvent(event) = event {
            events.push(event);
        }
    }
    events
}
