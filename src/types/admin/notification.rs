use serde::{Deserialize, Serialize};

/// Content of the composer form; paired with the selected client on send.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct NotificationDraft {
    pub title: String,
    pub body: String,
}
