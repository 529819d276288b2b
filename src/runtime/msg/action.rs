use serde::Deserialize;

use crate::models::notification_composer::Selected as ComposerSelected;
use crate::types::admin::NotificationDraft;

#[derive(Clone, Deserialize, Debug)]
pub enum ActionLoad {
    ActiveClients,
    RequestsFeed,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionRequestsFeed {
    /// Fetch the feed again, keeping the currently shown entries until
    /// the response lands. Skipped while a fetch is already in flight.
    Refresh,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionComposer {
    /// Open the composer for one client; fired from the row's notify control.
    Open(ComposerSelected),
    Close,
    /// Submit the composed notification to the selected client.
    Send(NotificationDraft),
}

///
/// Those messages are meant to be dispatched by the users of the crate
/// and handled by the crate.
///
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Load(ActionLoad),
    RequestsFeed(ActionRequestsFeed),
    Composer(ActionComposer),
    Unload,
}
