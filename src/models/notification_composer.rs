use futures::{future, FutureExt, TryFutureExt};
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::models::common::{eq_update, DashboardError, Loadable};
use crate::runtime::msg::{Action, ActionComposer, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, Update};
use crate::types::admin::{ClientId, NotificationDraft};
use crate::types::api::{fetch_admin_api, AdminRequest, ApiError, ApiResult, DeliveryResponse};

/// The client the composer is addressing; set from the clicked row.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub client_id: ClientId,
    pub client_name: String,
}

/// The notification modal. `selected == None` is the hidden state;
/// `delivery` is `Loading` exactly while the submit control is busy.
/// A delivery failure keeps the composer open; success closes it.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct NotificationComposer {
    pub selected: Option<Selected>,
    pub delivery: Option<Loadable<(), DashboardError>>,
}

impl NotificationComposer {
    pub fn is_sending(&self) -> bool {
        self.delivery
            .as_ref()
            .map(|delivery| delivery.is_loading())
            .unwrap_or_default()
    }
}

impl<E: Env + 'static> Update<E> for NotificationComposer {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Composer(ActionComposer::Open(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let delivery_effects = eq_update(&mut self.delivery, None);
                selected_effects.join(delivery_effects)
            }
            Msg::Action(Action::Composer(ActionComposer::Close))
            | Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let delivery_effects = eq_update(&mut self.delivery, None);
                selected_effects.join(delivery_effects)
            }
            Msg::Action(Action::Composer(ActionComposer::Send(draft))) => match &self.selected {
                Some(selected) => {
                    let delivery_effects = eq_update(&mut self.delivery, Some(Loadable::Loading));
                    Effects::one(send_notification::<E>(
                        selected.client_id.to_owned(),
                        draft.to_owned(),
                    ))
                    .unchanged()
                    .join(delivery_effects)
                }
                _ => {
                    trace!("Send ignored, the composer is hidden");
                    Effects::none().unchanged()
                }
            },
            Msg::Internal(Internal::NotificationDeliveryResult(client_id, result))
                if self.is_sending()
                    && self
                        .selected
                        .as_ref()
                        .map(|selected| selected.client_id == *client_id)
                        .unwrap_or_default() =>
            {
                match result {
                    Ok(_) => {
                        let selected_effects = eq_update(&mut self.selected, None);
                        let delivery_effects = eq_update(&mut self.delivery, None);
                        selected_effects.join(delivery_effects).join(Effects::msg(
                            Msg::Event(Event::NotificationSent {
                                client_id: client_id.to_owned(),
                            }),
                        ))
                    }
                    Err(error) => {
                        error!("Failed to send notification to {client_id}: {error}");
                        eq_update(&mut self.delivery, Some(Loadable::Err(error.to_owned())))
                            .join(Effects::msg(Msg::Event(Event::NotificationFailed {
                                client_id: client_id.to_owned(),
                                error: error.to_owned(),
                            })))
                    }
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn send_notification<E: Env + 'static>(client_id: ClientId, draft: NotificationDraft) -> Effect {
    let request = AdminRequest::send_admin_notification(client_id.to_owned(), draft);
    EffectFuture::Concurrent(
        fetch_admin_api::<E, DeliveryResponse>(&request)
            .map_err(DashboardError::from)
            .and_then(|result| match result {
                ApiResult::Ok(response) if response.is_success() => future::ok(()),
                ApiResult::Ok(response) => {
                    let message = response.message.unwrap_or_else(|| {
                        format!("Delivery failed with status \"{}\"", response.status)
                    });
                    future::err(DashboardError::from(ApiError { message }))
                }
                ApiResult::Err { error } => future::err(DashboardError::from(error)),
            })
            .map(move |result| Msg::Internal(Internal::NotificationDeliveryResult(client_id, result)))
            .boxed_env(),
    )
    .into()
}
