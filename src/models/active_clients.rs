use futures::{future, FutureExt, TryFutureExt};
use serde::Serialize;
use tracing::error;

use crate::models::common::{eq_update, DashboardError, Loadable};
use crate::runtime::msg::{Action, ActionLoad, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, Update};
use crate::types::admin::Client;
use crate::types::api::{fetch_admin_api, AdminRequest, ApiResult, ClientsResponse};

/// The active clients table: one row per client, in backend order. The
/// `None`, `Err` and empty `Ready` states are the host's placeholder.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
pub struct ActiveClients {
    pub clients: Option<Loadable<Vec<Client>, DashboardError>>,
}

impl<E: Env + 'static> Update<E> for ActiveClients {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::ActiveClients)) => {
                let clients_effects = eq_update(&mut self.clients, Some(Loadable::Loading));
                Effects::one(get_all_clients::<E>())
                    .unchanged()
                    .join(clients_effects)
            }
            Msg::Action(Action::Unload) => eq_update(&mut self.clients, None),
            Msg::Internal(Internal::ActiveClientsResult(result))
                if self
                    .clients
                    .as_ref()
                    .map(|clients| clients.is_loading())
                    .unwrap_or_default() =>
            {
                match result {
                    Ok(clients) => {
                        eq_update(&mut self.clients, Some(Loadable::Ready(clients.to_owned())))
                    }
                    Err(error) => {
                        error!("Failed to fetch active clients: {error}");
                        eq_update(&mut self.clients, Some(Loadable::Err(error.to_owned()))).join(
                            Effects::msg(Msg::Event(Event::ActiveClientsFetchFailed {
                                error: error.to_owned(),
                            })),
                        )
                    }
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn get_all_clients<E: Env + 'static>() -> Effect {
    EffectFuture::Concurrent(
        fetch_admin_api::<E, ClientsResponse>(&AdminRequest::GetAllClients)
            .map_err(DashboardError::from)
            .and_then(|result| match result {
                ApiResult::Ok(response) => future::ok(response.clients),
                ApiResult::Err { error } => future::err(DashboardError::from(error)),
            })
            .map(|result| Msg::Internal(Internal::ActiveClientsResult(result)))
            .boxed_env(),
    )
    .into()
}
