use chrono::{DateTime, Utc};
use futures::{future, FutureExt, TryFutureExt};
use serde::Serialize;
use tracing::{error, trace};

use crate::models::common::{eq_update, DashboardError, Loadable};
use crate::runtime::msg::{Action, ActionLoad, ActionRequestsFeed, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt, Update};
use crate::types::admin::ServiceRequest;
use crate::types::api::{fetch_admin_api, AdminRequest, ApiResult, RequestsResponse};

/// The recent requests log, refreshed on a fixed cadence by a
/// [`Poller`](crate::runtime::Poller). Entries keep backend arrival
/// order; a refresh keeps the shown entries until its response lands.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequestsFeed {
    pub requests: Option<Loadable<Vec<ServiceRequest>, DashboardError>>,
    pub last_updated: Option<DateTime<Utc>>,
    /// A fetch is pending; refreshes arriving meanwhile are skipped.
    #[serde(skip)]
    pub in_flight: bool,
}

impl<E: Env + 'static> Update<E> for RequestsFeed {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::RequestsFeed)) => {
                self.in_flight = true;
                let requests_effects = eq_update(&mut self.requests, Some(Loadable::Loading));
                Effects::one(get_recent_requests::<E>())
                    .unchanged()
                    .join(requests_effects)
            }
            Msg::Action(Action::RequestsFeed(ActionRequestsFeed::Refresh)) => {
                if self.in_flight {
                    trace!("Requests feed refresh skipped, a fetch is already in flight");
                    return Effects::none().unchanged();
                }
                self.in_flight = true;
                let requests_effects = if self.requests.is_none() {
                    eq_update(&mut self.requests, Some(Loadable::Loading))
                } else {
                    Effects::none().unchanged()
                };
                Effects::one(get_recent_requests::<E>())
                    .unchanged()
                    .join(requests_effects)
            }
            Msg::Action(Action::Unload) => {
                self.in_flight = false;
                let requests_effects = eq_update(&mut self.requests, None);
                let last_updated_effects = eq_update(&mut self.last_updated, None);
                requests_effects.join(last_updated_effects)
            }
            Msg::Internal(Internal::RequestsFeedResult(result)) if self.in_flight => {
                self.in_flight = false;
                match result {
                    Ok(requests) => {
                        let requests_effects = eq_update(
                            &mut self.requests,
                            Some(Loadable::Ready(requests.to_owned())),
                        );
                        let last_updated_effects =
                            eq_update(&mut self.last_updated, Some(E::now()));
                        requests_effects.join(last_updated_effects)
                    }
                    Err(error) => {
                        error!("Failed to fetch recent requests: {error}");
                        eq_update(&mut self.requests, Some(Loadable::Err(error.to_owned()))).join(
                            Effects::msg(Msg::Event(Event::RequestsFeedFetchFailed {
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

fn get_recent_requests<E: Env + 'static>() -> Effect {
    EffectFuture::Concurrent(
        fetch_admin_api::<E, RequestsResponse>(&AdminRequest::GetRecentRequests)
            .map_err(DashboardError::from)
            .and_then(|result| match result {
                ApiResult::Ok(response) => future::ok(response.requests),
                ApiResult::Err { error } => future::err(DashboardError::from(error)),
            })
            .map(|result| Msg::Internal(Internal::RequestsFeedResult(result)))
            .boxed_env(),
    )
    .into()
}
