use std::any::Any;

use chrono::{TimeZone, Utc};
use futures::future;

use crate::constants::ADMIN_API_URL;
use crate::model::AdminDashboard;
use crate::models::common::{DashboardError, Loadable};
use crate::models::requests_feed::RequestsFeed;
use crate::runtime::msg::{Action, ActionLoad, ActionRequestsFeed, Event, Internal, Msg};
use crate::runtime::{EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture, Update};
use crate::types::admin::ServiceRequest;
use crate::types::api::{ApiError, ApiResult, RequestsResponse};
use crate::unit_tests::{
    core_events, default_fetch_handler, Request, TestEnv, FETCH_HANDLER, NOW, REQUESTS,
};

fn service_request(r#type: &str, client_name: &str) -> ServiceRequest {
    ServiceRequest {
        r#type: r#type.to_owned(),
        client_name: client_name.to_owned(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 4, 8, 30, 0).unwrap(),
    }
}

fn requests_url() -> String {
    format!("{}?action=getRecentRequests", ADMIN_API_URL.as_str())
}

#[test]
fn load_recent_requests() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request {
                url, method, body, ..
            } if url == requests_url() && method == "GET" && body == "null" => {
                future::ok(Box::new(ApiResult::Ok(RequestsResponse {
                    requests: vec![
                        service_request("pickup", "Acme"),
                        service_request("swap", "Globex"),
                    ],
                })) as Box<dyn Any + Send>)
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::RequestsFeed),
        })
    });
    let model = runtime.model().unwrap();
    let requests_feed = &model.requests_feed;
    assert_eq!(
        requests_feed.requests,
        Some(Loadable::Ready(vec![
            service_request("pickup", "Acme"),
            service_request("swap", "Globex"),
        ])),
        "Entries are ready in arrival order"
    );
    assert_eq!(
        requests_feed.last_updated,
        Some(*NOW.read().unwrap()),
        "The refresh time is stamped from the env clock"
    );
    assert!(!requests_feed.in_flight);
}

#[test]
fn refresh_replaces_entries() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. } if url == requests_url() && method == "GET" => {
                let requests = match REQUESTS.read().unwrap().len() {
                    1 => vec![service_request("pickup", "Acme")],
                    _ => vec![
                        service_request("pickup", "Acme"),
                        service_request("delivery", "Initech"),
                    ],
                };
                future::ok(
                    Box::new(ApiResult::Ok(RequestsResponse { requests })) as Box<dyn Any + Send>
                )
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::RequestsFeed),
        })
    });
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::RequestsFeed(ActionRequestsFeed::Refresh),
        })
    });
    assert_eq!(
        runtime.model().unwrap().requests_feed.requests,
        Some(Loadable::Ready(vec![
            service_request("pickup", "Acme"),
            service_request("delivery", "Initech"),
        ])),
        "The refresh replaced the entries with the second batch"
    );
    assert_eq!(REQUESTS.read().unwrap().len(), 2, "Two fetches were sent");
}

#[test]
fn recent_requests_api_error() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. } if url == requests_url() && method == "GET" => {
                future::ok(Box::new(ApiResult::<RequestsResponse>::Err {
                    error: ApiError {
                        message: "No such action".to_owned(),
                    },
                }) as Box<dyn Any + Send>)
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::RequestsFeed),
        })
    });
    let error = DashboardError::API(ApiError {
        message: "No such action".to_owned(),
    });
    let model = runtime.model().unwrap();
    let requests_feed = &model.requests_feed;
    assert_eq!(requests_feed.requests, Some(Loadable::Err(error.to_owned())));
    assert_eq!(
        requests_feed.last_updated, None,
        "A failed refresh is not stamped"
    );
    assert_eq!(
        core_events(&mut rx),
        vec![Event::RequestsFeedFetchFailed { error }]
    );
}

#[test]
fn refresh_is_skipped_while_a_fetch_is_in_flight() {
    let mut requests_feed = RequestsFeed {
        requests: Some(Loadable::Loading),
        last_updated: None,
        in_flight: true,
    };
    let effects = Update::<TestEnv>::update(
        &mut requests_feed,
        &Msg::Action(Action::RequestsFeed(ActionRequestsFeed::Refresh)),
    );
    assert!(!effects.has_changed, "The state is untouched");
    assert_eq!(effects.into_iter().count(), 0, "No new fetch is issued");
    assert!(requests_feed.in_flight);
}

#[test]
fn result_without_a_fetch_in_flight_is_discarded() {
    let mut requests_feed = RequestsFeed {
        requests: Some(Loadable::Ready(vec![service_request("pickup", "Acme")])),
        last_updated: None,
        in_flight: false,
    };
    let effects = Update::<TestEnv>::update(
        &mut requests_feed,
        &Msg::Internal(Internal::RequestsFeedResult(Ok(vec![service_request(
            "swap", "Globex",
        )]))),
    );
    assert!(!effects.has_changed);
    assert_eq!(
        requests_feed.requests,
        Some(Loadable::Ready(vec![service_request("pickup", "Acme")])),
        "A stale result does not replace the entries"
    );
}
