use std::any::Any;

use futures::future;

use crate::constants::ADMIN_API_URL;
use crate::model::AdminDashboard;
use crate::models::common::{DashboardError, Loadable};
use crate::runtime::msg::{Action, ActionLoad, Event};
use crate::runtime::{EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture};
use crate::types::admin::Client;
use crate::types::api::{ApiError, ApiResult, ClientsResponse};
use crate::unit_tests::{
    core_events, default_fetch_handler, Request, TestEnv, FETCH_HANDLER, REQUESTS,
};

fn client(id: &str, name: &str) -> Client {
    Client {
        client_id: id.to_owned(),
        client_name: name.to_owned(),
        address: "1 Example St".to_owned(),
        days_on_site: 3,
    }
}

fn clients_fetch_handler(clients: Vec<Client>) -> impl Fn(Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    move |request| match request {
        Request {
            url, method, body, ..
        } if url == format!("{}?action=getAllClients", ADMIN_API_URL.as_str())
            && method == "GET"
            && body == "null" =>
        {
            future::ok(Box::new(ApiResult::Ok(ClientsResponse {
                clients: clients.to_owned(),
            })) as Box<dyn Any + Send>)
            .boxed_env()
        }
        _ => default_fetch_handler(request),
    }
}

#[test]
fn load_active_clients() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(clients_fetch_handler(vec![
        client("C1", "Acme"),
        client("C2", "Globex"),
    ]));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::ActiveClients),
        })
    });
    assert_eq!(
        runtime.model().unwrap().active_clients.clients,
        Some(Loadable::Ready(vec![
            client("C1", "Acme"),
            client("C2", "Globex"),
        ])),
        "One row per record, in input order"
    );
    assert_eq!(
        REQUESTS.read().unwrap().len(),
        1,
        "One request was sent to the backend"
    );
}

#[test]
fn load_active_clients_empty() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(clients_fetch_handler(vec![]));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::ActiveClients),
        })
    });
    assert_eq!(
        runtime.model().unwrap().active_clients.clients,
        Some(Loadable::Ready(vec![])),
        "An empty result is ready with no rows - the placeholder state"
    );
}

#[test]
fn load_active_clients_api_error() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == format!("{}?action=getAllClients", ADMIN_API_URL.as_str())
                    && method == "GET" =>
            {
                future::ok(Box::new(ApiResult::<ClientsResponse>::Err {
                    error: ApiError {
                        message: "Sheet is unavailable".to_owned(),
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
            action: Action::Load(ActionLoad::ActiveClients),
        })
    });
    let error = DashboardError::API(ApiError {
        message: "Sheet is unavailable".to_owned(),
    });
    assert_eq!(
        runtime.model().unwrap().active_clients.clients,
        Some(Loadable::Err(error.to_owned())),
        "The failure replaces the rows - the placeholder state"
    );
    assert_eq!(
        core_events(&mut rx),
        vec![Event::ActiveClientsFetchFailed { error }],
        "The failure is surfaced to the operator exactly once"
    );
}

#[test]
fn unload_resets_active_clients() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(clients_fetch_handler(vec![client("C1", "Acme")]));
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::ActiveClients),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Unload,
        });
    });
    assert_eq!(runtime.model().unwrap().active_clients.clients, None);
}
