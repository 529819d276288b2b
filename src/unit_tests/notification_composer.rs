use std::any::Any;

use futures::future;

use crate::constants::ADMIN_API_URL;
use crate::model::AdminDashboard;
use crate::models::common::{DashboardError, Loadable};
use crate::models::notification_composer::Selected;
use crate::runtime::msg::{Action, ActionComposer, Event};
use crate::runtime::{EnvError, EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture};
use crate::types::admin::NotificationDraft;
use crate::types::api::{ApiError, ApiResult, DeliveryResponse};
use crate::unit_tests::{
    core_events, default_fetch_handler, Request, TestEnv, FETCH_HANDLER, REQUESTS,
};

fn selected() -> Selected {
    Selected {
        client_id: "C1".to_owned(),
        client_name: "Acme".to_owned(),
    }
}

fn draft() -> NotificationDraft {
    NotificationDraft {
        title: "Pickup scheduled".to_owned(),
        body: "The crew arrives tomorrow at 08:00".to_owned(),
    }
}

fn delivery_fetch_handler(
    response: DeliveryResponse,
) -> impl Fn(Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    move |request| match request {
        Request {
            url,
            method,
            headers,
            body,
        } if url == ADMIN_API_URL.as_str()
            && method == "POST"
            && headers.get("content-type").map(String::as_str)
                == Some("text/plain;charset=utf-8")
            && body
                == r#"{"action":"sendAdminNotification","clientId":"C1","title":"Pickup scheduled","body":"The crew arrives tomorrow at 08:00"}"# =>
        {
            future::ok(Box::new(ApiResult::Ok(response.to_owned())) as Box<dyn Any + Send>)
                .boxed_env()
        }
        _ => default_fetch_handler(request),
    }
}

#[test]
fn open_composer_selects_the_client() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Open(selected())),
        })
    });
    let model = runtime.model().unwrap();
    let composer = &model.notification_composer;
    assert_eq!(composer.selected, Some(selected()), "The composer is visible for C1/Acme");
    assert_eq!(composer.delivery, None);
    assert!(!composer.is_sending());
}

#[test]
fn close_composer_hides_it() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Open(selected())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Close),
        });
    });
    assert_eq!(runtime.model().unwrap().notification_composer.selected, None);
}

#[test]
fn send_notification_success() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(delivery_fetch_handler(DeliveryResponse {
        status: "success".to_owned(),
        message: None,
    }));
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Open(selected())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Send(draft())),
        });
    });
    let model = runtime.model().unwrap();
    let composer = &model.notification_composer;
    assert_eq!(composer.selected, None, "The composer is hidden again");
    assert_eq!(composer.delivery, None, "The submit control is idle again");
    assert_eq!(
        core_events(&mut rx),
        vec![Event::NotificationSent {
            client_id: "C1".to_owned(),
        }],
        "The confirmation is surfaced to the operator"
    );
    assert_eq!(REQUESTS.read().unwrap().len(), 1, "One POST was sent");
}

#[test]
fn send_notification_rejected_by_backend() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(delivery_fetch_handler(DeliveryResponse {
        status: "error".to_owned(),
        message: Some("Push token expired".to_owned()),
    }));
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Open(selected())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Send(draft())),
        });
    });
    let error = DashboardError::API(ApiError {
        message: "Push token expired".to_owned(),
    });
    let model = runtime.model().unwrap();
    let composer = &model.notification_composer;
    assert_eq!(
        composer.selected,
        Some(selected()),
        "The composer stays open on failure"
    );
    assert_eq!(
        composer.delivery,
        Some(Loadable::Err(error.to_owned())),
        "The failure is kept and the submit control is re-enabled"
    );
    assert!(!composer.is_sending());
    assert_eq!(
        core_events(&mut rx),
        vec![Event::NotificationFailed {
            client_id: "C1".to_owned(),
            error,
        }]
    );
}

#[test]
fn send_notification_network_error() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == ADMIN_API_URL.as_str() && method == "POST" =>
            {
                future::err(EnvError::Fetch("status 500".to_owned())).boxed_env()
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
            action: Action::Composer(ActionComposer::Open(selected())),
        });
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Send(draft())),
        });
    });
    let error = DashboardError::Env(EnvError::Fetch("status 500".to_owned()));
    let model = runtime.model().unwrap();
    let composer = &model.notification_composer;
    assert_eq!(composer.selected, Some(selected()));
    assert_eq!(composer.delivery, Some(Loadable::Err(error.to_owned())));
    assert_eq!(
        core_events(&mut rx),
        vec![Event::NotificationFailed {
            client_id: "C1".to_owned(),
            error,
        }]
    );
}

#[test]
fn send_while_hidden_is_ignored() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Composer(ActionComposer::Send(draft())),
        })
    });
    let model = runtime.model().unwrap();
    let composer = &model.notification_composer;
    assert_eq!(composer.selected, None);
    assert_eq!(composer.delivery, None);
    assert_eq!(REQUESTS.read().unwrap().len(), 0, "No POST was sent");
}
