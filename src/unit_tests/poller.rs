use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use enclose::enclose;
use futures::future;

use crate::constants::{ADMIN_API_URL, RECENT_REQUESTS_POLL_INTERVAL};
use crate::model::AdminDashboard;
use crate::models::common::Loadable;
use crate::runtime::msg::{Action, ActionRequestsFeed};
use crate::runtime::{EnvFutureExt, Poller, Runtime, RuntimeAction, TryEnvFuture};
use crate::types::api::{ApiResult, RequestsResponse};
use crate::unit_tests::{
    default_fetch_handler, Request, TestEnv, FETCH_HANDLER, REQUESTS, SLEEP_HANDLER,
};

#[test]
fn poller_refreshes_the_feed_until_cancelled() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == format!("{}?action=getRecentRequests", ADMIN_API_URL.as_str())
                    && method == "GET" =>
            {
                future::ok(Box::new(ApiResult::Ok(RequestsResponse { requests: vec![] }))
                    as Box<dyn Any + Send>)
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(AdminDashboard::default(), vec![], 1000);
    let (poller, schedule) = Poller::new(
        runtime.clone(),
        RECENT_REQUESTS_POLL_INTERVAL,
        RuntimeAction {
            field: None,
            action: Action::RequestsFeed(ActionRequestsFeed::Refresh),
        },
    );
    // Every tick first drives the previous tick's fetch to completion,
    // so each refresh finds the feed idle again; the third tick cancels.
    let ticks = Arc::new(AtomicUsize::new(0));
    *SLEEP_HANDLER.write().unwrap() = Box::new(enclose!((poller, ticks) move |duration| {
        assert_eq!(
            duration, RECENT_REQUESTS_POLL_INTERVAL,
            "The configured cadence is used"
        );
        if ticks.fetch_add(1, Ordering::SeqCst) == 2 {
            poller.cancel();
        }
        match TestEnv::next_spawned_task() {
            Some(task) => task,
            None => future::ready(()).boxed_env(),
        }
    }));
    futures::executor::block_on(schedule);
    TestEnv::run(|| {});
    assert!(poller.is_cancelled());
    assert_eq!(
        ticks.load(Ordering::SeqCst),
        3,
        "Cancellation takes effect at the tick after it was requested"
    );
    assert_eq!(
        REQUESTS.read().unwrap().len(),
        2,
        "A refresh was dispatched on every completed tick before cancelling"
    );
    assert_eq!(
        runtime.model().unwrap().requests_feed.requests,
        Some(Loadable::Ready(vec![])),
        "The last refresh landed"
    );
}
