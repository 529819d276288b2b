use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::ops::Fn;
use std::sync::{LockResult, Mutex, MutexGuard, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::{Future, TryFutureExt};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::runtime::{ConditionalSend, Env, EnvFuture, EnvFutureExt, TryEnvFuture};

lazy_static! {
    pub static ref FETCH_HANDLER: RwLock<FetchHandler> =
        RwLock::new(Box::new(default_fetch_handler));
    pub static ref SLEEP_HANDLER: RwLock<SleepHandler> =
        RwLock::new(Box::new(default_sleep_handler));
    pub static ref REQUESTS: RwLock<Vec<Request>> = Default::default();
    pub static ref NOW: RwLock<DateTime<Utc>> = RwLock::new(Utc::now());
    static ref ENV_MUTEX: Mutex<()> = Default::default();
}

thread_local! {
    static SPAWNED_TASKS: RefCell<VecDeque<EnvFuture<'static, ()>>> =
        RefCell::new(VecDeque::new());
}

pub type FetchHandler =
    Box<dyn Fn(Request) -> TryEnvFuture<Box<dyn Any + Send>> + Send + Sync + 'static>;

pub type SleepHandler = Box<dyn Fn(Duration) -> EnvFuture<'static, ()> + Send + Sync + 'static>;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl<T: Serialize> From<http::Request<T>> for Request {
    fn from(request: http::Request<T>) -> Self {
        let (head, body) = request.into_parts();
        Request {
            url: head.uri.to_string(),
            method: head.method.as_str().to_owned(),
            headers: head
                .headers
                .iter()
                .map(|(key, value)| (key.as_str().to_owned(), value.to_str().unwrap().to_owned()))
                .collect::<HashMap<_, _>>(),
            body: serde_json::to_string(&body).unwrap(),
        }
    }
}

pub enum TestEnv {}

impl TestEnv {
    pub fn reset() -> LockResult<MutexGuard<'static, ()>> {
        let env_mutex = ENV_MUTEX.lock();
        *FETCH_HANDLER.write().unwrap() = Box::new(default_fetch_handler);
        *SLEEP_HANDLER.write().unwrap() = Box::new(default_sleep_handler);
        *REQUESTS.write().unwrap() = vec![];
        *NOW.write().unwrap() = Utc::now();
        SPAWNED_TASKS.with(|tasks| tasks.borrow_mut().clear());
        env_mutex
    }
    /// Runs `runnable`, then drives every spawned task to completion.
    /// Tasks are deferred rather than executed inline so a task is never
    /// driven from within another one.
    pub fn run<F: FnOnce()>(runnable: F) {
        runnable();
        while let Some(task) = TestEnv::next_spawned_task() {
            futures::executor::block_on(task);
        }
    }
    /// Pops one spawned-but-not-yet-driven task. Lets scripted sleep
    /// handlers interleave effect completion with schedule ticks.
    pub fn next_spawned_task() -> Option<EnvFuture<'static, ()>> {
        SPAWNED_TASKS.with(|tasks| tasks.borrow_mut().pop_front())
    }
}

impl Env for TestEnv {
    fn fetch<
        IN: Serialize + ConditionalSend + 'static,
        OUT: for<'de> Deserialize<'de> + ConditionalSend + 'static,
    >(
        request: http::Request<IN>,
    ) -> TryEnvFuture<OUT> {
        let request = Request::from(request);
        REQUESTS.write().unwrap().push(request.to_owned());
        FETCH_HANDLER.read().unwrap()(request)
            .map_ok(|resp| *resp.downcast::<OUT>().unwrap())
            .boxed_env()
    }
    fn sleep(duration: Duration) -> EnvFuture<'static, ()> {
        SLEEP_HANDLER.read().unwrap()(duration)
    }
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        SPAWNED_TASKS.with(|tasks| tasks.borrow_mut().push_back(future.boxed_env()));
    }
    fn exec_sequential<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        SPAWNED_TASKS.with(|tasks| tasks.borrow_mut().push_back(future.boxed_env()));
    }
    fn now() -> DateTime<Utc> {
        *NOW.read().unwrap()
    }
}

pub fn default_fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    panic!("Unhandled fetch request: {request:#?}")
}

pub fn default_sleep_handler(duration: Duration) -> EnvFuture<'static, ()> {
    panic!("Unhandled sleep: {duration:?}")
}
