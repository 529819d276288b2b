use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use enclose::enclose;

use crate::runtime::{Env, EnvFuture, EnvFutureExt, Model, Runtime, RuntimeAction};

/// Re-dispatches one action on a fixed cadence until cancelled.
///
/// [`Poller::new`] returns the handle together with the schedule future
/// so the caller decides where it runs; [`Poller::start`] hands it
/// straight to [`Env::exec_concurrent`]. Cancellation takes effect at
/// the next tick boundary — the tick already sleeping still elapses,
/// but dispatches nothing. Dropping the handle without cancelling
/// leaves the schedule running.
#[derive(Clone)]
pub struct Poller {
    cancelled: Arc<AtomicBool>,
}

impl Poller {
    pub fn new<E, M>(
        runtime: Runtime<E, M>,
        interval: Duration,
        action: RuntimeAction<E, M>,
    ) -> (Self, EnvFuture<'static, ()>)
    where
        E: Env + Send + 'static,
        M: Model<E> + Send + Sync + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let schedule = enclose!((cancelled) async move {
            loop {
                E::sleep(interval).await;
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                runtime.dispatch(action.clone());
            }
        })
        .boxed_env();
        (Poller { cancelled }, schedule)
    }
    pub fn start<E, M>(
        runtime: Runtime<E, M>,
        interval: Duration,
        action: RuntimeAction<E, M>,
    ) -> Self
    where
        E: Env + Send + 'static,
        M: Model<E> + Send + Sync + 'static,
    {
        let (poller, schedule) = Poller::new(runtime, interval, action);
        E::exec_concurrent(schedule);
        poller
    }
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
