//! Cancel-previous debouncing on a Tokio timer.
//!
//! A [`Debouncer`] is a two-state machine:
//!
//! ```text
//!            schedule(r)                       schedule(r')
//!   Idle ─────────────────▶ Pending(timer, r) ─────────────▶ Pending(timer', r')
//!    ▲                            │   (old timer aborted)
//!    │        window elapses      │
//!    └────────────────────────────┘  fire(r) runs, never aborted
//! ```
//!
//! Scheduling always clears the existing timer before installing a new one, so
//! only the last request of a burst fires. Once a timer has fired, its request is
//! out of the debouncer's hands: a later schedule cannot cancel it.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// State of a debounce channel.
#[derive(Debug)]
pub enum DebounceState<T> {
    Idle,
    Pending { timer: JoinHandle<()>, request: T },
}

impl<T> Default for DebounceState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug)]
struct Channel<T> {
    /// Bumped by every schedule and cancel; a waking timer only claims its
    /// request if the generation it was armed with is still current.
    generation: u64,
    state: DebounceState<T>,
}

/// One debounce channel with a fixed quiet window.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    runtime: Handle,
    channel: Arc<Mutex<Channel<T>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    /// Creates an idle debouncer whose timers run on `runtime`.
    #[must_use]
    pub fn new(window: Duration, runtime: Handle) -> Self {
        Self {
            window,
            runtime,
            channel: Arc::new(Mutex::new(Channel {
                generation: 0,
                state: DebounceState::Idle,
            })),
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arms the timer for `request`, replacing any pending one.
    ///
    /// After `window` passes with no further schedule or cancel, `fire(request)`
    /// runs to completion on the runtime.
    pub fn schedule<F, Fut>(&self, request: T, fire: F)
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut channel = lock(&self.channel);
        if let DebounceState::Pending { timer, .. } =
            std::mem::take(&mut channel.state)
        {
            timer.abort();
            tracing::trace!("replaced pending request");
        }

        channel.generation += 1;
        let generation = channel.generation;
        let shared = Arc::clone(&self.channel);
        let window = self.window;

        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(window).await;

            let request = {
                let mut channel = lock(&shared);
                if channel.generation != generation {
                    return;
                }
                match std::mem::take(&mut channel.state) {
                    DebounceState::Pending { request, .. } => request,
                    DebounceState::Idle => return,
                }
            };

            fire(request).await;
        });

        channel.state = DebounceState::Pending { timer, request };
    }

    /// Drops the pending request, if any, and returns it.
    pub fn cancel(&self) -> Option<T> {
        let mut channel = lock(&self.channel);
        channel.generation += 1;
        match std::mem::take(&mut channel.state) {
            DebounceState::Pending { timer, request } => {
                timer.abort();
                Some(request)
            }
            DebounceState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(lock(&self.channel).state, DebounceState::Pending { .. })
    }

    /// The request waiting for its window to elapse.
    #[must_use]
    pub fn pending_request(&self) -> Option<T> {
        match &lock(&self.channel).state {
            DebounceState::Pending { request, .. } => Some(request.clone()),
            DebounceState::Idle => None,
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let DebounceState::Pending { timer, .. } = &lock(&self.channel).state {
            timer.abort();
        }
    }
}
