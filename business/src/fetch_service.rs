use std::fmt::Debug;
use std::sync::Arc;

use ehttp::{Request, Response, Result};
use roster_states::State;

pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Performs HTTP requests for commands. Swapped out in tests.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done)
    }
}

/// The fetch service commands use, stored in the context like any other state.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(service: impl FetchService + 'static) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(EhttpFetcher)
    }
}

impl State for FetchState {}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug)]
    enum Mode {
        Immediate(Result<Response>),
        Deferred,
    }

    /// Answers requests without touching the network.
    ///
    /// In deferred mode callbacks are held until [`MockFetcher::complete_next`] releases them,
    /// which lets tests finish requests out of order.
    #[derive(Clone)]
    pub struct MockFetcher {
        mode: Arc<Mutex<Mode>>,
        pending: Arc<Mutex<Vec<(Request, OnDone)>>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Debug for MockFetcher {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockFetcher")
                .field("pending", &self.pending_len())
                .field("requests", &self.requested_urls())
                .finish()
        }
    }

    impl MockFetcher {
        fn with_mode(mode: Mode) -> Self {
            Self {
                mode: Arc::new(Mutex::new(mode)),
                pending: Arc::default(),
                requests: Arc::default(),
            }
        }

        /// Every request gets `response` right away.
        pub fn respond_with(response: Result<Response>) -> Self {
            Self::with_mode(Mode::Immediate(response))
        }

        /// Every request gets a 200 with `body`.
        pub fn ok_json(body: &serde_json::Value) -> Self {
            Self::respond_with(Ok(json_response(200, body)))
        }

        pub fn deferred() -> Self {
            Self::with_mode(Mode::Deferred)
        }

        /// Change the answer given to later immediate requests.
        pub fn set_response(&self, response: Result<Response>) {
            *self.mode.lock().expect("mock mode lock") = Mode::Immediate(response);
        }

        /// Finish the oldest pending request. Returns `false` if nothing is pending.
        pub fn complete_next(&self, response: Result<Response>) -> bool {
            let next = {
                let mut pending = self.pending.lock().expect("mock pending lock");
                (!pending.is_empty()).then(|| pending.remove(0))
            };
            match next {
                Some((_, on_done)) => {
                    on_done(response);
                    true
                }
                None => false,
            }
        }

        /// Finish the newest pending request.
        pub fn complete_last(&self, response: Result<Response>) -> bool {
            let last = self.pending.lock().expect("mock pending lock").pop();
            match last {
                Some((_, on_done)) => {
                    on_done(response);
                    true
                }
                None => false,
            }
        }

        pub fn pending_len(&self) -> usize {
            self.pending.lock().expect("mock pending lock").len()
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests.lock().expect("mock requests lock").clone()
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            self.requests
                .lock()
                .expect("mock requests lock")
                .push(request.url.clone());

            let immediate = match &*self.mode.lock().expect("mock mode lock") {
                Mode::Immediate(response) => Some(response.clone()),
                Mode::Deferred => None,
            };

            match immediate {
                Some(response) => on_done(response),
                None => self
                    .pending
                    .lock()
                    .expect("mock pending lock")
                    .push((request, on_done)),
            }
        }
    }

    /// A response carrying `body` as JSON.
    pub fn json_response(status: u16, body: &serde_json::Value) -> Response {
        Response {
            url: "mock://users".to_string(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: ehttp::Headers::default(),
            bytes: serde_json::to_vec(body).unwrap_or_default(),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::json_response;
