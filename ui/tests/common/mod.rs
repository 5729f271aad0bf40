use std::time::Duration;

use egui_kittest::Harness;
use roster_business::BusinessConfig;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to let ehttp's background thread talk to the mock server.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 200;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// App serving `users` from a mock `/users` endpoint.
    pub async fn new_app(users: serde_json::Value) -> Self {
        let mock_server = mock_users_server(ResponseTemplate::new(200).set_body_json(users)).await;
        let state = State::test(mock_server.uri());
        Self::with_state(mock_server, state)
    }

    pub async fn new_app_with(
        response: ResponseTemplate,
        configure: impl FnOnce(BusinessConfig) -> BusinessConfig,
    ) -> Self {
        let mock_server = mock_users_server(response).await;
        let config = configure(BusinessConfig::new(format!("{}/users", mock_server.uri())));
        Self::with_state(mock_server, State::new(config))
    }

    fn with_state(mock_server: MockServer, state: State) -> Self {
        Self {
            mock_server,
            harness: new_harness(state),
        }
    }
}

/// Harness of the app at the size the table tests expect.
pub fn new_harness<'a>(state: State) -> Harness<'a, RosterApp> {
    let app = RosterApp::new(state);
    Harness::builder()
        .with_size(egui::vec2(1024.0, 768.0))
        .build_eframe(|_| app)
}

async fn mock_users_server(response: ResponseTemplate) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Step once to mount, wait for the mock response, then settle.
pub async fn yield_wait_for_network(harness: &mut Harness<'_, RosterApp>, wait_ms: u64) {
    harness.step();
    tokio::time::sleep(Duration::from_millis(wait_ms)).await;
    for _ in 0..10 {
        harness.step();
    }
}

/// `n` users with ids `1..=n`, each in its own state. Even ids are female; every fifth user
/// lives in India.
pub fn users_payload(n: u32) -> serde_json::Value {
    let users: Vec<_> = (1..=n)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "firstName": format!("First{id:02}"),
                "lastName": "Tester",
                "age": 20 + id,
                "gender": if id % 2 == 0 { "female" } else { "male" },
                "image": "",
                "company": { "title": format!("Title{id:02}") },
                "address": {
                    "state": format!("State{id:02}"),
                    "country": if id % 5 == 0 { "India" } else { "United States" },
                },
            })
        })
        .collect();
    serde_json::json!({ "users": users, "total": n, "skip": 0, "limit": n })
}
