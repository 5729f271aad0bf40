use roster_business::{BusinessConfig, FetchState, register};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, FetchState::default())
    }

    pub fn with_fetcher(config: BusinessConfig, fetch: FetchState) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config, fetch);
        Self { ctx }
    }

    /// State pointed at a mock server serving `{base_url}/users`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(format!("{base_url}/users")))
    }
}
