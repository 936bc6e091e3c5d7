use std::sync::Arc;

use egui_kittest::Harness;
use portal_business::{BusinessConfig, HttpAuthenticator, LoginInput};
use portal_ui::PortalApp;
use portal_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, PortalApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, PortalApp> {
        &mut self.harness
    }

    /// App opened on the login page, backed by a server answering `status`.
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = setup_mock_server(status_code).await;
        let state = State::test(mock_server.uri());
        Self::with_state(mock_server, state)
    }

    /// App opened on `start`, backed by a server answering `status`.
    #[allow(unused)]
    pub async fn new_app_at(start: &str, status_code: u16) -> Self {
        let mock_server = setup_mock_server(status_code).await;
        let config = BusinessConfig::new(mock_server.uri());
        let authenticator = Arc::new(HttpAuthenticator::new(&config));
        let state = State::new(config, authenticator, start);
        Self::with_state(mock_server, state)
    }

    fn with_state(mock_server: MockServer, state: State) -> Self {
        let app = PortalApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn state_mut(&mut self) -> &mut State {
        self.harness.state_mut().state_mut()
    }

    /// Fills both credential fields as if typed.
    #[allow(unused)]
    pub fn fill(&mut self, identifier: &str, secret: &str) {
        *self.state_mut().ctx.state_mut::<LoginInput>() = LoginInput::new(identifier, secret);
        self.harness.step();
    }

    /// Waits for every in-flight command, then renders the result.
    #[allow(unused)]
    pub async fn settle(&mut self) {
        while self.state_mut().ctx.join_next().await {}
        self.harness.step();
    }
}

async fn setup_mock_server(status_code: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(status_code))
        .mount(&mock_server)
        .await;

    mock_server
}
