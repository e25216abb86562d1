use lexis_core::ClientSettings;

/// User agent sent by clients created through these helpers.
pub const TEST_USER_AGENT: &str = "Lexis Rust-SDK [TEST]";

/// Helper for testing the Lexis API using wiremock.
///
/// Warning: when using `Mock::expected` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        base_url: server.uri(),
        user_agent: TEST_USER_AGENT.to_string(),
        ..Default::default()
    };

    (server, settings)
}

