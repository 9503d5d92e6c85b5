use std::sync::LazyLock;

use contact_relay::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use secrecy::SecretString;
use wiremock::MockServer;

pub const TEST_BOT_TOKEN: &str = "test-bot-token";
pub const TEST_CHAT_ID: &str = "123456789";

// Ensure that the `tracing` stack is only initialised once.
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub telegram_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_health(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// The path the app is expected to hit on the Telegram side.
    pub fn send_message_path(&self) -> String {
        format!("/bot{TEST_BOT_TOKEN}/sendMessage")
    }

    /// The body of the nth request captured by the mock Telegram server.
    pub async fn dispatched_body(&self, n: usize) -> serde_json::Value {
        let requests = self
            .telegram_server
            .received_requests()
            .await
            .expect("request recording is enabled");
        serde_json::from_slice(&requests[n].body).expect("dispatched body is json")
    }
}

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    // Stand-in for the Telegram Bot API.
    let telegram_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.telegram.base_url = telegram_server.uri();
        c.telegram.bot_token = SecretString::from(TEST_BOT_TOKEN);
        c.telegram.chat_id = TEST_CHAT_ID.into();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        telegram_server,
        api_client: reqwest::Client::new(),
    }
}
