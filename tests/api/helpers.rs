use once_cell::sync::Lazy;
use pushable::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use secrecy::SecretString;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
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
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_waitlist(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/waitlist", self.address))
            .header("Content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_config(|_| {}).await
}

pub async fn spawn_app_with_config(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.app.port = 0;
    config.email_client.base_url = email_server.uri();
    config.email_client.api_key = Some(SecretString::from("test-api-key"));
    config.email_client.recipient_email = Some("founders@pushable.dev".into());
    config.email_client.timeout_ms = 200;
    customize(&mut config);

    let app = Application::build(config).expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", app.get_port());
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        email_server,
    }
}
