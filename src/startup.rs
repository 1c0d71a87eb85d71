use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::{EmailClientSettings, Settings};
use crate::email_client::EmailClient;
use crate::routes::{health_check, join_waitlist};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client();

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, config.email_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    email_settings: EmailClientSettings,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let email_settings = web::Data::new(email_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/waitlist", web::post().to(join_waitlist))
            .app_data(email_client.clone())
            .app_data(email_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
