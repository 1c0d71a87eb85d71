use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::EmailAddress;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    pub api_key: Option<SecretString>,
    pub recipient_email: Option<String>,
    pub timeout_ms: u64,
}

fn default_sender_email() -> String {
    "onboarding@resend.dev".into()
}

/// Everything required to dispatch one operator notification. Only obtainable
/// when the required provider credentials are actually configured.
#[derive(Debug)]
pub struct NotificationSettings {
    pub api_key: SecretString,
    pub recipient: EmailAddress,
    pub sender: EmailAddress,
}

impl EmailClientSettings {
    pub fn client(&self) -> EmailClient {
        EmailClient::new(self.base_url.clone(), self.timeout())
    }

    /// Resolves the notification credentials, treating unset or blank values
    /// as absent. The error names the missing value but never its content.
    pub fn notification(&self) -> Result<NotificationSettings, String> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or_else(|| "email provider API key is not set".to_string())?;

        let recipient = self
            .recipient_email
            .clone()
            .filter(|email| !email.is_empty())
            .ok_or_else(|| "notification recipient email is not set".to_string())?;
        let recipient = EmailAddress::parse(recipient)?;

        let sender = EmailAddress::parse(self.sender_email.clone())?;

        Ok(NotificationSettings {
            api_key,
            recipient,
            sender,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENV");

    let settings = config::Config::builder()
        .add_source(
            config::File::with_name(
                conf_dir
                    .join("base")
                    .to_str()
                    .expect("Failed to read base configuration"),
            )
            .required(true),
        )
        .add_source(
            config::File::with_name(
                conf_dir
                    .join(env.as_str())
                    .to_str()
                    .expect("Failed to read environment configuration"),
            )
            .required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
