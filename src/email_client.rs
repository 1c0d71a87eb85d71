use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct SendEmailResponse {
    pub id: String,
}

impl EmailClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build the email api http client."),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
        }
    }

    /// Dispatches one message through the provider's REST API.
    ///
    /// Transport failures, provider-side rejections and unreadable responses
    /// all surface as `Err`; callers decide whether that failure matters.
    pub async fn send_email(
        &self,
        api_key: &SecretString,
        from: &str,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<SendEmailResponse, reqwest::Error> {
        let url = self
            .base_url
            .join("emails")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from,
            to: vec![recipient.as_ref()],
            subject,
            html: html_content,
            text: text_content,
        };

        let response = self
            .http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + api_key.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<SendEmailResponse>()
            .await?;

        Ok(response)
    }
}
