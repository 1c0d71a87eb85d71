use actix_web::{HttpResponse, web};
use anyhow::Context;

use crate::{
    configuration::{EmailClientSettings, NotificationSettings},
    domain::EmailAddress,
    email_client::EmailClient,
};

use super::{
    errors::WaitlistError,
    helpers::{
        NOTIFICATION_SUBJECT, get_notification_from, get_notification_html, get_notification_text,
    },
};

#[derive(serde::Deserialize)]
pub struct WaitlistForm {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(serde::Serialize)]
struct WaitlistAccepted {
    message: &'static str,
}

#[tracing::instrument(
    name = "Handling a waitlist submission.",
    skip(body, email_client, email_settings)
)]
pub async fn join_waitlist(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
    email_settings: web::Data<EmailClientSettings>,
) -> Result<HttpResponse, WaitlistError> {
    let form: WaitlistForm =
        serde_json::from_slice(&body).context("Failed to parse the request body as JSON.")?;

    let email = match form.email.filter(|email| !email.is_empty()) {
        Some(email) => email,
        None => {
            tracing::warn!("Rejecting a submission without an email address.");
            return Err(WaitlistError::MissingEmail);
        }
    };

    let email = match EmailAddress::parse(email) {
        Ok(email) => email,
        Err(reason) => {
            tracing::warn!(rejection.reason = %reason, "Rejecting a malformed email address.");
            return Err(WaitlistError::InvalidEmail);
        }
    };

    // Credentials are checked up front so a misconfigured deployment fails
    // loudly instead of silently dropping every notification.
    let notification = match email_settings.notification() {
        Ok(notification) => notification,
        Err(missing) => {
            tracing::error!(
                error.message = %missing,
                "Email provider credentials are missing from the configuration."
            );
            return Err(WaitlistError::MissingConfiguration);
        }
    };

    notify_operator(&email_client, &notification, &email).await;

    Ok(HttpResponse::Ok().json(WaitlistAccepted {
        message: "Request received successfully!",
    }))
}

/// Relays the submission to the operator's inbox. The submission itself has
/// already been accepted: a provider failure is logged and swallowed here,
/// never bubbled up to the client.
#[tracing::instrument(
    name = "Notifying the operator about a new waitlist request",
    skip(email_client, notification),
    fields(recipient = %notification.recipient)
)]
async fn notify_operator(
    email_client: &EmailClient,
    notification: &NotificationSettings,
    submitted_email: &EmailAddress,
) {
    let outcome = email_client
        .send_email(
            &notification.api_key,
            &get_notification_from(notification.sender.as_ref()),
            &notification.recipient,
            NOTIFICATION_SUBJECT,
            &get_notification_html(submitted_email.as_ref()),
            &get_notification_text(submitted_email.as_ref()),
        )
        .await;

    match outcome {
        Ok(response) => {
            tracing::info!(message_id = %response.id, "Notification email sent.")
        }
        Err(cause) => {
            tracing::error!(
                error.cause_chain = ?cause,
                error.message = %cause,
                "Failed to send the notification email, proceeding anyway."
            )
        }
    }
}
