use super::super::helpers::prepare_html_template;

pub const NOTIFICATION_SUBJECT: &str = "🚀 New Pushable Early Access Request";

pub fn get_notification_from(sender: &str) -> String {
    format!("Pushable Early Access <{sender}>")
}

pub fn get_notification_text(email: &str) -> String {
    format!(
        "
        New early access request!

        Email: {email}
    "
    )
}

pub fn get_notification_html(email: &str) -> String {
    prepare_html_template(&[("email", email)], "new_waitlist_request_letter.html")
}
