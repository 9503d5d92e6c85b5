use super::ContactSubmission;

/// The formatted text blob handed to the dispatcher. Telegram renders it
/// with Markdown formatting enabled.
#[derive(Debug)]
pub struct NotificationMessage(String);

impl NotificationMessage {
    /// Fixed template: title, name, email, an optional phone line, then a
    /// blank line and the message body. The phone line is omitted entirely
    /// when no phone was provided.
    pub fn for_submission(submission: &ContactSubmission) -> Self {
        let phone_line = match submission.phone() {
            Some(phone) => format!("📞 Phone: {}\n", phone),
            None => String::new(),
        };
        Self(format!(
            "🔔 *New Contact Form Submission*\n\n\
             👤 *Name:* {}\n\
             📧 *Email:* {}\n\
             {}\n\
             💬 *Message:*\n{}",
            submission.name(),
            submission.email(),
            phone_line,
            submission.message(),
        ))
    }
}

impl AsRef<str> for NotificationMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
