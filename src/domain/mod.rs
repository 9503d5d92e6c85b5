mod notification;
mod sanitize;
mod submission;
mod validation;

pub use notification::NotificationMessage;
pub use sanitize::sanitize;
pub use submission::ContactSubmission;
pub use validation::{ValidationFailure, validate_email, validate_phone};
