/// A single failed field check. The display strings are part of the HTTP
/// contract: the route joins them with ", " into the 400 response body.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please provide a valid email address")]
    EmailInvalid,
    #[error("Please provide a valid phone number")]
    PhoneInvalid,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Syntactic sanity check only: one `@` with non-empty, whitespace-free text
/// before it, and a domain containing a dot with non-empty text on both
/// sides. Deliberately looser than RFC validation; deliverability is the
/// sender's problem.
pub fn validate_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let ok_chunk =
        |chunk: &str| !chunk.is_empty() && chunk.chars().all(|c| !c.is_whitespace() && c != '@');
    ok_chunk(local) && ok_chunk(host) && ok_chunk(tld)
}

/// Empty means "not provided", which is fine since phone is optional.
/// Otherwise only digits, whitespace and `-+()` are allowed, and at least
/// ten digits must be present.
pub fn validate_phone(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let allowed = s
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'));
    allowed && s.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}
