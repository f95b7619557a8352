use thiserror::Error;
use url::Url;

/// The single form field rejects anything that is not a syntactically valid
/// absolute URL. The message is what the form shows inline next to the field.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("Invalid URL format")]
pub struct ValidationError;

/// Validates the raw field value and returns the normalized URL on success.
/// Runs synchronously and never touches the network; the submission pipeline
/// is only ever handed a URL that passed this gate.
pub fn validate_long_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError);
    }
    Url::parse(trimmed).map_err(|_| ValidationError)
}
