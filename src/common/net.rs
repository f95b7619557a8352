use url::Url;

/// Lenient parse for the service endpoint taken from the CLI: a bare host is
/// promoted to https. The form field itself goes through the strict
/// validator instead.
pub fn parse_endpoint_url(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("://") {
        Url::parse(trimmed).ok()
    } else {
        Url::parse(&format!("https://{trimmed}")).ok()
    }
}
