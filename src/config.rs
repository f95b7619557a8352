use std::time::Duration;
use url::Url;

/// Connection settings the submission worker needs for every request.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Address of the create endpoint: the service base itself.
    pub fn create_url(&self) -> String {
        self.endpoint.as_str().trim_end_matches('/').to_string()
    }

    /// Address of the read endpoint for a returned alias: `<base>/<alias>`.
    pub fn read_url(&self, alias: &str) -> String {
        format!("{}/{}", self.create_url(), alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> ServiceConfig {
        ServiceConfig {
            endpoint: Url::parse(endpoint).unwrap(),
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn create_url_strips_trailing_slash() {
        assert_eq!(config("https://sho.rt").create_url(), "https://sho.rt");
        assert_eq!(config("https://sho.rt/").create_url(), "https://sho.rt");
    }

    #[test]
    fn read_url_appends_alias() {
        assert_eq!(config("https://sho.rt").read_url("abc123"), "https://sho.rt/abc123");
        assert_eq!(
            config("https://sho.rt/api/").read_url("abc123"),
            "https://sho.rt/api/abc123"
        );
    }
}
