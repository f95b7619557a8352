use crate::navigate::Navigator;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

pub type SubmissionId = Uuid;

/// Payload-level sentinel the create response is classified against.
pub const SUCCESS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "URL sent successfully!";
pub const REQUEST_FAILED_MESSAGE: &str = "Error sending URL";

/// Body of the create call: `{"longUrl": "<validated url>"}`.
#[derive(Debug, Serialize)]
pub struct CreateRequest<'a> {
    #[serde(rename = "longUrl")]
    pub long_url: &'a str,
}

/// Create response shape. `shortenedUrl` may be null or absent even on a
/// success code; that means there is nothing further to resolve.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct CreateResponse {
    pub code: u16,
    #[serde(default, rename = "shortenedUrl")]
    pub shortened_url: Option<String>,
}

impl CreateResponse {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The returned alias, with an empty string folded into "absent".
    pub fn alias(&self) -> Option<&str> {
        self.shortened_url.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// Failures thrown by the network layer itself, as opposed to a response the
/// service produced. The `Display` text is the best-effort description used
/// in "Error: <description>" status messages.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TransportError {
    #[error("timeout")]
    Timeout,
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    Protocol(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("Unknown")]
    Unknown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionStatus {
    Succeeded,
    Failed,
}

/// Result of one submission pipeline run, as shown to the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmissionOutcome {
    pub status: SubmissionStatus,
    pub message: String,
    pub alias: Option<String>,
    pub destination: Option<String>,
}

impl SubmissionOutcome {
    pub fn succeeded(alias: Option<String>, destination: Option<String>) -> Self {
        Self {
            status: SubmissionStatus::Succeeded,
            message: SUCCESS_MESSAGE.to_string(),
            alias,
            destination,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            message: message.into(),
            alias: None,
            destination: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }
}

/// Emitted by the worker once a submission settles; the id ties it back to
/// the submission that started it.
#[derive(Clone, Debug)]
pub struct SubmissionEvent {
    pub id: SubmissionId,
    pub outcome: SubmissionOutcome,
}

/// Explicit request-lifecycle machine. `Submitting` is the latch that keeps
/// the submit affordance disabled: a new submission can only begin from the
/// other three states.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting { id: SubmissionId },
    Succeeded { outcome: SubmissionOutcome },
    Failed { outcome: SubmissionOutcome },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }

    pub fn active_id(&self) -> Option<SubmissionId> {
        match self {
            SubmissionState::Submitting { id } => Some(*id),
            _ => None,
        }
    }

    pub fn settle(outcome: SubmissionOutcome) -> Self {
        match outcome.status {
            SubmissionStatus::Succeeded => SubmissionState::Succeeded { outcome },
            SubmissionStatus::Failed => SubmissionState::Failed { outcome },
        }
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            SubmissionState::Succeeded { outcome } | SubmissionState::Failed { outcome } => {
                Some(outcome)
            }
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.outcome().map(|outcome| outcome.message.as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Submitting { .. } => "Sending",
            SubmissionState::Succeeded { .. } => "Done",
            SubmissionState::Failed { .. } => "Failed",
        }
    }
}

/// The two calls the shortening service exposes. The curl client implements
/// this; tests substitute a recording fake.
pub trait ShortenTransport {
    fn create(&mut self, long_url: &Url) -> Result<CreateResponse, TransportError>;
    fn read(&mut self, alias: &str) -> Result<String, TransportError>;
}

/// Runs one submission end to end: create, classify, and, when the service
/// returned an alias, resolve it and navigate to the destination. Strictly
/// sequential; the read is only issued after the create response has been
/// classified as a success.
pub fn run_submission<T, N>(long_url: &Url, transport: &mut T, navigator: &N) -> SubmissionOutcome
where
    T: ShortenTransport,
    N: Navigator,
{
    let response = match transport.create(long_url) {
        Ok(response) => response,
        Err(err) => return SubmissionOutcome::failed(format!("Error: {err}")),
    };

    if !response.is_success() {
        return SubmissionOutcome::failed(REQUEST_FAILED_MESSAGE);
    }

    let Some(alias) = response.alias().map(str::to_string) else {
        // Success without an alias: nothing further to do.
        return SubmissionOutcome::succeeded(None, None);
    };

    let destination = match transport.read(&alias) {
        Ok(destination) => destination,
        Err(err) => return SubmissionOutcome::failed(format!("Error: {err}")),
    };

    if let Err(err) = navigator.navigate(&destination) {
        return SubmissionOutcome::failed(format!("Error: {err}"));
    }

    SubmissionOutcome::succeeded(Some(alias), Some(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    struct FakeTransport {
        create_result: Result<CreateResponse, TransportError>,
        read_result: Result<String, TransportError>,
        create_calls: Vec<String>,
        read_calls: Vec<String>,
    }

    impl FakeTransport {
        fn new(create_result: Result<CreateResponse, TransportError>) -> Self {
            Self {
                create_result,
                read_result: Ok("https://real-destination.com".to_string()),
                create_calls: Vec::new(),
                read_calls: Vec::new(),
            }
        }
    }

    impl ShortenTransport for FakeTransport {
        fn create(&mut self, long_url: &Url) -> Result<CreateResponse, TransportError> {
            self.create_calls.push(long_url.to_string());
            self.create_result.clone()
        }

        fn read(&mut self, alias: &str) -> Result<String, TransportError> {
            self.read_calls.push(alias.to_string());
            self.read_result.clone()
        }
    }

    #[derive(Default)]
    struct FakeNavigator {
        destinations: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Navigator for FakeNavigator {
        fn navigate(&self, destination: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no opener"));
            }
            self.destinations.borrow_mut().push(destination.to_string());
            Ok(())
        }
    }

    fn long_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn success_with(alias: Option<&str>) -> Result<CreateResponse, TransportError> {
        Ok(CreateResponse {
            code: SUCCESS_CODE,
            shortened_url: alias.map(str::to_string),
        })
    }

    #[test]
    fn success_with_alias_reads_and_navigates() {
        let mut transport = FakeTransport::new(success_with(Some("abc123")));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "URL sent successfully!");
        assert_eq!(transport.create_calls, vec!["https://example.com/page"]);
        assert_eq!(transport.read_calls, vec!["abc123"]);
        assert_eq!(
            *navigator.destinations.borrow(),
            vec!["https://real-destination.com"]
        );
        assert_eq!(outcome.alias.as_deref(), Some("abc123"));
        assert_eq!(outcome.destination.as_deref(), Some("https://real-destination.com"));
    }

    #[test]
    fn success_without_alias_skips_read_and_navigation() {
        let mut transport = FakeTransport::new(success_with(None));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "URL sent successfully!");
        assert!(transport.read_calls.is_empty());
        assert!(navigator.destinations.borrow().is_empty());
        assert_eq!(outcome.alias, None);
    }

    #[test]
    fn empty_alias_is_treated_as_absent() {
        let mut transport = FakeTransport::new(success_with(Some("")));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(outcome.is_success());
        assert!(transport.read_calls.is_empty());
        assert!(navigator.destinations.borrow().is_empty());
    }

    #[test]
    fn payload_failure_reports_request_error() {
        let mut transport = FakeTransport::new(Ok(CreateResponse {
            code: 500,
            shortened_url: Some("abc123".to_string()),
        }));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Error sending URL");
        assert!(transport.read_calls.is_empty());
        assert!(navigator.destinations.borrow().is_empty());
    }

    #[test]
    fn transport_timeout_reports_description() {
        let mut transport = FakeTransport::new(Err(TransportError::Timeout));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Error: timeout");
    }

    #[test]
    fn transport_without_description_reports_unknown() {
        let mut transport = FakeTransport::new(Err(TransportError::Unknown));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert_eq!(outcome.message, "Error: Unknown");
    }

    #[test]
    fn read_failure_settles_as_error_without_navigation() {
        let mut transport = FakeTransport::new(success_with(Some("abc123")));
        transport.read_result = Err(TransportError::Protocol("HTTP status 404".to_string()));
        let navigator = FakeNavigator::default();

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Error: HTTP status 404");
        assert_eq!(transport.read_calls, vec!["abc123"]);
        assert!(navigator.destinations.borrow().is_empty());
    }

    #[test]
    fn navigation_failure_settles_as_error() {
        let mut transport = FakeTransport::new(success_with(Some("abc123")));
        let navigator = FakeNavigator {
            fail: true,
            ..FakeNavigator::default()
        };

        let outcome = run_submission(&long_url(), &mut transport, &navigator);

        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Error: no opener");
    }

    #[test]
    fn create_request_uses_long_url_key() {
        let body = serde_json::to_value(CreateRequest {
            long_url: "https://example.com/page",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "longUrl": "https://example.com/page" })
        );
    }

    #[test]
    fn create_response_tolerates_missing_alias() {
        let absent: CreateResponse = serde_json::from_str(r#"{"code":200}"#).unwrap();
        assert!(absent.is_success());
        assert_eq!(absent.alias(), None);

        let null: CreateResponse =
            serde_json::from_str(r#"{"code":200,"shortenedUrl":null}"#).unwrap();
        assert_eq!(null.alias(), None);

        let present: CreateResponse =
            serde_json::from_str(r#"{"code":200,"shortenedUrl":"abc123"}"#).unwrap();
        assert_eq!(present.alias(), Some("abc123"));
    }

    #[test]
    fn state_latch_and_labels() {
        let id = Uuid::new_v4();
        let submitting = SubmissionState::Submitting { id };
        assert!(submitting.is_in_flight());
        assert_eq!(submitting.active_id(), Some(id));
        assert_eq!(submitting.message(), None);

        let settled = SubmissionState::settle(SubmissionOutcome::failed("Error sending URL"));
        assert!(!settled.is_in_flight());
        assert_eq!(settled.message(), Some("Error sending URL"));
        assert_eq!(settled.label(), "Failed");
        assert_eq!(SubmissionState::Idle.label(), "Idle");
    }
}
