use crate::form::validate_long_url;
use crate::runtime::SubmissionJob;
use crate::settings::AppSettings;
use crate::submission::{SubmissionEvent, SubmissionOutcome, SubmissionState};
use crossbeam_channel::Sender;
use url::Url;
use uuid::Uuid;

/// State of one mounted form. The UI renders purely from this; mutation
/// happens through the methods below and nowhere else.
pub struct AppState {
    pub endpoint: Url,
    pub refresh_hz: u16,
    pub form_value: String,
    pub form_error: Option<String>,
    pub submission: SubmissionState,
    job_tx: Sender<SubmissionJob>,
}

impl AppState {
    pub fn new(settings: &AppSettings, job_tx: Sender<SubmissionJob>) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            refresh_hz: settings.refresh_hz,
            form_value: String::new(),
            form_error: None,
            submission: SubmissionState::Idle,
            job_tx,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.form_value.push(ch);
        self.form_error = None;
    }

    pub fn backspace(&mut self) {
        self.form_value.pop();
        self.form_error = None;
    }

    pub fn clear_field(&mut self) {
        self.form_value.clear();
        self.form_error = None;
    }

    /// The submit gesture. Dropped while a submission is in flight; otherwise
    /// the field is validated, and only a valid URL ever reaches the worker.
    /// Entering `Submitting` discards the previous status message.
    pub fn submit(&mut self) {
        if self.submission.is_in_flight() {
            return;
        }

        match validate_long_url(&self.form_value) {
            Err(err) => {
                self.form_error = Some(err.to_string());
            }
            Ok(long_url) => {
                self.form_error = None;
                let id = Uuid::new_v4();
                self.submission = SubmissionState::Submitting { id };
                if self.job_tx.send(SubmissionJob::Submit { id, long_url }).is_err() {
                    // Worker is gone; settle immediately so the latch opens.
                    self.submission = SubmissionState::settle(SubmissionOutcome::failed(
                        "Error: worker unavailable",
                    ));
                }
            }
        }
    }

    /// Applies a worker event. Only the event for the active submission may
    /// settle the state; anything else is stale and ignored.
    pub fn apply_event(&mut self, event: SubmissionEvent) {
        if self.submission.active_id() == Some(event.id) {
            self.submission = SubmissionState::settle(event.outcome);
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.submission.message()
    }
}
