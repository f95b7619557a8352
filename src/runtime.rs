use crate::config::ServiceConfig;
use crate::navigate::SystemNavigator;
use crate::shorten_client::ShortenClient;
use crate::submission::{SubmissionEvent, SubmissionId, SubmissionOutcome, run_submission};
use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use url::Url;

#[derive(Clone, Debug)]
pub enum SubmissionJob {
    Submit { id: SubmissionId, long_url: Url },
    Stop,
}

pub struct WorkerHandle {
    pub sender: Sender<SubmissionJob>,
    pub join: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn stop(&mut self) {
        let _ = self.sender.send(SubmissionJob::Stop);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the thread that runs submission pipelines off the UI thread. One
/// worker per form instance; it processes jobs strictly one at a time, which
/// together with the app-side latch keeps submissions from overlapping.
pub fn spawn_submission_worker(
    config: ServiceConfig,
    event_tx: Sender<SubmissionEvent>,
) -> WorkerHandle {
    let (tx, rx) = crossbeam_channel::unbounded();
    let join = thread::spawn(move || run_worker(config, rx, event_tx));
    WorkerHandle {
        sender: tx,
        join: Some(join),
    }
}

fn run_worker(
    config: ServiceConfig,
    job_rx: Receiver<SubmissionJob>,
    event_tx: Sender<SubmissionEvent>,
) {
    let navigator = SystemNavigator;
    // A failed handle construction degrades every job to a failure event
    // instead of tearing the worker down.
    let mut client = ShortenClient::new(config);

    while let Ok(job) = job_rx.recv() {
        match job {
            SubmissionJob::Stop => break,
            SubmissionJob::Submit { id, long_url } => {
                let outcome = match client.as_mut() {
                    Ok(client) => run_submission(&long_url, client, &navigator),
                    Err(err) => SubmissionOutcome::failed(format!("Error: {err}")),
                };
                let _ = event_tx.send(SubmissionEvent { id, outcome });
            }
        }
    }
}
