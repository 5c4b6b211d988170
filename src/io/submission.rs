use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::backend::{BackendClient, SubmitError};
use crate::model::{ScheduledTask, Task};

pub type SubmitOutcome = Result<Vec<ScheduledTask>, SubmitError>;

/// Runs backend submissions off the UI thread, one at a time.
///
/// The UI calls [`Submitter::poll`] every frame; the outcome is delivered
/// exactly once.
pub struct Submitter {
    runtime: Handle,
    client: Option<Arc<BackendClient>>,
    pending: Option<oneshot::Receiver<SubmitOutcome>>,
}

impl Submitter {
    pub fn new(runtime: Handle, client: Option<BackendClient>) -> Self {
        Self {
            runtime,
            client: client.map(Arc::new),
            pending: None,
        }
    }

    pub fn endpoint(&self) -> Option<&url::Url> {
        self.client.as_deref().map(BackendClient::endpoint)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a submission. Returns false, and does nothing, while another
    /// submission is still in flight.
    ///
    /// `repaint` is woken when the outcome is ready so an idle UI picks it up.
    pub fn submit(&mut self, tasks: Vec<Task>, repaint: Option<egui::Context>) -> bool {
        if self.is_pending() {
            tracing::debug!("submission already in flight, ignoring");
            return false;
        }

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        let Some(client) = self.client.clone() else {
            tracing::warn!("submit requested without a configured backend endpoint");
            let _ = tx.send(Err(SubmitError::NoEndpoint));
            return true;
        };

        self.runtime.spawn(async move {
            let outcome = client.submit(&tasks).await;
            if let Err(e) = &outcome {
                if !matches!(e, SubmitError::Rejected(_)) {
                    tracing::error!(error = %e, "submission failed");
                }
            }
            // The receiver is gone only if the app shut down.
            let _ = tx.send(outcome);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        true
    }

    /// Take the outcome of the in-flight submission if it has completed.
    pub fn poll(&mut self) -> Option<SubmitOutcome> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SubmitError::Aborted),
        };
        self.pending = None;
        Some(outcome)
    }
}
