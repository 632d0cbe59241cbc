//! Background solver worker using a shared thread and channels.
//!
//! Requests are queued on one long-lived worker thread. Each request carries
//! a [`CancelToken`]; a caller that stops waiting cancels it so the worker
//! moves on to the next request.

use std::{
    sync::{OnceLock, mpsc},
    thread,
    time::Duration,
};

use log::{debug, trace};
use reckon_core::NumberPool;
use reckon_solver::{CancelToken, CombinationSolver, SolveResult, SolverStats};

/// A request that can be offloaded to the background worker.
#[derive(Debug, Clone)]
pub(crate) enum WorkRequest {
    /// Solve a puzzle for a hint or a full solution.
    Hint {
        numbers: NumberPool,
        target: i64,
        max_depth: usize,
    },
}

/// A response produced by background work.
#[derive(Debug, Clone)]
pub(crate) enum WorkResponse {
    /// The solve finished.
    HintReady {
        result: SolveResult,
        stats: SolverStats,
    },
    /// The request was cancelled before it finished.
    Cancelled,
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
    /// The request did not finish in time and was cancelled.
    #[display("timed out after {} ms", _0.as_millis())]
    TimedOut(#[error(not(source))] Duration),
    /// The request was cancelled before the worker finished it.
    #[display("request was cancelled")]
    Cancelled,
}

impl WorkRequest {
    fn handle(&self, token: &CancelToken) -> WorkResponse {
        match self {
            Self::Hint {
                numbers,
                target,
                max_depth,
            } => {
                let solver = CombinationSolver::with_max_depth(*max_depth);
                let mut stats = SolverStats::default();
                match solver.solve_cancellable(numbers, *target, token, &mut stats) {
                    Ok(result) => {
                        debug!(
                            "solved {numbers} -> {target} at depth {}: {} nodes, {} candidates",
                            solver.max_depth(),
                            stats.nodes_visited(),
                            stats.candidates_generated()
                        );
                        WorkResponse::HintReady { result, stats }
                    }
                    Err(_) => {
                        debug!("solve of {numbers} -> {target} cancelled");
                        WorkResponse::Cancelled
                    }
                }
            }
        }
    }
}

struct WorkRequestEnvelope {
    request: WorkRequest,
    token: CancelToken,
    response_tx: mpsc::Sender<WorkResponse>,
}

// Shared worker thread sender reused across requests.
static WORKER_SENDER: OnceLock<mpsc::Sender<WorkRequestEnvelope>> = OnceLock::new();

fn worker_sender() -> &'static mpsc::Sender<WorkRequestEnvelope> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                if envelope.token.is_cancelled() {
                    trace!("skipping cancelled request");
                    let _ = envelope.response_tx.send(WorkResponse::Cancelled);
                    continue;
                }
                let response = envelope.request.handle(&envelope.token);
                let _ = envelope.response_tx.send(response);
            }
        });
        tx
    })
}

/// A handle for waiting on background work completion.
pub(crate) struct WorkHandle {
    receiver: mpsc::Receiver<WorkResponse>,
    token: CancelToken,
}

impl std::fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkHandle")
            .field("cancelled", &self.token.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl WorkHandle {
    /// Waits up to `timeout` for the response, cancelling the request if it
    /// does not arrive in time.
    pub(crate) fn wait_timeout(&self, timeout: Duration) -> Result<WorkResponse, WorkError> {
        use mpsc::RecvTimeoutError;

        match self.receiver.recv_timeout(timeout) {
            Ok(response) => Ok(response),
            Err(RecvTimeoutError::Timeout) => {
                self.cancel();
                Err(WorkError::TimedOut(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }

    /// Cancels the request.
    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }
}

// Nobody is waiting for the response any more.
impl Drop for WorkHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Enqueues a request on the shared worker thread and returns a handle for
/// waiting on completion.
pub(crate) fn enqueue(request: WorkRequest) -> Result<WorkHandle, WorkError> {
    let token = CancelToken::new();
    let (response_tx, response_rx) = mpsc::channel();
    worker_sender()
        .send(WorkRequestEnvelope {
            request,
            token: token.clone(),
            response_tx,
        })
        .map_err(|_| WorkError::WorkerDisconnected)?;

    Ok(WorkHandle {
        receiver: response_rx,
        token,
    })
}
