//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a real
//! [`StateActor`](crate::framework::StateActor).
//!
//! Two styles are available:
//!
//! - [`MockClient`] - queue expectations up front, then call the client and [`MockClient::verify`].
//! - [`create_mock_client`] plus [`expect_command`] / [`expect_snapshot`] - receive the raw
//!   request yourself, inspect the payload, and answer through its responder.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | None (canned replies) | Real state management |
//! | **Error injection** | Easy (`return_err`) | Needs a failing state |
//! | **Use case** | Logic *around* the client | The state itself or the full system |

use crate::framework::{ActorState, FrameworkError, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

/// Represents an expected request to the mock client.
enum Expectation<S: ActorState> {
    Command {
        response: Result<S::Reply, FrameworkError>,
    },
    Snapshot {
        response: Result<S::Snapshot, FrameworkError>,
    },
}

type ExpectationQueue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match the next expectation makes the background task panic, which drops the
/// responder and surfaces as [`FrameworkError::ActorDropped`] at the call site.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<CartEngine>::new();
/// mock.expect_command().return_ok(CartReply::Updated(summary));
///
/// let client = CartClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: ExpectationQueue<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: ExpectationQueue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<S> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot read.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<S: ActorState> {
    expectations: ExpectationQueue<S>,
}

impl<S: ActorState> CommandExpectationBuilder<S> {
    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: S::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Reply, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Command { response });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<S: ActorState> {
    expectations: ExpectationQueue<S>,
}

impl<S: ActorState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        self.push(Ok(snapshot));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Snapshot, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Snapshot { response });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so the test can inspect each
/// request and decide how (or whether) to answer it.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Command request.
pub async fn expect_command<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Command,
    oneshot::Sender<Result<S::Reply, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
