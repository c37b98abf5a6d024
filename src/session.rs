//! Session controller tying the state machine to background workers.
//!
//! A [`Session`] owns the [`AppState`], feeds events through
//! [`handle_event`], and executes the resulting actions. Worker messages run as
//! detached tokio tasks; their responses come back over an unbounded channel
//! and are applied as ordinary events, so the generation fence in the handler
//! decides whether they still matter.
//!
//! ```text
//! Event ──► handle_event ──► Action::PostToWorker ──► tokio::spawn(worker)
//!   ▲                                                        │
//!   └──────────── Event::WorkerResponse ◄── mpsc ◄───────────┘
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::{GeminiClient, RecipeGenerator};
use crate::domain::{FridgeChefError, Result};
use crate::worker::{RecipeWorker, WorkerMessage, WorkerResponse};
use crate::Config;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Interactive session state plus the plumbing to run generation requests.
///
/// [`Session::dispatch`] spawns tasks, so it must be called from within a
/// tokio runtime.
#[derive(Debug)]
pub struct Session {
    state: AppState,
    worker: RecipeWorker,
    responses_tx: UnboundedSender<WorkerResponse>,
    responses_rx: UnboundedReceiver<WorkerResponse>,
    should_quit: bool,
}

impl Session {
    /// Creates a session around an initial state and a generation backend.
    pub fn new(state: AppState, generator: Arc<dyn RecipeGenerator>) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        Self {
            state,
            worker: RecipeWorker::new(generator),
            responses_tx,
            responses_rx,
            should_quit: false,
        }
    }

    /// Creates a Gemini-backed session from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] when no API key is configured or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GeminiClient::new(config.gemini_config()?)?;
        Ok(Self::new(crate::initialize(config), Arc::new(client)))
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether a quit action has been executed.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one event and executes the actions it produces.
    ///
    /// Returns `true` if the view should be redrawn.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        for action in actions {
            self.execute_action(action);
        }
        Ok(should_render)
    }

    /// Waits for the next worker response.
    ///
    /// Cancel-safe, so it can be raced against user input in `select!`.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Worker`] if the response channel closed.
    pub async fn next_response(&mut self) -> Result<WorkerResponse> {
        self.responses_rx
            .recv()
            .await
            .ok_or_else(|| FridgeChefError::Worker("response channel closed".to_string()))
    }

    /// Applies a worker response. Returns `true` if the view should be redrawn.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn apply_response(&mut self, response: WorkerResponse) -> Result<bool> {
        self.dispatch(&Event::WorkerResponse(response))
    }

    /// Waits for the next worker response and applies it.
    ///
    /// # Errors
    ///
    /// See [`Session::next_response`] and [`Session::apply_response`].
    pub async fn process_next_response(&mut self) -> Result<bool> {
        let response = self.next_response().await?;
        self.apply_response(response)
    }

    #[tracing::instrument(level = "debug", skip(self, action), fields(action = action.name()))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::PostToWorker(message) => self.spawn_worker(message),
        }
    }

    /// Runs `message` on a detached task that reports back over the channel.
    fn spawn_worker(&self, message: WorkerMessage) {
        let worker = self.worker.clone();
        let responses_tx = self.responses_tx.clone();
        tracing::debug!(generation = %message.generation(), "posting worker message");

        tokio::spawn(async move {
            let response = worker.handle_message(message).await;
            if responses_tx.send(response).is_err() {
                tracing::debug!("session ended before worker response was delivered");
            }
        });
    }
}
