//! Session controller for a form-building conversation.
//!
//! `SessionController` owns everything a session has -- transcript, current
//! schema, loading flag -- and exposes it only as immutable
//! [`SessionSnapshot`]s. `submit` is the single operation that changes it:
//!
//! 1. blank input or a submission already in flight: rejected, nothing changes
//! 2. the user turn is appended and loading is set, before any await
//! 3. the gateway gets the prior turns as `history` plus the new `message`
//! 4. a reply is appended verbatim; if it parses as a schema it replaces the
//!    current one, otherwise the current schema stays
//! 5. a gateway failure becomes an assistant turn explaining the error
//! 6. loading is cleared no matter how the call ends (drop guard)

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use formwright_types::chat::Turn;
use formwright_types::error::NotASchema;
use formwright_types::form::FormSchema;
use formwright_types::gateway::{GatewayError, GatewayRequest};

use crate::chat::transcript::Transcript;
use crate::gateway::AssistantGateway;
use crate::render::{RenderState, render};
use crate::schema::extract_schema;

/// Immutable view of a session at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub transcript: Transcript,
    pub schema: Option<Arc<FormSchema>>,
    pub loading: bool,
}

impl SessionSnapshot {
    /// Render the form pane for this snapshot.
    pub fn render(&self) -> RenderState {
        render(self.schema.as_deref(), self.loading)
    }
}

/// What a call to [`SessionController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent and nothing changed.
    Rejected(SubmitRejection),
    /// The reply was a form schema; it is now the current schema.
    Schema(Arc<FormSchema>),
    /// The reply was conversation; the current schema is untouched.
    Reply(NotASchema),
    /// The gateway failed; an error turn was appended.
    Failed(GatewayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input was empty or whitespace.
    Blank,
    /// Another submission is still waiting for its reply.
    Busy,
}

/// Content of the assistant turn synthesized for a gateway failure.
pub fn error_turn_text(err: &GatewayError) -> String {
    format!("Sorry, I encountered an error: {err}. Please try again.")
}

/// Orchestrates transcript, gateway, extractor and renderer for one session.
pub struct SessionController<G: AssistantGateway> {
    id: Uuid,
    gateway: G,
    state: watch::Sender<SessionSnapshot>,
}

impl<G: AssistantGateway> SessionController<G> {
    /// New session with an empty transcript.
    pub fn new(gateway: G) -> Self {
        Self::with_transcript(gateway, Transcript::new())
    }

    /// New session starting from an existing transcript (e.g. the greeting).
    pub fn with_transcript(gateway: G, transcript: Transcript) -> Self {
        let (state, _) = watch::channel(SessionSnapshot {
            transcript,
            schema: None,
            loading: false,
        });

        Self {
            id: Uuid::now_v7(),
            gateway,
            state,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Copy of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change (user turn appended, loading
    /// toggled, reply appended, schema replaced).
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Render the form pane for the current state.
    pub fn render_current(&self) -> RenderState {
        self.state.borrow().render()
    }

    /// Submit one user message and wait for the assistant.
    #[tracing::instrument(
        name = "submit",
        skip(self, user_text),
        fields(session_id = %self.id, gateway = self.gateway.name(), chars = user_text.len())
    )]
    pub async fn submit(&self, user_text: &str) -> SubmitOutcome {
        if user_text.trim().is_empty() {
            return SubmitOutcome::Rejected(SubmitRejection::Blank);
        }

        let mut history: Option<Vec<Turn>> = None;
        self.state.send_if_modified(|s| {
            if s.loading {
                return false;
            }
            history = Some(s.transcript.turns().to_vec());
            s.transcript.append(Turn::user(user_text));
            s.loading = true;
            true
        });

        let Some(history) = history else {
            info!("Submission ignored: a reply is still pending");
            return SubmitOutcome::Rejected(SubmitRejection::Busy);
        };

        let _loading = LoadingGuard { state: &self.state };

        let request = GatewayRequest {
            message: user_text.to_string(),
            history,
        };

        match self.gateway.send(&request).await {
            Ok(raw) => {
                let outcome = match extract_schema(&raw) {
                    Ok(schema) => SubmitOutcome::Schema(Arc::new(schema)),
                    Err(reason) => SubmitOutcome::Reply(reason),
                };
                let new_schema = match &outcome {
                    SubmitOutcome::Schema(schema) => Some(Arc::clone(schema)),
                    _ => None,
                };

                self.state.send_modify(|s| {
                    s.transcript.append(Turn::assistant(raw));
                    if let Some(schema) = new_schema {
                        s.schema = Some(schema);
                    }
                });

                match &outcome {
                    SubmitOutcome::Schema(schema) => info!(
                        title = %schema.title,
                        field_count = schema.fields.len(),
                        "Form schema replaced"
                    ),
                    _ => info!("Conversational reply; form schema unchanged"),
                }
                outcome
            }
            Err(err) => {
                warn!(error = %err, "Gateway call failed");
                let content = error_turn_text(&err);
                self.state
                    .send_modify(|s| s.transcript.append(Turn::assistant(content)));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Clears the loading flag when dropped, including when the submit future is
/// dropped while the gateway call is pending.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SessionSnapshot>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_if_modified(|s| std::mem::replace(&mut s.loading, false));
    }
}
