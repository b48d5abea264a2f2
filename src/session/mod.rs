//! Session gate — the process-wide cached authentication state.
//!
//! On activation the gate subscribes to the identity collaborator's change
//! stream, issues one asynchronous fetch for the current session, and from
//! then on applies every event last-wins into a [`watch`] cell. Consumers
//! read a synchronous snapshot via [`SessionGate::current`] or follow
//! changes via [`SessionGate::watch`]; the gate itself makes no navigation
//! decisions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::domain::model::{AuthEvent, Session, SessionState};

/// The external identity collaborator boundary.
#[async_trait]
pub trait IdentityCollaborator: Send + Sync {
    /// One-shot fetch of the current session, if any.
    async fn current_session(&self) -> Option<Session>;

    /// Push-based change stream. Called once per gate activation.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthEvent>;
}

/// Process-wide cache of the collaborator's authentication state.
///
/// The cache starts as [`SessionState::Loading`] until the initial fetch
/// lands; callers must not read that as "signed out". Dropping the gate
/// aborts its background task, so the collaborator subscription cannot
/// outlive the last holder.
pub struct SessionGate {
    cache: watch::Receiver<SessionState>,
    task: JoinHandle<()>,
}

impl SessionGate {
    /// Activate the gate: subscribe to the change stream, kick off the
    /// initial fetch, and start applying events in arrival order.
    pub fn activate(collaborator: Arc<dyn IdentityCollaborator>) -> Self {
        let (tx, cache) = watch::channel(SessionState::Loading);

        let task = tokio::spawn(async move {
            // Subscribe before fetching so no event emitted during the
            // fetch is lost; buffered events apply after the fetch result.
            let mut events = collaborator.subscribe();

            let initial = match collaborator.current_session().await {
                Some(session) => SessionState::SignedIn(session),
                None => SessionState::SignedOut,
            };
            let _ = tx.send(initial);

            while let Some(event) = events.recv().await {
                tracing::debug!(signed_in = event.session().is_some(), "applying auth event");
                let next = match event {
                    AuthEvent::SignedIn { session, .. } => SessionState::SignedIn(session),
                    AuthEvent::SignedOut { .. } => SessionState::SignedOut,
                };
                // Last event wins, unconditionally.
                if tx.send(next).is_err() {
                    break;
                }
            }
        });

        SessionGate { cache, task }
    }

    /// Snapshot of the last-known state.
    pub fn current(&self) -> SessionState {
        self.cache.borrow().clone()
    }

    /// Follow state changes. Dropping the returned receiver is the
    /// unsubscribe; a slow consumer simply reads a staler snapshot until
    /// it next looks.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.cache.clone()
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.task.abort();
    }
}
